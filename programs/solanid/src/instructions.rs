mod initialize_registry;
mod initialize_scoring_config;
mod submit_proof;
mod verify_proof;
mod revoke_proof;
mod update_min_score;
mod update_scoring_config;
mod update_registry_config;
mod initiate_verifier_rotation;
mod finalize_verifier_rotation;

pub use initialize_registry::*;
pub use initialize_scoring_config::*;
pub use submit_proof::*;
pub use verify_proof::*;
pub use revoke_proof::*;
pub use update_min_score::*;
pub use update_scoring_config::*;
pub use update_registry_config::*;
pub use initiate_verifier_rotation::*;
pub use finalize_verifier_rotation::*;
