//! Pure score-aggregation math. Kept free of Anchor account types so it
//! can be unit- and property-tested without a runtime.

use crate::errors::SolanIdError;
use anchor_lang::prelude::*;

/// `base_score * weight / 100`, checked. `weight` is in the same units as
/// `ScoringConfig::weights` (100 == 1.0x).
pub fn weighted_score(base_score: u64, weight: u16) -> Result<u64> {
    let product = base_score
        .checked_mul(weight as u64)
        .ok_or(SolanIdError::Overflow)?;
    Ok(product / 100)
}

/// Sums the weighted scores of every currently-active (non-revoked)
/// individual proof, then applies the diversity bonus once over the sum
/// when at least two sources are active. The bonus is applied to the
/// total, never per source.
pub fn aggregate_score(
    active_weighted_scores: &[u64],
    active_source_count: u8,
    diversity_bonus_pct: u64,
) -> Result<u64> {
    let mut sum: u64 = 0;
    for s in active_weighted_scores {
        sum = sum.checked_add(*s).ok_or(SolanIdError::Overflow)?;
    }

    if active_source_count >= 2 {
        let bonus = sum
            .checked_mul(diversity_bonus_pct)
            .ok_or(SolanIdError::Overflow)?
            / 100;
        sum = sum.checked_add(bonus).ok_or(SolanIdError::Overflow)?;
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn weighted_score_applies_percentage() {
        assert_eq!(weighted_score(150, 100).unwrap(), 150);
        assert_eq!(weighted_score(100, 50).unwrap(), 50);
    }

    #[test]
    fn weighted_score_overflows() {
        assert!(weighted_score(u64::MAX, 200).is_err());
    }

    #[test]
    fn aggregate_single_source_has_no_bonus() {
        let total = aggregate_score(&[150], 1, 20).unwrap();
        assert_eq!(total, 150);
    }

    #[test]
    fn aggregate_two_sources_applies_bonus_to_sum() {
        // base 100 + base 100, weight 1.0x each, 20% diversity bonus.
        let total = aggregate_score(&[100, 100], 2, 20).unwrap();
        assert_eq!(total, 240);
    }

    #[test]
    fn aggregate_drops_bonus_when_active_count_below_two() {
        // Same sum, but active_source_count reports 1 (e.g. right after a revoke).
        let total = aggregate_score(&[150], 1, 50).unwrap();
        assert_eq!(total, 150);
    }

    #[test]
    fn aggregate_overflow_guard() {
        // base_score = 2^60, weight = 100 (1.0x) => weighted = 2^60, well
        // within u64, but summing two of them plus a 20% bonus must still
        // be checked rather than silently wrap.
        let huge = 1u64 << 62;
        let result = aggregate_score(&[huge, huge], 2, 20);
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn weighted_score_never_panics(base in 0u64..=u64::MAX, weight in 0u16..=u16::MAX) {
            let _ = weighted_score(base, weight);
        }

        #[test]
        fn aggregate_score_monotonic_in_bonus(
            a in 0u64..1_000_000,
            b in 0u64..1_000_000,
            bonus in 0u64..=100,
        ) {
            let without_bonus = aggregate_score(&[a, b], 1, bonus).unwrap();
            let with_bonus = aggregate_score(&[a, b], 2, bonus).unwrap();
            prop_assert!(with_bonus >= without_bonus);
        }
    }
}
