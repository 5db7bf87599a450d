#[cfg(test)]
mod tests {
    use crate::state::{Airdrop, AirdropKind};

    const DAY: i64 = 24 * 60 * 60;

    fn vesting_airdrop(start: i64, duration: i64) -> Airdrop {
        Airdrop {
            kind: AirdropKind::LinearVesting,
            vesting_start: start,
            vesting_duration: duration,
            ..Airdrop::default()
        }
    }

    #[test]
    fn test_standard_vests_everything_immediately() {
        let airdrop = Airdrop {
            kind: AirdropKind::Standard,
            ..Airdrop::default()
        };
        assert_eq!(airdrop.vested_amount(100, 0).unwrap(), 100);
        assert_eq!(airdrop.vested_amount(100, i64::MAX).unwrap(), 100);
    }

    #[test]
    fn test_nothing_vested_before_start() {
        let airdrop = vesting_airdrop(1_000, 100 * DAY);
        assert_eq!(airdrop.vested_amount(100, 0).unwrap(), 0);
        assert_eq!(airdrop.vested_amount(100, 999).unwrap(), 0);
        assert_eq!(airdrop.vested_amount(100, 1_000).unwrap(), 0);
    }

    #[test]
    fn test_fully_vested_at_and_after_end() {
        let airdrop = vesting_airdrop(0, 100 * DAY);
        assert_eq!(airdrop.vested_amount(100, 100 * DAY).unwrap(), 100);
        assert_eq!(airdrop.vested_amount(100, 500 * DAY).unwrap(), 100);
    }

    #[test]
    fn test_linear_midpoints() {
        let airdrop = vesting_airdrop(0, 100 * DAY);
        assert_eq!(airdrop.vested_amount(100, 25 * DAY).unwrap(), 25);
        assert_eq!(airdrop.vested_amount(100, 50 * DAY).unwrap(), 50);
        assert_eq!(airdrop.vested_amount(100, 75 * DAY).unwrap(), 75);
    }

    /// claimable(t1) <= claimable(t2) for t1 <= t2, and never above total
    #[test]
    fn test_monotonic_and_clamped() {
        let airdrop = vesting_airdrop(10_000, 7 * DAY);
        let total = 1_234_567;

        let mut prev = 0u64;
        let mut t = 0i64;
        while t < 20 * DAY {
            let vested = airdrop.vested_amount(total, t).unwrap();
            assert!(vested >= prev, "vesting went backwards at t={}", t);
            assert!(vested <= total);
            prev = vested;
            t += 3_600;
        }
        assert_eq!(prev, total);
    }

    /// The day-50 / day-100 scenario: claim half way, nothing accrues in
    /// the same instant, the remainder is exactly the other half
    #[test]
    fn test_two_step_claim_schedule() {
        let airdrop = vesting_airdrop(0, 100 * DAY);
        let total = 100u64;

        let at_day_50 = airdrop.vested_amount(total, 50 * DAY).unwrap();
        assert_eq!(at_day_50, 50);

        // second claim in the same instant: delta over what was claimed is 0
        let claimed = at_day_50;
        assert_eq!(airdrop.vested_amount(total, 50 * DAY).unwrap() - claimed, 0);

        let at_day_100 = airdrop.vested_amount(total, 100 * DAY).unwrap();
        assert_eq!(at_day_100 - claimed, 50);
    }

    /// Rounding always favors the vault: the vested amount is the floor
    #[test]
    fn test_rounding_floors() {
        let airdrop = vesting_airdrop(0, 3);
        assert_eq!(airdrop.vested_amount(10, 1).unwrap(), 3);
        assert_eq!(airdrop.vested_amount(10, 2).unwrap(), 6);
        assert_eq!(airdrop.vested_amount(10, 3).unwrap(), 10);
    }

    /// Large totals survive the widening multiply
    #[test]
    fn test_no_overflow_on_large_totals() {
        let airdrop = vesting_airdrop(0, 365 * DAY);
        let total = u64::MAX;
        let half = airdrop.vested_amount(total, 365 * DAY / 2).unwrap();
        assert!(half < total);
        assert_eq!(airdrop.vested_amount(total, 365 * DAY).unwrap(), total);
    }
}
