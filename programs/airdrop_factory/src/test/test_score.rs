#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use crate::state::ScorePayload;
    use crate::utils::{derived_score, payout_amount, split_claim_fee};

    /// The two halves always reassemble the exact fee, odd values included
    #[test]
    fn test_fee_split_conserves_total() {
        for fee in [0u64, 1, 2, 3, 99, 100, 10_000_001, u64::MAX] {
            let (pool, owner) = split_claim_fee(fee);
            assert_eq!(pool + owner, fee);
            // the pool never gets more than the instance
            assert!(pool <= owner);
        }
        assert_eq!(split_claim_fee(7), (3, 4));
    }

    #[test]
    fn test_derived_score_ratios() {
        // 1:1 at the full denominator
        assert_eq!(derived_score(1_000, 10_000).unwrap(), 1_000);
        // 1% ratio
        assert_eq!(derived_score(1_000, 100).unwrap(), 10);
        // floors toward zero
        assert_eq!(derived_score(99, 100).unwrap(), 0);
        // zero ratio disables scoring entirely
        assert_eq!(derived_score(u64::MAX, 0).unwrap(), 0);
        // widening multiply keeps the extremes safe
        assert_eq!(derived_score(u64::MAX, 10_000).unwrap(), u64::MAX);
    }

    /// The partial-fill rule: an under-funded vault pays its whole balance
    /// and the remainder survives for a later claim
    #[test]
    fn test_partial_payout() {
        let score = 1_000u64;
        let vault = 300u64;

        let paid = payout_amount(score, vault);
        assert_eq!(paid, 300);
        let remaining = score - paid;
        assert_eq!(remaining, 700);

        // top-up, then the follow-up claim moves exactly the remainder
        let paid_after_topup = payout_amount(remaining, 10_000);
        assert_eq!(paid_after_topup, 700);
    }

    #[test]
    fn test_full_payout_when_funded() {
        assert_eq!(payout_amount(1_000, 1_000), 1_000);
        assert_eq!(payout_amount(1_000, 5_000), 1_000);
        assert_eq!(payout_amount(0, 5_000), 0);
    }

    #[test]
    fn test_payload_codec() {
        let payload = ScorePayload {
            account: Pubkey::new_from_array([7u8; 32]),
            amount: 42_000,
            redeem_locally: true,
        };
        let bytes = payload.encode().unwrap();
        assert_eq!(bytes.len(), ScorePayload::ENCODED_LEN);
        assert_eq!(ScorePayload::decode(&bytes).unwrap(), payload);
    }

    /// Transport bytes that are not exactly one payload are rejected
    #[test]
    fn test_payload_decode_strictness() {
        let payload = ScorePayload {
            account: Pubkey::new_from_array([7u8; 32]),
            amount: 7,
            redeem_locally: false,
        };
        let bytes = payload.encode().unwrap();

        // truncated
        assert!(ScorePayload::decode(&bytes[..bytes.len() - 1]).is_err());
        // trailing garbage
        let mut extended = bytes.clone();
        extended.push(0);
        assert!(ScorePayload::decode(&extended).is_err());
        // empty
        assert!(ScorePayload::decode(&[]).is_err());
    }
}
