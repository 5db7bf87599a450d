pub mod test_merkle;
pub mod test_score;
pub mod test_vesting;
