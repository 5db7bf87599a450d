pub mod add_template;
pub mod claim;
pub mod claim_score;
pub mod deploy_airdrop;
pub mod deposit;
pub mod initialize_distributor;
pub mod initialize_factory;
pub mod receive_score;
pub mod remove_template;
pub mod rescue_score;
pub mod send_score;
pub mod set_allowlist;
pub mod set_reward_token;
pub mod withdraw_claim_fee;
pub mod withdraw_deposited_token;
pub mod withdraw_fee_pool;
pub mod withdraw_reward_token;

pub use add_template::*;
pub use claim::*;
pub use claim_score::*;
pub use deploy_airdrop::*;
pub use deposit::*;
pub use initialize_distributor::*;
pub use initialize_factory::*;
pub use receive_score::*;
pub use remove_template::*;
pub use rescue_score::*;
pub use send_score::*;
pub use set_allowlist::*;
pub use set_reward_token::*;
pub use withdraw_claim_fee::*;
pub use withdraw_deposited_token::*;
pub use withdraw_fee_pool::*;
pub use withdraw_reward_token::*;
