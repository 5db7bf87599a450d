pub mod airdrop;
pub mod claim_receipt;
pub mod distributor;
pub mod factory;
pub mod message;
pub mod nonce_state;

pub use airdrop::*;
pub use claim_receipt::*;
pub use distributor::*;
pub use factory::*;
pub use message::*;
pub use nonce_state::*;
