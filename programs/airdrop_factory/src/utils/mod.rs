pub mod fees;
pub mod merkle;
pub mod token;

pub use fees::*;
pub use merkle::*;
pub use token::*;
