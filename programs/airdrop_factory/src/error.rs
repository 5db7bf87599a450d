use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropFactoryError {
    // Access control errors
    #[msg("Only owner can perform this action")]
    OnlyOwner,
    #[msg("Only factory owner can perform this action")]
    OnlyFactoryOwner,
    #[msg("Only the transport endpoint can deliver messages")]
    OnlyTransportAuthority,
    #[msg("Invalid owner account")]
    InvalidOwner,

    // Template registry errors
    #[msg("Template not found")]
    TemplateNotFound,
    #[msg("Template name is already registered")]
    TemplateAlreadyRegistered,
    #[msg("Template name cannot be empty")]
    TemplateNameEmpty,

    // Claim errors
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("Incorrect fee amount")]
    IncorrectAmount,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Vault balance is not enough for this claim")]
    AmountNotEnough,
    #[msg("Nothing to claim yet")]
    NothingToClaim,

    // Deployment errors
    #[msg("Vesting duration must be greater than zero")]
    InvalidVestingDuration,
    #[msg("Invalid amount")]
    InvalidAmount,

    // Distributor errors
    #[msg("Not eligible to get rewarded")]
    NotEligibleForReward,
    #[msg("Destination chain sender is not allowlisted")]
    DestinationChainSenderNotAllowlisted,
    #[msg("Source chain sender is not allowlisted")]
    SourceChainSenderNotAllowlisted,
    #[msg("Token address is already set")]
    TokenAlreadySet,
    #[msg("Reward token is not set")]
    RewardTokenNotSet,
    #[msg("Distributor account required but not provided")]
    DistributorAccountMissing,
    #[msg("Distributor account does not match the airdrop configuration")]
    DistributorMismatch,
    #[msg("Wrong distributor role for this action")]
    WrongDistributorRole,
    #[msg("Malformed score message payload")]
    InvalidScorePayload,
    #[msg("Reward accounts required for local redemption")]
    RewardAccountsMissing,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the configured token mint")]
    TokenMintMismatch,
}
