use anchor_lang::prelude::*;

use crate::error::AirdropFactoryError;

/// Score-transfer payload carried as the transport's opaque data field
///
/// Borsh-encoded `(account, amount, redeem_locally)`. The receiver decodes
/// it out of the raw message bytes; anything that does not parse exactly is
/// rejected.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScorePayload {
    /// Account the score belongs to (same key on both chains)
    pub account: Pubkey,
    /// Exact score amount moved by the message
    pub amount: u64,
    /// Whether the receiver should pay out immediately on delivery
    pub redeem_locally: bool,
}

impl ScorePayload {
    /// Serialized size: pubkey + u64 + bool
    pub const ENCODED_LEN: usize = 32 + 8 + 1;

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(Self::ENCODED_LEN);
        self.serialize(&mut buf)
            .map_err(|_| AirdropFactoryError::InvalidScorePayload)?;
        Ok(buf)
    }

    /// Strict decode: trailing bytes are as malformed as missing ones
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut slice = data;
        let payload = Self::deserialize(&mut slice)
            .map_err(|_| AirdropFactoryError::InvalidScorePayload)?;
        require!(slice.is_empty(), AirdropFactoryError::InvalidScorePayload);
        Ok(payload)
    }
}

/**
 * Outbound cross-chain message
 *
 * The sender-side outbox: one PDA per dispatched score transfer. The
 * transport (an external relayer) watches these accounts plus the
 * ScoreSent event, delivers the payload to the destination chain, and is
 * free to retry; the sender's ledger was already debited when the message
 * was created, so redelivery can never double-spend.
 *
 * Derivation: ["outbox", distributor_key, nonce_le]
 */
#[account]
#[derive(Debug)]
pub struct OutboundMessage {
    /// Sender distributor the message originates from
    pub sender: Pubkey,
    /// Sequence number within the sender's outbox
    pub nonce: u64,
    /// Destination chain id
    pub dest_chain: u64,
    /// Receiver address on the destination chain
    pub dest_receiver: Pubkey,
    /// The score-transfer payload
    pub payload: ScorePayload,
    /// Transport fee collected for this message
    pub fee_paid: u64,
}

impl OutboundMessage {
    pub const LEN: usize = 8 + std::mem::size_of::<OutboundMessage>();
}

/**
 * Inbound message receipt
 *
 * Replay protection for delivered messages: the PDA is derived from the
 * full message identity, so a second delivery of the same message fails at
 * account creation. The transport promises at-least-once delivery; this
 * receipt turns that into exactly-once accrual.
 *
 * Derivation: ["inbox", distributor_key, chain_le, sender, nonce_le]
 */
#[account]
#[derive(Default, Debug)]
pub struct InboundReceipt {
    /// Source chain the message came from
    pub source_chain: u64,
    /// Sender address on the source chain
    pub source_sender: Pubkey,
    /// Message sequence number assigned by the source
    pub nonce: u64,
    /// Score amount the message carried
    pub amount: u64,
}

impl InboundReceipt {
    pub const LEN: usize = 8 + std::mem::size_of::<InboundReceipt>();
}
