use thiserror::Error;

use crate::types::TxKind;

/// Errors for decoding SLP messages.
///
/// Every variant is terminal: a script that fails any check is not an SLP
/// message, and callers should treat the output as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlpError {
    /// The script could not be split into pushes, or a chunk was missing.
    #[error(transparent)]
    Chunk(#[from] slp_chunk_fmt::Error),

    #[error("tx missing output 0")]
    MissingOutput0,

    #[error("token_type length must be 1 or 2 (found {0})")]
    TokenTypeLength(usize),

    #[error("token_type not token-type1, nft1-group, or nft1-child (found {0:#x})")]
    InvalidTokenType(u64),

    #[error("transaction type invalid")]
    InvalidTxType,

    #[error("wrong number of chunks for {kind} (found {found})")]
    WrongChunkCount {
        /// Tx type being decoded.
        kind: TxKind,
        /// Total chunks in the script.
        found: usize,
    },

    #[error("documentHash must be size 0 or 32 (found {0})")]
    DocumentHashSize(usize),

    #[error("decimals length must be 1 (found {0})")]
    DecimalsLength(usize),

    #[error("decimals bigger than 9 (found {0})")]
    DecimalsOutOfRange(u64),

    #[error("mint_baton_vout length must be 0 or 1 (found {0})")]
    MintBatonLength(usize),

    #[error("mint_baton_vout must be at least 2 (found {0})")]
    MintBatonTooLow(u64),

    #[error("initial quantity must be provided as an 8-byte buffer (found {0})")]
    InitialQtyLength(usize),

    #[error("additional quantity must be provided as an 8-byte buffer (found {0})")]
    AdditionalQtyLength(usize),

    #[error("NFT1 child token must have divisibility set to 0 decimal places")]
    NftChildDecimals,

    #[error("NFT1 child token must not have a minting baton")]
    NftChildMintBaton,

    #[error("NFT1 child token must have quantity of 1")]
    NftChildQuantity,

    #[error("NFT1 child cannot have MINT transaction type")]
    NftChildMint,

    #[error("tokenID invalid size (found {0})")]
    TokenIdSize(usize),

    #[error("amount must be 8 bytes (found {0})")]
    AmountLength(usize),

    /// SEND must carry between 1 and 19 amounts.
    #[error("amount count out of range (found {0})")]
    AmountCount(usize),
}

/// Wrapper result type.
pub type SlpResult<T> = Result<T, SlpError>;
