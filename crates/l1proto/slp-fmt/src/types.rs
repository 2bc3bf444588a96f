use std::fmt;

use crate::error::{SlpError, SlpResult};

/// Length of a token ID in bytes.
pub const TOKEN_ID_LEN: usize = 32;

/// Token type of an SLP message.
///
/// The type decides which extra rules apply to a genesis: NFT1 children are
/// indivisible singletons with no minting baton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenType {
    /// Type 1 fungible token.
    Fungible,

    /// NFT1 child token, minted from a group.
    NftChild,

    /// NFT1 group token.
    NftGroup,
}

impl TokenType {
    /// Returns the wire code for this token type.
    pub const fn code(self) -> u16 {
        match self {
            Self::Fungible => 0x01,
            Self::NftChild => 0x41,
            Self::NftGroup => 0x81,
        }
    }

    /// Looks up a token type by its wire code.
    pub const fn from_code(code: u64) -> Option<Self> {
        match code {
            0x01 => Some(Self::Fungible),
            0x41 => Some(Self::NftChild),
            0x81 => Some(Self::NftGroup),
            _ => None,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fungible => "token-type1",
            Self::NftChild => "nft1-child",
            Self::NftGroup => "nft1-group",
        })
    }
}

/// Transaction type of an SLP message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TxKind {
    /// Creates a new token.
    Genesis,

    /// Issues more of an existing token.
    Mint,

    /// Moves existing tokens between outputs.
    Send,
}

impl TxKind {
    /// Returns the type string as it appears on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Genesis => "GENESIS",
            Self::Mint => "MINT",
            Self::Send => "SEND",
        }
    }

    /// Matches the raw transaction type chunk.  Case sensitive.
    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        match buf {
            b"GENESIS" => Some(Self::Genesis),
            b"MINT" => Some(Self::Mint),
            b"SEND" => Some(Self::Send),
            _ => None,
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ID of a token, the txid of its genesis as carried in MINT and SEND.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId([u8; TOKEN_ID_LEN]);

impl TokenId {
    /// Creates a new instance from raw bytes.
    pub const fn new(bytes: [u8; TOKEN_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes, in the order they were pushed.
    pub const fn as_bytes(&self) -> &[u8; TOKEN_ID_LEN] {
        &self.0
    }

    /// Hex encoding of the raw bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl TryFrom<&[u8]> for TokenId {
    type Error = SlpError;

    fn try_from(value: &[u8]) -> SlpResult<Self> {
        let bytes = value
            .try_into()
            .map_err(|_| SlpError::TokenIdSize(value.len()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({self})")
    }
}
