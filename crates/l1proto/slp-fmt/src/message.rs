//! Decoded SLP message types.
//!
//! All byte fields are owned copies, nothing here borrows from the script.

use std::borrow::Cow;

use crate::types::{TokenId, TokenType, TxKind};

/// Decoded GENESIS payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlpGenesis {
    ticker: Vec<u8>,
    name: Vec<u8>,
    document_uri: Vec<u8>,
    document_hash: Option<[u8; 32]>,
    decimals: u8,
    mint_baton_vout: Option<u8>,
    initial_qty: u64,
}

impl SlpGenesis {
    pub(crate) fn new(
        ticker: Vec<u8>,
        name: Vec<u8>,
        document_uri: Vec<u8>,
        document_hash: Option<[u8; 32]>,
        decimals: u8,
        mint_baton_vout: Option<u8>,
        initial_qty: u64,
    ) -> Self {
        Self {
            ticker,
            name,
            document_uri,
            document_hash,
            decimals,
            mint_baton_vout,
            initial_qty,
        }
    }

    /// Raw ticker bytes.
    pub fn ticker(&self) -> &[u8] {
        &self.ticker
    }

    /// Raw token name bytes.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Raw document URI bytes.
    pub fn document_uri(&self) -> &[u8] {
        &self.document_uri
    }

    /// Document hash, if one was provided.
    pub fn document_hash(&self) -> Option<&[u8; 32]> {
        self.document_hash.as_ref()
    }

    /// Number of decimal places, at most 9.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Output index of the minting baton, `None` if the token has no baton.
    pub fn mint_baton_vout(&self) -> Option<u8> {
        self.mint_baton_vout
    }

    /// Quantity created at genesis, in base units.
    pub fn initial_qty(&self) -> u64 {
        self.initial_qty
    }

    /// Ticker as text, invalid UTF-8 replaced.
    pub fn ticker_utf8(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.ticker)
    }

    /// Name as text, invalid UTF-8 replaced.
    pub fn name_utf8(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Document URI as text, invalid UTF-8 replaced.
    pub fn document_uri_utf8(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.document_uri)
    }

    /// Hex encoding of the document hash, empty if there isn't one.
    pub fn document_hash_hex(&self) -> String {
        self.document_hash.map(hex::encode).unwrap_or_default()
    }
}

/// Decoded MINT payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlpMint {
    token_id: TokenId,
    mint_baton_vout: Option<u8>,
    additional_qty: u64,
}

impl SlpMint {
    pub(crate) fn new(token_id: TokenId, mint_baton_vout: Option<u8>, additional_qty: u64) -> Self {
        Self {
            token_id,
            mint_baton_vout,
            additional_qty,
        }
    }

    /// ID of the token being minted.
    pub fn token_id(&self) -> &TokenId {
        &self.token_id
    }

    /// Output index the baton moves to, `None` if it's being destroyed.
    pub fn mint_baton_vout(&self) -> Option<u8> {
        self.mint_baton_vout
    }

    /// Quantity being issued, in base units.
    pub fn additional_qty(&self) -> u64 {
        self.additional_qty
    }

    /// Hex encoding of the token ID.
    pub fn token_id_hex(&self) -> String {
        self.token_id.to_hex()
    }
}

/// Decoded SEND payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlpSend {
    token_id: TokenId,
    amounts: Vec<u64>,
}

impl SlpSend {
    pub(crate) fn new(token_id: TokenId, amounts: Vec<u64>) -> Self {
        Self { token_id, amounts }
    }

    /// ID of the token being sent.
    pub fn token_id(&self) -> &TokenId {
        &self.token_id
    }

    /// Amounts for outputs 1, 2, ... in order.
    pub fn amounts(&self) -> &[u64] {
        &self.amounts
    }

    /// Sum of all amounts, `None` on overflow.
    pub fn total_amount(&self) -> Option<u64> {
        self.amounts
            .iter()
            .try_fold(0u64, |acc, a| acc.checked_add(*a))
    }

    /// Hex encoding of the token ID.
    pub fn token_id_hex(&self) -> String {
        self.token_id.to_hex()
    }
}

/// Payload of an SLP message, one variant per transaction type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SlpMessage {
    /// See [`SlpGenesis`].
    Genesis(SlpGenesis),

    /// See [`SlpMint`].
    Mint(SlpMint),

    /// See [`SlpSend`].
    Send(SlpSend),
}

impl SlpMessage {
    /// Returns the transaction type this payload was decoded as.
    pub fn kind(&self) -> TxKind {
        match self {
            Self::Genesis(_) => TxKind::Genesis,
            Self::Mint(_) => TxKind::Mint,
            Self::Send(_) => TxKind::Send,
        }
    }
}

/// A fully validated SLP message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseResult {
    token_type: TokenType,
    message: SlpMessage,
}

impl ParseResult {
    pub(crate) fn new(token_type: TokenType, message: SlpMessage) -> Self {
        Self {
            token_type,
            message,
        }
    }

    /// Gets the token type.
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Gets the token type's wire code.
    pub fn token_type_code(&self) -> u16 {
        self.token_type.code()
    }

    /// Gets the transaction type.
    pub fn tx_kind(&self) -> TxKind {
        self.message.kind()
    }

    /// Gets the transaction type string, `"GENESIS"`, `"MINT"` or `"SEND"`.
    pub fn transaction_type(&self) -> &'static str {
        self.tx_kind().as_str()
    }

    /// Gets the decoded payload.
    pub fn message(&self) -> &SlpMessage {
        &self.message
    }

    /// Unwraps the decoded payload.
    pub fn into_message(self) -> SlpMessage {
        self.message
    }

    /// Token ID carried by MINT and SEND.  A GENESIS defines its token ID by
    /// its own txid, so this is `None` there.
    pub fn token_id(&self) -> Option<&TokenId> {
        match &self.message {
            SlpMessage::Genesis(_) => None,
            SlpMessage::Mint(m) => Some(m.token_id()),
            SlpMessage::Send(s) => Some(s.token_id()),
        }
    }

    /// Output index of the minting baton created by a GENESIS or MINT.
    pub fn mint_baton_vout(&self) -> Option<u8> {
        match &self.message {
            SlpMessage::Genesis(g) => g.mint_baton_vout(),
            SlpMessage::Mint(m) => m.mint_baton_vout(),
            SlpMessage::Send(_) => None,
        }
    }
}
