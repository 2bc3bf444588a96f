//! This crate contains all the types and logic related to decoding Simple
//! Ledger Protocol (SLP) OP_RETURN messages.
//!
//! Decoding is a pure function over the output script: [`parse_slp`] either
//! returns a fully validated [`ParseResult`] or an [`SlpError`] naming the
//! first check that failed.

mod decode;
mod error;
mod lokad;
mod message;
mod parse;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod test_utils;
mod types;

pub use error::{SlpError, SlpResult};
pub use lokad::{LOKAD_ID_LEN, LokadId};
pub use message::{ParseResult, SlpGenesis, SlpMessage, SlpMint, SlpSend};
pub use parse::{ParseConfig, parse_slp};
pub use types::{TOKEN_ID_LEN, TokenId, TokenType, TxKind};

// Only used by the serde tests.
#[cfg(test)]
use serde_json as _;
