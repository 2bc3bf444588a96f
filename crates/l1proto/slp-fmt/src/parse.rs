//! Entry points for decoding SLP messages.
//!
//! An SLP message MUST be encoded as an `OP_RETURN` in output index 0, made
//! only of data pushes:
//!
//! ```text
//! [0]   lokad id, "SLP\0"
//! [1]   token type (1 or 2 bytes, big endian)
//! [2]   tx type, "GENESIS" | "MINT" | "SEND"
//! [3..] fields for the tx type
//! ```

use bitcoin::{Script, Transaction};
use slp_chunk_fmt::{ChunkReader, extract_chunks};
use tracing::*;

use crate::decode::{decode_message, decode_token_type};
use crate::error::{SlpError, SlpResult};
use crate::lokad::LokadId;
use crate::message::ParseResult;
use crate::types::TxKind;

/// Decodes an SLP message from an output script, using the standard
/// `"SLP\0"` lokad id.
pub fn parse_slp(script: &[u8]) -> SlpResult<ParseResult> {
    try_parse_buf(script, &ParseConfig::default())
}

/// Config for parsing txs.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseConfig {
    lokad_id: LokadId,
}

impl ParseConfig {
    /// Constructs a new instance.
    pub fn new(lokad_id: LokadId) -> Self {
        Self { lokad_id }
    }

    /// Gets the lokad id messages must start with.
    pub fn lokad_id(&self) -> LokadId {
        self.lokad_id
    }

    /// Attempts to decode an SLP message from the first output of a
    /// [`Transaction`].
    pub fn try_parse_tx(&self, tx: &Transaction) -> SlpResult<ParseResult> {
        let first_out = tx.output.first().ok_or(SlpError::MissingOutput0)?;
        self.try_parse_script(&first_out.script_pubkey)
    }

    /// Attempts to decode an SLP message from a [`Script`], which we presume
    /// to be an OP_RETURN output.
    pub fn try_parse_script(&self, script: &Script) -> SlpResult<ParseResult> {
        try_parse_buf(script.as_bytes(), self)
    }

    /// Attempts to decode an SLP message from raw script bytes.
    pub fn try_parse_buf(&self, buf: &[u8]) -> SlpResult<ParseResult> {
        try_parse_buf(buf, self)
    }
}

fn try_parse_buf(buf: &[u8], config: &ParseConfig) -> SlpResult<ParseResult> {
    let res = decode_script(buf, config);

    match &res {
        Ok(msg) => trace!(
            token_type = %msg.token_type(),
            tx_type = msg.transaction_type(),
            "decoded slp message"
        ),
        Err(err) => trace!(
            %err,
            lokad_id = %config.lokad_id,
            script_len = buf.len(),
            "rejected slp script"
        ),
    }

    res
}

fn decode_script(buf: &[u8], config: &ParseConfig) -> SlpResult<ParseResult> {
    let chunks = extract_chunks(buf, config.lokad_id.as_bytes())?;
    let mut reader = ChunkReader::new(&chunks);

    // Lokad id, already checked while extracting.
    reader.next_chunk()?;

    let token_type = decode_token_type(reader.next_chunk()?)?;
    let kind = TxKind::from_bytes(reader.next_chunk()?.as_bytes()).ok_or(SlpError::InvalidTxType)?;
    let message = decode_message(token_type, kind, &mut reader)?;

    Ok(ParseResult::new(token_type, message))
}
