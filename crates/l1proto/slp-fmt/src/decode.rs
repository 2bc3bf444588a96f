//! Per-type message layouts.
//!
//! Chunk layout after the lokad id, token type and tx type:
//!
//! ```text
//! GENESIS  ticker | name | document uri | document hash (0|32)
//!          | decimals (1) | mint baton vout (0|1) | initial qty (8)
//! MINT     token id (32) | mint baton vout (0|1) | additional qty (8)
//! SEND     token id (32) | amount (8) ...1 to 19 times
//! ```

use slp_chunk_fmt::{Chunk, ChunkReader, buf_to_number};

use crate::error::{SlpError, SlpResult};
use crate::message::{SlpGenesis, SlpMessage, SlpMint, SlpSend};
use crate::types::{TokenId, TokenType, TxKind};

/// Total number of chunks in a GENESIS, including the header chunks.
const GENESIS_CHUNKS: usize = 10;

/// Total number of chunks in a MINT.
const MINT_CHUNKS: usize = 6;

/// Lower bound on chunks in a SEND: the three header chunks and the token id.
/// The amount count is checked separately.
const SEND_MIN_CHUNKS: usize = 4;

/// Maximum number of decimal places.
pub(crate) const MAX_DECIMALS: u64 = 9;

/// Maximum number of amounts in a SEND.
pub(crate) const MAX_SEND_AMOUNTS: usize = 19;

/// Length of every quantity and amount field.
const QTY_LEN: usize = 8;

/// Decodes the token type chunk.
pub(crate) fn decode_token_type(chunk: &Chunk) -> SlpResult<TokenType> {
    if chunk.len() != 1 && chunk.len() != 2 {
        return Err(SlpError::TokenTypeLength(chunk.len()));
    }

    let code = buf_to_number(chunk.as_bytes())?;
    TokenType::from_code(code).ok_or(SlpError::InvalidTokenType(code))
}

/// Decodes the fields for `kind` from the chunks following the tx type.
pub(crate) fn decode_message(
    token_type: TokenType,
    kind: TxKind,
    reader: &mut ChunkReader<'_>,
) -> SlpResult<SlpMessage> {
    match kind {
        TxKind::Genesis => decode_genesis(token_type, reader).map(SlpMessage::Genesis),
        TxKind::Mint => decode_mint(token_type, reader).map(SlpMessage::Mint),
        TxKind::Send => decode_send(reader).map(SlpMessage::Send),
    }
}

fn decode_genesis(token_type: TokenType, reader: &mut ChunkReader<'_>) -> SlpResult<SlpGenesis> {
    if reader.len() != GENESIS_CHUNKS {
        return Err(SlpError::WrongChunkCount {
            kind: TxKind::Genesis,
            found: reader.len(),
        });
    }

    let ticker = reader.next_chunk()?.as_bytes().to_vec();
    let name = reader.next_chunk()?.as_bytes().to_vec();
    let document_uri = reader.next_chunk()?.as_bytes().to_vec();

    let hash_chunk = reader.next_chunk()?;
    let document_hash = match hash_chunk.len() {
        0 => None,
        _ => Some(
            <[u8; 32]>::try_from(hash_chunk.as_bytes())
                .map_err(|_| SlpError::DocumentHashSize(hash_chunk.len()))?,
        ),
    };

    let decimals_chunk = reader.next_chunk()?;
    if decimals_chunk.len() != 1 {
        return Err(SlpError::DecimalsLength(decimals_chunk.len()));
    }

    let decimals = buf_to_number(decimals_chunk.as_bytes())?;
    if decimals > MAX_DECIMALS {
        return Err(SlpError::DecimalsOutOfRange(decimals));
    }
    let decimals = decimals as u8;

    let mint_baton_vout = decode_mint_baton(reader.next_chunk()?)?;
    let initial_qty = decode_qty(reader.next_chunk()?, SlpError::InitialQtyLength)?;

    if token_type == TokenType::NftChild {
        if decimals != 0 {
            return Err(SlpError::NftChildDecimals);
        }

        if mint_baton_vout.is_some() {
            return Err(SlpError::NftChildMintBaton);
        }

        if initial_qty != 1 {
            return Err(SlpError::NftChildQuantity);
        }
    }

    Ok(SlpGenesis::new(
        ticker,
        name,
        document_uri,
        document_hash,
        decimals,
        mint_baton_vout,
        initial_qty,
    ))
}

fn decode_mint(token_type: TokenType, reader: &mut ChunkReader<'_>) -> SlpResult<SlpMint> {
    if token_type == TokenType::NftChild {
        return Err(SlpError::NftChildMint);
    }

    if reader.len() != MINT_CHUNKS {
        return Err(SlpError::WrongChunkCount {
            kind: TxKind::Mint,
            found: reader.len(),
        });
    }

    let token_id = TokenId::try_from(reader.next_chunk()?.as_bytes())?;
    let mint_baton_vout = decode_mint_baton(reader.next_chunk()?)?;
    let additional_qty = decode_qty(reader.next_chunk()?, SlpError::AdditionalQtyLength)?;

    Ok(SlpMint::new(token_id, mint_baton_vout, additional_qty))
}

fn decode_send(reader: &mut ChunkReader<'_>) -> SlpResult<SlpSend> {
    if reader.len() < SEND_MIN_CHUNKS {
        return Err(SlpError::WrongChunkCount {
            kind: TxKind::Send,
            found: reader.len(),
        });
    }

    let token_id = TokenId::try_from(reader.next_chunk()?.as_bytes())?;

    let amounts = reader
        .rest()
        .iter()
        .map(|chunk| decode_qty(chunk, SlpError::AmountLength))
        .collect::<SlpResult<Vec<_>>>()?;

    if amounts.is_empty() || amounts.len() > MAX_SEND_AMOUNTS {
        return Err(SlpError::AmountCount(amounts.len()));
    }

    Ok(SlpSend::new(token_id, amounts))
}

/// Decodes a mint baton output index.  An empty chunk means no baton, and a
/// baton can never be at outputs 0 or 1.
fn decode_mint_baton(chunk: &Chunk) -> SlpResult<Option<u8>> {
    match chunk.len() {
        0 => Ok(None),
        1 => {
            let vout = buf_to_number(chunk.as_bytes())?;
            if vout < 2 {
                return Err(SlpError::MintBatonTooLow(vout));
            }
            Ok(Some(vout as u8))
        }
        n => Err(SlpError::MintBatonLength(n)),
    }
}

fn decode_qty(chunk: &Chunk, len_err: fn(usize) -> SlpError) -> SlpResult<u64> {
    if chunk.len() != QTY_LEN {
        return Err(len_err(chunk.len()));
    }

    Ok(buf_to_number(chunk.as_bytes())?)
}
