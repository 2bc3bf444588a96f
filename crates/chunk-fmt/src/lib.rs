//! Tokenizer for OP_RETURN scripts made only of simple data pushes.
//!
//! A script is accepted when it is an `OP_RETURN` followed by a run of direct
//! pushes or `OP_PUSHDATA1/2/4` pushes and nothing else.  The pushed payloads
//! come out as an ordered list of owned [`Chunk`]s, which protocol decoders
//! then walk with a [`ChunkReader`].

mod chunk;
mod error;
mod number;
mod reader;
mod tokenizer;

pub use chunk::Chunk;
pub use error::{Error, Result};
pub use number::buf_to_number;
pub use reader::ChunkReader;
pub use tokenizer::{MIN_SCRIPT_LEN, extract_chunks};
