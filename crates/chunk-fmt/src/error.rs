use thiserror::Error;

/// Errors from tokenizing a script or reading its chunks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("scriptpubkey cannot be empty")]
    EmptyScript,

    #[error("scriptpubkey not op_return")]
    NotOpReturn,

    #[error("scriptpubkey too small (len {0})")]
    ScriptTooSmall(usize),

    /// The first chunk did not have the length of the protocol identifier.
    #[error("lokad id wrong size (expected {expected}, found {found})")]
    LokadIdSize {
        /// Length of the expected identifier.
        expected: usize,
        /// Length of the first chunk.
        found: usize,
    },

    #[error("lokad id not in first chunk")]
    LokadIdMismatch,

    /// A `OP_PUSHDATA1/2/4` declared more bytes than the script has left.
    #[error("pushdata data extraction failed (want {want}, have {have})")]
    PushdataExtraction {
        /// Declared push length.
        want: usize,
        /// Bytes left in the script.
        have: usize,
    },

    /// Extraction stopped before the end of the script.
    #[error("trailing data")]
    TrailingData,

    #[error("chunks empty")]
    ChunksEmpty,

    /// A message layout needed another chunk but there were none left.
    #[error("parsing ended early")]
    ParsingEndedEarly,

    /// Numbers are only encoded in 1, 2, 4 or 8 byte chunks.
    #[error("extraction of number from buffer failed (len {0})")]
    NumberLength(usize),
}

/// Wrapper result type.
pub type Result<T> = std::result::Result<T, Error>;
