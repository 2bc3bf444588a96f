use std::fmt;

/// Length of a lokad id in bytes.
pub const LOKAD_ID_LEN: usize = 4;

/// Protocol identifier carried in the first push of the OP_RETURN.
///
/// Unlike most magic values this isn't always printable (SLP's own is
/// `"SLP\0"`), so it displays as hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LokadId([u8; LOKAD_ID_LEN]);

impl LokadId {
    /// Simple Ledger Protocol identifier, `"SLP\0"`.
    pub const SLP: Self = Self(*b"SLP\x00");

    /// Creates a new `LokadId` from a [`LOKAD_ID_LEN`]-byte array.
    pub const fn new(bytes: [u8; LOKAD_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the identifier as a byte slice.
    pub const fn as_bytes(&self) -> &[u8; LOKAD_ID_LEN] {
        &self.0
    }
}

impl Default for LokadId {
    fn default() -> Self {
        Self::SLP
    }
}

impl fmt::Display for LokadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
