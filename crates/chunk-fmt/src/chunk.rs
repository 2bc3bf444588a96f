use std::fmt;

/// Owned payload of a single data push.
///
/// Chunks never borrow from the script they were extracted from, so the
/// caller is free to drop or reuse its buffer once tokenizing returns.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Chunk(Vec<u8>);

impl Chunk {
    /// Returns the pushed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of pushed bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns if this was an empty push.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for Chunk {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk(")?;
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        write!(f, ")")
    }
}
