//! Serde support.
//!
//! Fixed-size identifiers are hex strings in human readable formats and raw
//! bytes otherwise.  Decoded messages are serialize-only: the only way to get
//! one is through the decoder.

use std::fmt;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::lokad::{LOKAD_ID_LEN, LokadId};
use crate::types::{TOKEN_ID_LEN, TokenId};

fn serialize_fixed<S: Serializer, const N: usize>(
    bytes: &[u8; N],
    s: S,
) -> Result<S::Ok, S::Error> {
    if s.is_human_readable() {
        s.serialize_str(&hex::encode(bytes))
    } else {
        s.serialize_bytes(bytes)
    }
}

fn deserialize_fixed<'de, D: Deserializer<'de>, const N: usize>(
    d: D,
) -> Result<[u8; N], D::Error> {
    if d.is_human_readable() {
        d.deserialize_str(FixedVisitor::<N>)
    } else {
        d.deserialize_bytes(FixedVisitor::<N>)
    }
}

/// Accepts exactly `N` bytes, either raw or hex encoded.
struct FixedVisitor<const N: usize>;

impl<const N: usize> de::Visitor<'_> for FixedVisitor<N> {
    type Value = [u8; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{N} bytes, raw or as a hex string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<[u8; N], E> {
        let mut out = [0; N];
        hex::decode_to_slice(v, &mut out).map_err(E::custom)?;
        Ok(out)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<[u8; N], E> {
        v.try_into()
            .map_err(|_| E::invalid_length(v.len(), &self))
    }
}

impl Serialize for LokadId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_fixed(self.as_bytes(), s)
    }
}

impl<'de> Deserialize<'de> for LokadId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        deserialize_fixed::<D, LOKAD_ID_LEN>(d).map(LokadId::new)
    }
}

impl Serialize for TokenId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_fixed(self.as_bytes(), s)
    }
}

impl<'de> Deserialize<'de> for TokenId {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        deserialize_fixed::<D, TOKEN_ID_LEN>(d).map(TokenId::new)
    }
}
