//! Pushdata tokenizer.
//!
//! The accepted script shape is:
//!
//! ```text
//! OP_RETURN <push> <push> ...
//! ```
//!
//! where each push is one of:
//!
//! ```text
//! 0x01..=0x4b  <n bytes>
//! OP_PUSHDATA1 <u8 len>     <len bytes>
//! OP_PUSHDATA2 <u16le len>  <len bytes>
//! OP_PUSHDATA4 <u32le len>  <len bytes>
//! ```
//!
//! The first push must be exactly the protocol identifier the caller expects.

use bitcoin::opcodes::all::{OP_PUSHBYTES_75, OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4, OP_RETURN};

use crate::chunk::Chunk;
use crate::error::{Error, Result};

/// Minimum length of a script that could carry a protocol message.
pub const MIN_SCRIPT_LEN: usize = 10;

/// Byte cursor over the raw script, local to one tokenizer run.
#[derive(Debug)]
struct ScriptCursor<'b> {
    buf: &'b [u8],
    at: usize,
}

impl<'b> ScriptCursor<'b> {
    fn new(buf: &'b [u8]) -> Self {
        Self { buf, at: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.at
    }

    fn is_at_end(&self) -> bool {
        self.at == self.buf.len()
    }

    fn read_u8(&mut self) -> Option<u8> {
        let b = *self.buf.get(self.at)?;
        self.at += 1;
        Some(b)
    }

    fn read_arr<const N: usize>(&mut self) -> Option<[u8; N]> {
        let arr = self.buf.get(self.at..self.at + N)?.try_into().ok()?;
        self.at += N;
        Some(arr)
    }

    fn take(&mut self, n: usize) -> Option<&'b [u8]> {
        if n > self.remaining() {
            return None;
        }

        let out = &self.buf[self.at..self.at + n];
        self.at += n;
        Some(out)
    }
}

/// Reads the length prefix of the next push.
///
/// Returns `None` without consuming anything when the next byte isn't a push
/// we accept, when a direct push overruns the script, or when the length field
/// of a `OP_PUSHDATA*` can't be read.  That stops extraction; whatever is left
/// is reported as trailing data by the caller.
fn next_push_len(cur: &mut ScriptCursor<'_>) -> Option<usize> {
    let start = cur.at;
    let len = read_push_len(cur);
    if len.is_none() {
        cur.at = start;
    }
    len
}

fn read_push_len(cur: &mut ScriptCursor<'_>) -> Option<usize> {
    let op = cur.read_u8()?;
    match op {
        n if n > 0 && n <= OP_PUSHBYTES_75.to_u8() => {
            let n = n as usize;
            (n <= cur.remaining()).then_some(n)
        }
        op if op == OP_PUSHDATA1.to_u8() => cur.read_u8().map(usize::from),
        op if op == OP_PUSHDATA2.to_u8() => cur.read_arr().map(|b| u16::from_le_bytes(b) as usize),
        op if op == OP_PUSHDATA4.to_u8() => cur.read_arr().map(|b| u32::from_le_bytes(b) as usize),
        // OP_0 and any other opcode end the run of pushes.
        _ => None,
    }
}

/// Splits an OP_RETURN script into its pushed chunks.
///
/// The first chunk must equal `lokad_id`, which is checked as soon as it's
/// extracted.  Everything after the `OP_RETURN` must be consumed by pushes and
/// at least one chunk must be produced.
pub fn extract_chunks(script: &[u8], lokad_id: &[u8]) -> Result<Vec<Chunk>> {
    let Some(&first) = script.first() else {
        return Err(Error::EmptyScript);
    };

    if first != OP_RETURN.to_u8() {
        return Err(Error::NotOpReturn);
    }

    if script.len() < MIN_SCRIPT_LEN {
        return Err(Error::ScriptTooSmall(script.len()));
    }

    let mut cur = ScriptCursor::new(script);
    cur.at = 1;

    let mut chunks = Vec::new();
    while let Some(len) = next_push_len(&mut cur) {
        let have = cur.remaining();
        let data = cur
            .take(len)
            .ok_or(Error::PushdataExtraction { want: len, have })?;
        chunks.push(Chunk::from(data));

        if chunks.len() == 1 {
            check_lokad_id(&chunks[0], lokad_id)?;
        }
    }

    if !cur.is_at_end() {
        return Err(Error::TrailingData);
    }

    if chunks.is_empty() {
        return Err(Error::ChunksEmpty);
    }

    Ok(chunks)
}

fn check_lokad_id(chunk: &Chunk, lokad_id: &[u8]) -> Result<()> {
    if chunk.len() != lokad_id.len() {
        return Err(Error::LokadIdSize {
            expected: lokad_id.len(),
            found: chunk.len(),
        });
    }

    if chunk.as_bytes() != lokad_id {
        return Err(Error::LokadIdMismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const LOKAD: &[u8] = b"SLP\x00";

    /// Builds `OP_RETURN` followed by minimal direct pushes, using
    /// `OP_PUSHDATA1` for empty and long pushes.
    fn script_of(pushes: &[&[u8]]) -> Vec<u8> {
        let mut s = vec![0x6a];
        for p in pushes {
            if p.is_empty() || p.len() > 75 {
                s.push(0x4c);
                s.push(p.len() as u8);
            } else {
                s.push(p.len() as u8);
            }
            s.extend_from_slice(p);
        }
        s
    }

    #[test]
    fn test_direct_pushes() {
        let script = script_of(&[LOKAD, &[0x01], b"SEND"]);
        let chunks = extract_chunks(&script, LOKAD).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].as_bytes(), LOKAD);
        assert_eq!(chunks[1].as_bytes(), &[0x01]);
        assert_eq!(chunks[2].as_bytes(), b"SEND");
    }

    #[test]
    fn test_pushdata_forms() {
        let mut script = vec![0x6a, 0x04];
        script.extend_from_slice(LOKAD);
        // OP_PUSHDATA1, empty
        script.extend_from_slice(&[0x4c, 0x00]);
        // OP_PUSHDATA2, 3 bytes
        script.extend_from_slice(&[0x4d, 0x03, 0x00, 0xaa, 0xbb, 0xcc]);
        // OP_PUSHDATA4, 2 bytes
        script.extend_from_slice(&[0x4e, 0x02, 0x00, 0x00, 0x00, 0xdd, 0xee]);

        let chunks = extract_chunks(&script, LOKAD).unwrap();
        assert_eq!(chunks.len(), 4);
        assert!(chunks[1].is_empty());
        assert_eq!(chunks[2].as_bytes(), &[0xaa, 0xbb, 0xcc]);
        assert_eq!(chunks[3].as_bytes(), &[0xdd, 0xee]);
    }

    #[test]
    fn test_long_pushdata1() {
        let long = [0x42; 200];
        let script = script_of(&[LOKAD, &long]);
        let chunks = extract_chunks(&script, LOKAD).unwrap();
        assert_eq!(chunks[1].as_bytes(), &long[..]);
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(extract_chunks(&[], LOKAD), Err(Error::EmptyScript));
    }

    #[test]
    fn test_not_op_return() {
        let mut script = script_of(&[LOKAD, b"GENESIS"]);
        script[0] = 0x76; // OP_DUP
        assert_eq!(extract_chunks(&script, LOKAD), Err(Error::NotOpReturn));
    }

    #[test]
    fn test_too_small() {
        let script = [0x6a, 0x04, b'S', b'L', b'P', 0x00, 0x01, 0x01];
        assert_eq!(
            extract_chunks(&script, LOKAD),
            Err(Error::ScriptTooSmall(8))
        );
    }

    #[test]
    fn test_lokad_wrong_size() {
        let script = script_of(&[b"SLP", &[0x01], b"SEND"]);
        assert_eq!(
            extract_chunks(&script, LOKAD),
            Err(Error::LokadIdSize {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_lokad_mismatch() {
        let script = script_of(&[b"SLP\x01", &[0x01], b"SEND"]);
        assert_eq!(extract_chunks(&script, LOKAD), Err(Error::LokadIdMismatch));
    }

    #[test]
    fn test_lokad_checked_before_later_errors() {
        // Bad identifier followed by an opcode we don't accept.
        let mut script = script_of(&[b"XLP\x00", &[0x01], b"SEND"]);
        script.push(0x76);
        assert_eq!(extract_chunks(&script, LOKAD), Err(Error::LokadIdMismatch));
    }

    #[test]
    fn test_trailing_opcode() {
        let mut script = script_of(&[LOKAD, &[0x01], b"SEND"]);
        script.push(0x76);
        assert_eq!(extract_chunks(&script, LOKAD), Err(Error::TrailingData));
    }

    #[test]
    fn test_op_0_stops_extraction() {
        let mut script = script_of(&[LOKAD, &[0x01], b"SEND"]);
        script.push(0x00);
        assert_eq!(extract_chunks(&script, LOKAD), Err(Error::TrailingData));
    }

    #[test]
    fn test_direct_push_overrun_is_soft_stop() {
        let mut script = script_of(&[LOKAD, &[0x01], b"SEND"]);
        script.extend_from_slice(&[0x08, 0x00, 0x00]);
        assert_eq!(extract_chunks(&script, LOKAD), Err(Error::TrailingData));
    }

    #[test]
    fn test_unreadable_length_field_is_soft_stop() {
        let mut script = script_of(&[LOKAD, &[0x01], b"SEND"]);
        script.extend_from_slice(&[0x4e, 0x01, 0x00]);
        assert_eq!(extract_chunks(&script, LOKAD), Err(Error::TrailingData));
    }

    #[test]
    fn test_pushdata_overrun_is_hard_error() {
        let mut script = script_of(&[LOKAD, &[0x01], b"SEND"]);
        script.extend_from_slice(&[0x4d, 0xff, 0xff, 0x01, 0x02]);
        assert_eq!(
            extract_chunks(&script, LOKAD),
            Err(Error::PushdataExtraction {
                want: 0xffff,
                have: 2
            })
        );
    }

    #[test]
    fn test_no_chunks() {
        let script = [0x6a, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76];
        assert_eq!(extract_chunks(&script, LOKAD), Err(Error::TrailingData));

        let script = [0x6a; 10];
        assert_eq!(extract_chunks(&script, LOKAD), Err(Error::TrailingData));
    }

    proptest! {
        #[test]
        fn short_scripts_never_tokenize(
            script in prop::collection::vec(any::<u8>(), 0..MIN_SCRIPT_LEN),
        ) {
            prop_assert!(extract_chunks(&script, LOKAD).is_err());
        }

        #[test]
        fn non_op_return_never_tokenizes(
            first in any::<u8>().prop_filter("not OP_RETURN", |b| *b != 0x6a),
            rest in prop::collection::vec(any::<u8>(), 0..128),
        ) {
            let mut script = vec![first];
            script.extend(rest);
            prop_assert_eq!(extract_chunks(&script, LOKAD), Err(Error::NotOpReturn));
        }

        #[test]
        fn arbitrary_bytes_never_panic(rest in prop::collection::vec(any::<u8>(), 0..256)) {
            let mut script = vec![0x6a];
            script.extend(rest);
            let _ = extract_chunks(&script, LOKAD);
        }

        #[test]
        fn pushes_roundtrip(
            pushes in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..256), 2..8),
        ) {
            let mut all: Vec<&[u8]> = vec![LOKAD];
            all.extend(pushes.iter().map(|p| p.as_slice()));
            let script = script_of(&all);

            let chunks = extract_chunks(&script, LOKAD).unwrap();
            prop_assert_eq!(chunks.len(), all.len());
            for (c, p) in chunks.iter().zip(all) {
                prop_assert_eq!(c.as_bytes(), p);
            }
        }
    }
}
