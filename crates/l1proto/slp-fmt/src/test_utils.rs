//! Script builders for tests.

/// Builds an OP_RETURN script out of pushes the way SLP wallets do, with
/// `OP_PUSHDATA1 0x00` for empty pushes rather than `OP_0`.
#[derive(Debug)]
pub(crate) struct ScriptBuilder {
    buf: Vec<u8>,
}

impl ScriptBuilder {
    pub(crate) fn new() -> Self {
        Self { buf: vec![0x6a] }
    }

    pub(crate) fn push(mut self, data: &[u8]) -> Self {
        match data.len() {
            0 => self.buf.extend_from_slice(&[0x4c, 0x00]),
            n @ 1..=75 => self.buf.push(n as u8),
            n @ 76..=255 => self.buf.extend_from_slice(&[0x4c, n as u8]),
            n => {
                self.buf.push(0x4d);
                self.buf.extend_from_slice(&(n as u16).to_le_bytes());
            }
        }
        self.buf.extend_from_slice(data);
        self
    }

    pub(crate) fn push_all(self, pushes: &[&[u8]]) -> Self {
        pushes.iter().fold(self, |b, p| b.push(p))
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Builds an SLP script from a token type, a tx type and the remaining
/// fields.
pub(crate) fn slp_script(token_type: &[u8], kind: &[u8], fields: &[&[u8]]) -> Vec<u8> {
    ScriptBuilder::new()
        .push(b"SLP\x00")
        .push(token_type)
        .push(kind)
        .push_all(fields)
        .into_bytes()
}

/// Fields of a GENESIS after the tx type, in wire order.
#[derive(Debug, Clone)]
pub(crate) struct GenesisFields {
    pub(crate) token_type: Vec<u8>,
    pub(crate) ticker: Vec<u8>,
    pub(crate) name: Vec<u8>,
    pub(crate) document_uri: Vec<u8>,
    pub(crate) document_hash: Vec<u8>,
    pub(crate) decimals: Vec<u8>,
    pub(crate) mint_baton_vout: Vec<u8>,
    pub(crate) qty: Vec<u8>,
}

impl Default for GenesisFields {
    fn default() -> Self {
        Self {
            token_type: vec![0x01],
            ticker: b"TST".to_vec(),
            name: b"Test Token".to_vec(),
            document_uri: Vec::new(),
            document_hash: Vec::new(),
            decimals: vec![2],
            mint_baton_vout: Vec::new(),
            qty: 1000u64.to_be_bytes().to_vec(),
        }
    }
}

impl GenesisFields {
    /// Fields for a valid NFT1 child genesis.
    pub(crate) fn nft_child() -> Self {
        Self {
            token_type: vec![0x41],
            decimals: vec![0],
            mint_baton_vout: Vec::new(),
            qty: 1u64.to_be_bytes().to_vec(),
            ..Default::default()
        }
    }

    pub(crate) fn to_script(&self) -> Vec<u8> {
        slp_script(
            &self.token_type,
            b"GENESIS",
            &[
                self.ticker.as_slice(),
                self.name.as_slice(),
                self.document_uri.as_slice(),
                self.document_hash.as_slice(),
                self.decimals.as_slice(),
                self.mint_baton_vout.as_slice(),
                self.qty.as_slice(),
            ],
        )
    }
}

/// Builds a SEND script for the given amounts.
pub(crate) fn send_script(token_id: &[u8], amounts: &[u64]) -> Vec<u8> {
    let amounts = amounts.iter().map(|a| a.to_be_bytes()).collect::<Vec<_>>();
    let mut fields: Vec<&[u8]> = vec![token_id];
    fields.extend(amounts.iter().map(|a| &a[..]));
    slp_script(&[0x01], b"SEND", &fields)
}
