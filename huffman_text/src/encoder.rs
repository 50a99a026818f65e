use std::collections::HashMap;
use bitm::{BitAccess, BitVec};

use crate::{symbols, Code, CodeTable, Error, Result, PADDING_HEADER_BITS};

/// Encoder that produces bytes readable by [`crate::BitStream::from_padded_bytes`].
pub struct Encoder<'table> {
    codes: HashMap<&'table str, Code>
}

impl<'table> Encoder<'table> {
    /// Constructs encoder that uses the codewords of `table`.
    pub fn new(table: &'table CodeTable) -> Self {
        Self { codes: table.codes_for_symbols() }
    }

    /// Returns the codeword of `symbol`. Fails with [`Error::UnknownSymbol`] if `symbol` has no codeword.
    pub fn code(&self, symbol: &str) -> Result<Code> {
        self.codes.get(symbol).copied().ok_or_else(|| Error::UnknownSymbol { symbol: symbol.to_owned() })
    }

    /// Encodes `symbols`. The result consists of:
    /// - a byte with the number of padding bits,
    /// - codewords of the `symbols`, concatenated,
    /// - 0 to 7 zero bits of padding that complete the last byte.
    pub fn encode<'s, I: IntoIterator<Item = &'s str>>(&self, symbols: I) -> Result<Box<[u8]>> {
        let codes = symbols.into_iter().map(|s| self.code(s)).collect::<Result<Vec<_>>>()?;
        let payload_bits: usize = codes.iter().map(|c| c.len as usize).sum();
        let padding = (8 - payload_bits % 8) % 8;
        let total_bits = PADDING_HEADER_BITS + payload_bits + padding;
        let mut bits = Box::<[u64]>::with_zeroed_bits(total_bits);
        let mut bit_index = 0usize;
        let header = Code { content: padding as u64, len: PADDING_HEADER_BITS as u8 };
        for c in std::iter::once(header).chain(codes) {
            for bit in c.iter() {
                if bit { bits.set_bit(bit_index); }
                bit_index += 1;
            }
        }
        Ok((0..total_bits / 8)
            .map(|byte_nr| (byte_nr * 8..byte_nr * 8 + 8).fold(0u8, |acc, i| acc << 1 | bits.get_bit(i) as u8))
            .collect())
    }

    /// Encodes the symbols of `text` (see [`crate::symbols`]).
    #[inline] pub fn encode_text(&self, text: &str) -> Result<Box<[u8]>> {
        self.encode(symbols(text))
    }
}
