use crate::{BitStream, Code, CodeTable, Error, Result};

/// Result of bit decoding returned by [`Decoder::consume`].
#[derive(PartialOrd, Ord, PartialEq, Eq, Debug, Clone, Hash)]
pub enum DecodingResult<T> {
    /// Completed value that has been successfully decoded.
    Value(T),
    /// The codeword is incomplete and the next bit is needed.
    Incomplete,
    /// The bits consumed so far are not a prefix of any codeword.
    Invalid
}

/// Decoder that decodes symbols, consuming one bit at a time.
///
/// It accumulates bits of a candidate codeword and reports a symbol as soon as the candidate matches a codeword,
/// which is unambiguous since the codewords form a prefix code.
pub struct Decoder<'table> {
    table: &'table CodeTable,
    /// Bits consumed since the last decoded symbol.
    candidate: Code
}

impl<'table> Decoder<'table> {
    /// Constructs decoder for given `table`.
    #[inline] pub fn new(table: &'table CodeTable) -> Self {
        Self { table, candidate: Code::default() }
    }

    /// Discards the bits consumed since the last decoded symbol.
    #[inline] pub fn reset(&mut self) { self.candidate = Code::default(); }

    /// Returns the number of bits consumed since construction, last reset or last decoded symbol.
    #[inline(always)] pub fn consumed_bits(&self) -> u8 { self.candidate.len }

    /// Consumes a `bit` of the codeword and returns index of the decoded symbol (see [`CodeTable::symbol`])
    /// if the `bit` completes a codeword, and resets `self` in such a case.
    ///
    /// Returns [`DecodingResult::Invalid`] when no codeword can be completed, that is, once the candidate reaches
    /// the length of the longest codeword without a match. Further bits are then rejected as invalid until [`Self::reset`].
    pub fn consume_index(&mut self, bit: bool) -> DecodingResult<u32> {
        if self.candidate.len >= self.table.max_len() { return DecodingResult::Invalid; }
        self.candidate.push(bit);
        match self.table.index_of(&self.candidate) {
            Some(index) => {
                self.reset();
                DecodingResult::Value(index)
            }
            None if self.candidate.len == self.table.max_len() => DecodingResult::Invalid,
            None => DecodingResult::Incomplete
        }
    }

    /// Consumes a `bit` of the codeword and returns:
    /// - a symbol if the given `bit` finishes a codeword (`self` is then ready to decode the next symbol);
    /// - [`DecodingResult::Incomplete`] if the codeword is incomplete and the next bit is needed;
    /// - or [`DecodingResult::Invalid`] if the bits consumed do not begin any codeword.
    pub fn consume(&mut self, bit: bool) -> DecodingResult<&'table str> {
        match self.consume_index(bit) {
            DecodingResult::Value(index) => DecodingResult::Value(self.table.symbol(index)),
            DecodingResult::Incomplete => DecodingResult::Incomplete,
            DecodingResult::Invalid => DecodingResult::Invalid
        }
    }

    /// Tries to decode and return a single symbol from the `bits` iterator, consuming as many bits as needed.
    ///
    /// Returns [`DecodingResult::Incomplete`] if the iterator exhausted before the symbol was decoded
    /// ([`Self::consumed_bits`] enables checking if the iterator yielded any bit before exhausting).
    pub fn decode_next<I: Iterator<Item = bool>>(&mut self, bits: &mut I) -> DecodingResult<&'table str> {
        for bit in bits {
            match self.consume(bit) {
                DecodingResult::Incomplete => {},
                result => return result
            }
        }
        DecodingResult::Incomplete
    }
}

/// Decodes `bits` (without padding) to indices of symbols of `table`.
///
/// Fails with [`Error::EmptyCodeTable`] if `table` is empty,
/// and with [`Error::UnknownCode`] if some bits do not form a codeword, including the unfinished codeword at the end.
/// The time complexity is linear in the number of bits.
pub fn decode_indices(bits: &BitStream, table: &CodeTable) -> Result<Box<[u32]>> {
    if table.is_empty() { return Err(Error::EmptyCodeTable); }
    let mut decoder = table.decoder();
    let mut result = Vec::new();
    let mut codeword_begin = 0;
    for (bit_nr, bit) in bits.iter().enumerate() {
        match decoder.consume_index(bit) {
            DecodingResult::Value(index) => {
                result.push(index);
                codeword_begin = bit_nr + 1;
            }
            DecodingResult::Incomplete => {},
            DecodingResult::Invalid => break
        }
    }
    if decoder.consumed_bits() != 0 {
        return Err(Error::UnknownCode { bit_offset: codeword_begin, len: decoder.consumed_bits() as usize });
    }
    Ok(result.into_boxed_slice())
}

/// Decodes `bits` (without padding) to symbols of `table`. See [`decode_indices`] for the errors reported.
pub fn decode<'table>(bits: &BitStream, table: &'table CodeTable) -> Result<Vec<&'table str>> {
    Ok(decode_indices(bits, table)?.iter().map(|i| table.symbol(*i)).collect())
}
