#![doc = include_str!("../README.md")]

mod error;
pub use error::{Error, Result};
mod symbol;
pub use symbol::{NEWLINE, symbols, unescape, render};
mod frequencies;
pub use frequencies::FrequencyTable;
mod tree;
pub use tree::{Node, Tree};
mod code;
pub use code::{Code, CodeTable};
mod bits;
pub use bits::{BitStream, PADDING_HEADER_BITS};
mod decoder;
pub use decoder::{Decoder, DecodingResult, decode, decode_indices};
mod encoder;
pub use encoder::Encoder;
pub mod stats;
pub mod io;

/// Text decoded by [`decompress`], together with the code table used.
pub struct Decompressed {
    table: CodeTable,
    /// Indices of the decoded symbols in `table`.
    symbols: Box<[u32]>
}

impl Decompressed {
    /// Returns the number of decoded symbols.
    #[inline] pub fn len(&self) -> usize { self.symbols.len() }

    /// Returns whether no symbols were decoded.
    #[inline] pub fn is_empty(&self) -> bool { self.symbols.is_empty() }

    /// Returns iterator over the decoded symbols (the line breaks are escaped, see [`NEWLINE`]).
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.symbols.iter().map(|i| self.table.symbol(*i))
    }

    /// Returns the code table used to decode.
    #[inline] pub fn table(&self) -> &CodeTable { &self.table }

    /// Returns the decoded text, with the line breaks unescaped.
    #[inline] pub fn text(&self) -> String { render(self.iter()) }
}

/// Decodes the `compressed` bytes (the padding header, codewords and padding)
/// using the huffman coding built for `frequencies`.
///
/// No partial result is returned: any error makes the whole decompression fail.
pub fn decompress(frequencies: &FrequencyTable, compressed: &[u8]) -> Result<Decompressed> {
    let table = CodeTable::from_frequencies(frequencies)?;
    let bits = BitStream::from_padded_bytes(compressed)?;
    let symbols = decode_indices(&bits, &table)?;
    Ok(Decompressed { table, symbols })
}

/// `text` compressed by [`compress`].
pub struct Compressed {
    /// Frequencies of the symbols of the text, needed to decompress it.
    pub frequencies: FrequencyTable,
    /// The padding header, codewords and padding.
    pub bytes: Box<[u8]>
}

/// Counts the symbols of `text` and encodes it with the huffman coding built for the obtained frequencies.
///
/// Fails with [`Error::EmptyAlphabet`] if `text` is empty.
pub fn compress(text: &str) -> Result<Compressed> {
    let frequencies = FrequencyTable::with_counted_text(text);
    let table = CodeTable::from_frequencies(&frequencies)?;
    let bytes = Encoder::new(&table).encode_text(text)?;
    Ok(Compressed { frequencies, bytes })
}
