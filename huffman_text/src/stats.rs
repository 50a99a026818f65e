//! Human-readable statistics of a decompression.

use std::fmt;

use crate::FrequencyTable;

/// Sizes of the compressed and decompressed representations of a text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
    /// Size of the compressed file in bytes.
    pub compressed_bytes: u64,
    /// Size of the decompressed file in bytes.
    pub decompressed_bytes: u64,
    /// Total number of symbols (sum of all frequencies).
    pub symbols: u64,
    /// Entropy of the symbol distribution, in bits per symbol.
    pub entropy: f64
}

impl Statistics {
    /// Constructs statistics for given sizes (in bytes) and `frequencies` of the symbols.
    pub fn new(compressed_bytes: u64, decompressed_bytes: u64, frequencies: &FrequencyTable) -> Self {
        Self { compressed_bytes, decompressed_bytes, symbols: frequencies.total_count(), entropy: frequencies.entropy() }
    }

    /// Returns `(1 - decompressed/compressed) * 100`, in percents,
    /// or `None` if the compressed size is 0.
    pub fn decompression_ratio(&self) -> Option<f64> {
        (self.compressed_bytes != 0).then(||
            (1.0 - self.decompressed_bytes as f64 / self.compressed_bytes as f64) * 100.0)
    }

    /// Returns the average number of bits of the compressed file per symbol,
    /// or `None` if there are no symbols.
    pub fn bits_per_symbol(&self) -> Option<f64> {
        (self.symbols != 0).then(|| (self.compressed_bytes * 8) as f64 / self.symbols as f64)
    }
}

/// Formats `value` with 2 decimal places, or `n/a`.
fn two_places(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |v| format!("{:.2}", v))
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decompression ratio: {}%", two_places(self.decompression_ratio()))?;
        writeln!(f, "Size of a character before decompression: {} bits", two_places(self.bits_per_symbol()))?;
        write!(f, "Entropy: {:.2} bits", self.entropy)
    }
}
