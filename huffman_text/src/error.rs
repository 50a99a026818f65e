//! Errors reported by decoding, encoding and the file collaborators.

use thiserror::Error;

/// Error that makes the current (de)compression impossible.
///
/// None of them is transient: repeating the operation with the same input always fails in the same way.
#[derive(Error, Debug)]
pub enum Error {
    /// The frequency table has no symbols, so no tree can be built.
    #[error("frequency table is empty")]
    EmptyAlphabet,

    /// The tree refers to a missing node, shares a node or leaves one unreachable.
    #[error("malformed huffman tree at node {node}")]
    DegenerateTree {
        /// Index (in the tree arena) of the offending node.
        node: usize
    },

    /// A leaf lies deeper than the longest representable code.
    #[error("code of length {len} exceeds 64 bits")]
    CodeTooLong {
        /// Length of the code that cannot be represented.
        len: usize
    },

    /// The stream is too short for its header or for the padding it declares.
    #[error("truncated stream: {available} bits available, {required} required")]
    TruncatedStream {
        /// Number of bits available.
        available: usize,
        /// Number of bits required.
        required: usize
    },

    /// The bits starting at `bit_offset` do not form any code.
    #[error("no code matches {len} bits at payload bit {bit_offset} (byte {})", .bit_offset / 8)]
    UnknownCode {
        /// Offset of the first unmatched bit, counted from the beginning of the padding-stripped payload.
        bit_offset: usize,
        /// Number of bits consumed without a match.
        len: usize
    },

    /// Decoding was requested with a code table that has no codes.
    #[error("code table is empty")]
    EmptyCodeTable,

    /// A frequency line is split into an unexpected number of tokens.
    #[error("line {line} of frequency table has {tokens} tokens, expected 2 or 3")]
    MalformedFrequencyLine {
        /// Line number, counting from 1 (the header is line 1).
        line: usize,
        /// Number of tokens found.
        tokens: usize
    },

    /// The frequency token is not a non-negative 32-bit decimal number.
    #[error("line {line} of frequency table has invalid frequency {token:?}")]
    InvalidFrequency {
        /// Line number, counting from 1 (the header is line 1).
        line: usize,
        /// The token that failed to parse.
        token: String
    },

    /// The text to encode contains a symbol absent from the code table.
    #[error("symbol {symbol:?} has no code")]
    UnknownSymbol {
        /// The symbol without code.
        symbol: String
    },

    /// The file name cannot be turned into the name of an accompanying file.
    #[error("file name of {} is missing or not valid unicode", .path.display())]
    InvalidFileName {
        /// The offending path.
        path: std::path::PathBuf
    },

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
