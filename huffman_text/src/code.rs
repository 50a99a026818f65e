//! Codewords and the table that maps them to symbols.

use std::collections::HashMap;
use std::fmt;
use dyn_size_of::GetSize;

use crate::{Decoder, Error, FrequencyTable, Node, Result, Tree};

/// Codeword of at most [`Code::MAX_LEN`] bits.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone, Copy, Default)]
pub struct Code {
    /// Bits of the codeword. The lowest `len` bits are used and the first bit of the codeword is the most significant of them.
    pub content: u64,
    /// Length of the codeword in bits.
    pub len: u8
}

impl GetSize for Code {}

impl Code {
    /// The largest supported length of the codeword.
    pub const MAX_LEN: u8 = 64;

    /// Appends `bit` to the end of `self`. Result is undefined if `self.len` is already [`Self::MAX_LEN`].
    #[inline] pub fn push(&mut self, bit: bool) {
        self.content = self.content << 1 | bit as u64;
        self.len += 1;
    }

    /// Returns `self` extended by `bit`, or `None` if the result would be longer than [`Self::MAX_LEN`].
    #[inline] pub fn pushed(mut self, bit: bool) -> Option<Self> {
        (self.len < Self::MAX_LEN).then(|| { self.push(bit); self })
    }

    /// Returns `bit_nr`-th bit of `self`, counting from the beginning, or `None` if `bit_nr` is not less than `self.len`.
    #[inline] pub fn get(&self, bit_nr: u8) -> Option<bool> {
        (bit_nr < self.len).then(|| self.bit(bit_nr))
    }

    /// Returns `bit_nr`-th bit of `self`. `bit_nr` must be less than `self.len`.
    #[inline(always)] fn bit(&self, bit_nr: u8) -> bool {
        self.content >> (self.len - 1 - bit_nr) & 1 != 0
    }

    /// Returns iterator over bits of `self`, from the first one.
    pub fn iter(self) -> impl ExactSizeIterator<Item = bool> {
        (0..self.len).map(move |i| self.bit(i))
    }

    /// Returns whether `self` is a proper prefix of `other`.
    pub fn is_proper_prefix_of(&self, other: &Code) -> bool {
        self.len < other.len && other.content.checked_shr((other.len - self.len) as u32).unwrap_or(0) == self.content
    }

    /// Returns whether `self` consists of zero bits.
    #[inline] pub fn is_empty(&self) -> bool { self.len == 0 }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|b| f.write_str(if b { "1" } else { "0" }))
    }
}

/// Prefix code: a mapping from codewords to symbols, obtained from the huffman tree.
#[derive(Clone, Debug, Default)]
pub struct CodeTable {
    /// Symbols, in the order of tree traversal (from left to right).
    symbols: Box<[Box<str>]>,
    /// Codewords of the corresponding `symbols`.
    codes: Box<[Code]>,
    /// Index of the symbol for each codeword.
    index: HashMap<Code, u32>,
    /// Length of the longest codeword.
    max_len: u8
}

impl CodeTable {
    /// Builds the huffman tree for given `frequencies` and returns its code table.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        Self::from_tree(&Tree::from_frequencies(frequencies)?)
    }

    /// Returns the code table of `tree`, assigning to each leaf the bits of the path from the root to it
    /// (`0` for the left child, `1` for the right one).
    /// The only leaf of the single-node tree gets the code `0`.
    ///
    /// Fails with [`Error::DegenerateTree`] if any child index is out of the arena,
    /// some node is reachable twice or some node is unreachable,
    /// and with [`Error::CodeTooLong`] if any leaf lies deeper than [`Code::MAX_LEN`].
    pub fn from_tree(tree: &Tree) -> Result<Self> {
        let mut visited = vec![false; tree.len()].into_boxed_slice();
        let mut symbols = Vec::new();
        let mut codes = Vec::new();
        let mut stack = vec![(tree.root(), Code::default())];
        while let Some((node_index, code)) = stack.pop() {
            let node = tree.get(node_index).ok_or(Error::DegenerateTree { node: node_index })?;
            if std::mem::replace(&mut visited[node_index], true) {
                return Err(Error::DegenerateTree { node: node_index });
            }
            match node {
                Node::Leaf { symbol, .. } => {
                    symbols.push(symbol.clone());
                    codes.push(if code.is_empty() { Code { content: 0, len: 1 } } else { code });
                }
                Node::Internal { left, right, .. } => {
                    let too_long = || Error::CodeTooLong { len: code.len as usize + 1 };
                    stack.push((*right, code.pushed(true).ok_or_else(too_long)?));
                    stack.push((*left, code.pushed(false).ok_or_else(too_long)?));
                }
            }
        }
        if let Some(unreachable) = visited.iter().position(|v| !v) {
            return Err(Error::DegenerateTree { node: unreachable });
        }
        let index = codes.iter().enumerate().map(|(i, c)| (*c, i as u32)).collect();
        let max_len = codes.iter().map(|c| c.len).max().unwrap_or(0);
        Ok(Self { symbols: symbols.into_boxed_slice(), codes: codes.into_boxed_slice(), index, max_len })
    }

    /// Returns the number of codewords (equal to the number of symbols).
    #[inline] pub fn len(&self) -> usize { self.symbols.len() }

    /// Returns whether `self` has no codewords.
    #[inline] pub fn is_empty(&self) -> bool { self.symbols.is_empty() }

    /// Returns the length of the longest codeword, or 0 if `self` is empty.
    #[inline] pub fn max_len(&self) -> u8 { self.max_len }

    /// Returns index of the symbol assigned to `code` or `None` if `code` is not a codeword.
    #[inline] pub fn index_of(&self, code: &Code) -> Option<u32> { self.index.get(code).copied() }

    /// Returns the symbol with given `index`.
    #[inline] pub fn symbol(&self, index: u32) -> &str { &self.symbols[index as usize] }

    /// Returns the symbol assigned to `code` or `None` if `code` is not a codeword.
    #[inline] pub fn get(&self, code: &Code) -> Option<&str> {
        self.index_of(code).map(|i| self.symbol(i))
    }

    /// Returns iterator over (symbol, codeword) pairs, in order of the leaves of the tree (from left to right).
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, Code)> + '_ {
        self.symbols.iter().map(|s| s.as_ref()).zip(self.codes.iter().copied())
    }

    /// Returns a map from symbols to their codes.
    pub fn codes_for_symbols(&self) -> HashMap<&str, Code> {
        self.iter().collect()
    }

    /// Returns the total length (in bits) of a text that consists of the symbols counted in `frequencies`.
    /// Symbols without codes are ignored.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        let codes = self.codes_for_symbols();
        frequencies.iter()
            .filter_map(|(s, f)| codes.get(s).map(|c| c.len as u64 * f as u64))
            .sum()
    }

    /// Returns decoder that allows for decoding symbols one by one.
    #[inline] pub fn decoder(&self) -> Decoder<'_> { Decoder::new(self) }
}

impl GetSize for CodeTable {
    fn size_bytes_dyn(&self) -> usize {
        self.symbols.iter().map(|s| std::mem::size_of::<Box<str>>() + s.len()).sum::<usize>()
            + self.codes.size_bytes_dyn()
            + self.index.capacity() * (std::mem::size_of::<(Code, u32)>() + 1)
    }
    const USES_DYN_MEM: bool = true;
}
