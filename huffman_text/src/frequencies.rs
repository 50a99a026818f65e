//! Numbers of symbol occurrences and their text format.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::str::FromStr;
use fsum::FSum;

use crate::{symbols, Error, Result};

/// Numbers of occurrences of symbols, ordered by the bytes of the symbols.
///
/// The order is significant: it is the initial order of the leaves in the huffman tree,
/// and so it takes part in resolving ties between equally frequent nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable(BTreeMap<Box<str>, u32>);

impl FrequencyTable {
    /// Constructs an empty table.
    #[inline] pub fn new() -> Self { Self::default() }

    /// Constructs a table that counts occurrences of all symbols of `text` (see [`symbols`]).
    pub fn with_counted_text(text: &str) -> Self {
        let mut result = Self::new();
        for s in symbols(text) { result.count(s); }
        result
    }

    /// Adds one to the number of `symbol` occurrences.
    pub fn count(&mut self, symbol: &str) {
        match self.0.get_mut(symbol) {
            Some(f) => *f += 1,
            None => { self.0.insert(symbol.into(), 1); }
        }
    }

    /// Sets the number of `symbol` occurrences to `frequency`, returning the previous one.
    pub fn insert(&mut self, symbol: impl Into<Box<str>>, frequency: u32) -> Option<u32> {
        self.0.insert(symbol.into(), frequency)
    }

    /// Returns the number of `symbol` occurrences or `None` if `symbol` is not in `self`.
    #[inline] pub fn get(&self, symbol: &str) -> Option<u32> { self.0.get(symbol).copied() }

    /// Returns the number of distinct symbols.
    #[inline] pub fn len(&self) -> usize { self.0.len() }

    /// Returns whether `self` contains no symbols.
    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns iterator over (symbol, frequency) pairs, in the byte order of symbols.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, u32)> + '_ {
        self.0.iter().map(|(s, f)| (s.as_ref(), *f))
    }

    /// Returns the total number of symbol occurrences.
    pub fn total_count(&self) -> u64 {
        self.0.values().map(|f| *f as u64).sum()
    }

    /// Returns the Shannon entropy (in bits per symbol) of the distribution of symbols.
    pub fn entropy(&self) -> f64 {
        let sum = self.total_count() as f64;
        - FSum::with_all(self.0.values()
            .filter(|f| **f != 0)
            .map(|f| { let p = *f as f64 / sum; p * p.log2() })).value()
    }

    /// Reads the table from its text format.
    ///
    /// The first line is a header and is skipped. Each next line is split on single spaces
    /// (ignoring the trailing empty tokens) and must give either:
    /// - 2 tokens: a symbol and its frequency, or
    /// - 3 tokens: the frequency of the space symbol, which is the last token.
    pub fn read(input: impl BufRead) -> Result<Self> {
        let mut result = Self::new();
        for (index, line) in input.lines().enumerate().skip(1) {
            let line = line?;
            let (symbol, frequency) = parse_line(&line, index + 1)?;
            result.insert(symbol, frequency);
        }
        Ok(result)
    }

    /// Writes `self` in the text format accepted by [`Self::read`].
    pub fn write(&self, output: &mut dyn std::io::Write) -> std::io::Result<()> {
        writeln!(output, "symbol frequency")?;
        self.iter().try_for_each(|(s, f)| writeln!(output, "{} {}", s, f))
    }
}

/// Parses line number `line_nr` of the text format.
fn parse_line(line: &str, line_nr: usize) -> Result<(&str, u32)> {
    let mut tokens: Vec<&str> = line.split(' ').collect();
    while tokens.last() == Some(&"") { tokens.pop(); }
    let (symbol, frequency) = match tokens.as_slice() {
        [symbol, frequency] => (*symbol, *frequency),
        [_, _, frequency] => (" ", *frequency),
        _ => return Err(Error::MalformedFrequencyLine { line: line_nr, tokens: tokens.len() })
    };
    let frequency = frequency.parse().map_err(|_|
        Error::InvalidFrequency { line: line_nr, token: frequency.to_owned() })?;
    Ok((symbol, frequency))
}

impl FromStr for FrequencyTable {
    type Err = Error;

    #[inline] fn from_str(s: &str) -> Result<Self> { Self::read(s.as_bytes()) }
}

impl<S: Into<Box<str>>> FromIterator<(S, u32)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(s, f)| (s.into(), f)).collect())
    }
}

impl From<BTreeMap<Box<str>, u32>> for FrequencyTable {
    #[inline] fn from(map: BTreeMap<Box<str>, u32>) -> Self { Self(map) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;

    fn table(map: BTreeMap<&str, u32>) -> FrequencyTable {
        map.into_iter().collect()
    }

    #[test]
    fn read_two_and_three_tokens() {
        let read: FrequencyTable = "symbol frequency\na 5\n  7\n\\n 2\nb 10\n".parse().unwrap();
        assert_eq!(read, table(btreemap!{"a" => 5, " " => 7, "\\n" => 2, "b" => 10}));
        assert_eq!(read.total_count(), 24);
        assert_eq!(read.iter().map(|(s, _)| s).collect::<Vec<_>>(), [" ", "\\n", "a", "b"]);
    }

    #[test]
    fn header_is_skipped() {
        let read: FrequencyTable = "x 1\ny 2".parse().unwrap();
        assert_eq!(read, table(btreemap!{"y" => 2}));
        assert!("".parse::<FrequencyTable>().unwrap().is_empty());
        assert!("header only".parse::<FrequencyTable>().unwrap().is_empty());
    }

    #[test]
    fn trailing_spaces_and_crlf() {
        let read: FrequencyTable = "h\r\na 1 \r\nb 2\r\n".parse().unwrap();
        assert_eq!(read, table(btreemap!{"a" => 1, "b" => 2}));
    }

    #[test]
    fn four_tokens_are_malformed() {
        match "header\na 1\nx y z 4\n".parse::<FrequencyTable>() {
            Err(Error::MalformedFrequencyLine { line: 3, tokens: 4 }) => {},
            other => panic!("unexpected {:?}", other)
        }
    }

    #[test]
    fn single_token_is_malformed() {
        assert!(matches!("header\n5\n".parse::<FrequencyTable>(),
            Err(Error::MalformedFrequencyLine { line: 2, tokens: 1 })));
        assert!(matches!("header\n\n".parse::<FrequencyTable>(),
            Err(Error::MalformedFrequencyLine { line: 2, tokens: 0 })));
    }

    #[test]
    fn invalid_frequency() {
        match "header\na -1\n".parse::<FrequencyTable>() {
            Err(Error::InvalidFrequency { line: 2, token }) => assert_eq!(token, "-1"),
            other => panic!("unexpected {:?}", other)
        }
    }

    #[test]
    fn write_read() {
        let t = table(btreemap!{" " => 3, "\\n" => 1, "a" => 2, "ż" => 4});
        let mut buff = Vec::new();
        t.write(&mut buff).unwrap();
        assert_eq!(String::from_utf8(buff.clone()).unwrap(), "symbol frequency\n  3\n\\n 1\na 2\nż 4\n");
        assert_eq!(FrequencyTable::read(&buff[..]).unwrap(), t);
    }

    #[test]
    fn counted_text() {
        let t = FrequencyTable::with_counted_text("abca\nb");
        assert_eq!(t, table(btreemap!{"a" => 2, "b" => 2, "c" => 1, "\\n" => 1}));
    }

    #[test]
    fn entropy() {
        assert_eq!(table(btreemap!{"a" => 5}).entropy(), 0.0);
        assert!((table(btreemap!{"a" => 1, "b" => 1}).entropy() - 1.0).abs() < 1e-12);
        assert!((table(btreemap!{"a" => 1, "b" => 1, "c" => 1, "d" => 1, "e" => 0}).entropy() - 2.0).abs() < 1e-12);
    }
}
