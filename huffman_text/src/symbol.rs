//! Splitting text into symbols and joining symbols back into text.

/// Symbol that stands for the line break in frequency tables and compressed streams.
///
/// Frequency tables are line oriented, so the line break is stored escaped as backslash followed by `n`.
pub const NEWLINE: &str = "\\n";

/// Returns iterator over the symbols of `text`: its characters, with each line break replaced by [`NEWLINE`].
///
/// # Example
///
/// ```
/// use huffman_text::symbols;
///
/// assert_eq!(symbols("a b\n").collect::<Vec<_>>(), ["a", " ", "b", "\\n"]);
/// ```
pub fn symbols(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.char_indices().map(move |(i, c)| {
        if c == '\n' { NEWLINE } else { &text[i..i + c.len_utf8()] }
    })
}

/// Returns `symbol` as it should appear in the text, i.e. with [`NEWLINE`] translated to the line break.
#[inline] pub fn unescape(symbol: &str) -> &str {
    if symbol == NEWLINE { "\n" } else { symbol }
}

/// Concatenates `symbols` into the text they represent, unescaping [`NEWLINE`].
pub fn render<'s, I: IntoIterator<Item = &'s str>>(symbols: I) -> String {
    let mut result = String::new();
    for s in symbols { result.push_str(unescape(s)); }
    result
}
