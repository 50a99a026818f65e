//! Reading and writing the files of a compressed text:
//! the compressed stream (`NAME_comp.bin`), the frequency table (`NAME_freq.txt`) and the text itself (`NAME.txt`).

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{unescape, Error, FrequencyTable, Result};

/// Suffix of the name of the compressed file.
pub const COMPRESSED_SUFFIX: &str = "_comp.bin";
/// Suffix of the name of the frequency table file.
pub const FREQUENCIES_SUFFIX: &str = "_freq.txt";
/// Suffix of the name of the text file.
pub const TEXT_SUFFIX: &str = ".txt";

/// Returns `path` with the file name suffix `from` replaced by `to` (or with `to` appended if the name does not end with `from`).
///
/// Only the file name must be valid unicode; the rest of `path` is kept as is.
fn replace_suffix(path: &Path, from: &str, to: &str) -> Result<PathBuf> {
    let name = path.file_name().and_then(OsStr::to_str)
        .ok_or_else(|| Error::InvalidFileName { path: path.to_path_buf() })?;
    Ok(path.with_file_name(format!("{}{}", name.strip_suffix(from).unwrap_or(name), to)))
}

/// Returns the path of the text decompressed from the `compressed` file.
#[inline] pub fn text_path(compressed: &Path) -> Result<PathBuf> {
    replace_suffix(compressed, COMPRESSED_SUFFIX, TEXT_SUFFIX)
}

/// Returns the path of the frequency table that accompanies the `compressed` file.
#[inline] pub fn frequencies_path(compressed: &Path) -> Result<PathBuf> {
    replace_suffix(compressed, COMPRESSED_SUFFIX, FREQUENCIES_SUFFIX)
}

/// Returns the path of the compressed file for the `text` file.
#[inline] pub fn compressed_path(text: &Path) -> Result<PathBuf> {
    replace_suffix(text, TEXT_SUFFIX, COMPRESSED_SUFFIX)
}

/// Reads the frequency table from the file at `path`.
pub fn read_frequencies(path: impl AsRef<Path>) -> Result<FrequencyTable> {
    let path = path.as_ref();
    let result = FrequencyTable::read(BufReader::new(File::open(path)?))?;
    log::debug!("read {} symbol frequencies from {}", result.len(), path.display());
    Ok(result)
}

/// Writes `frequencies` to the file at `path`.
pub fn write_frequencies(path: impl AsRef<Path>, frequencies: &FrequencyTable) -> Result<()> {
    let path = path.as_ref();
    let mut output = BufWriter::new(File::create(path)?);
    frequencies.write(&mut output)?;
    output.flush()?;
    log::debug!("wrote {} symbol frequencies to {}", frequencies.len(), path.display());
    Ok(())
}

/// Reads the whole compressed file at `path`.
pub fn read_compressed(path: impl AsRef<Path>) -> Result<Box<[u8]>> {
    let path = path.as_ref();
    let result = std::fs::read(path)?.into_boxed_slice();
    log::debug!("read {} compressed bytes from {}", result.len(), path.display());
    Ok(result)
}

/// Writes compressed `bytes` to the file at `path`.
pub fn write_compressed(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, bytes)?;
    log::debug!("wrote {} compressed bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Writes `symbols` to `output`, translating the escaped line breaks (see [`crate::NEWLINE`]).
pub fn write_symbols<'s, I>(output: &mut dyn Write, symbols: I) -> std::io::Result<()>
    where I: IntoIterator<Item = &'s str>
{
    symbols.into_iter().try_for_each(|s| output.write_all(unescape(s).as_bytes()))
}

/// Writes `symbols` as text to the file at `path`, translating the escaped line breaks.
/// Returns the number of bytes written.
pub fn write_text<'s, I>(path: impl AsRef<Path>, symbols: I) -> Result<u64>
    where I: IntoIterator<Item = &'s str>
{
    let path = path.as_ref();
    let mut output = BufWriter::new(File::create(path)?);
    write_symbols(&mut output, symbols)?;
    output.flush()?;
    let written = output.get_ref().metadata()?.len();
    log::debug!("wrote {} bytes of text to {}", written, path.display());
    Ok(written)
}
