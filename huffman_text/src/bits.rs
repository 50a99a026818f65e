//! Bit sequences read from bytes, and removing the padding added by byte-aligned encoding.

use std::fmt;
use bitm::{BitAccess, BitVec};
use dyn_size_of::GetSize;

use crate::{Error, Result};

/// Number of bits of the header that stores the length of the padding.
pub const PADDING_HEADER_BITS: usize = 8;

/// Sequence of bits. Only bits with indices in range [`begin`, `end`) of the underlying bit vector belong to it.
#[derive(Clone, Debug, Default)]
pub struct BitStream {
    bits: Box<[u64]>,
    begin: usize,
    end: usize
}

impl BitStream {
    /// Returns the bits of `bytes`, 8 per byte, the most significant bit of each byte first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = Box::<[u64]>::with_zeroed_bits(bytes.len() * 8);
        for (byte_nr, byte) in bytes.iter().enumerate() {
            for bit_nr in 0..8 {
                if byte & (0x80 >> bit_nr) != 0 { bits.set_bit(byte_nr * 8 + bit_nr); }
            }
        }
        Self { bits, begin: 0, end: bytes.len() * 8 }
    }

    /// Returns the bits of `bytes` (see [`Self::from_bytes`]) with the padding removed (see [`Self::remove_padding`]).
    pub fn from_padded_bytes(bytes: &[u8]) -> Result<Self> {
        let mut result = Self::from_bytes(bytes);
        result.remove_padding()?;
        Ok(result)
    }

    /// Consumes the 8-bit header (the most significant bit first) that stores the padding length,
    /// and removes that many bits from the end of `self`. Returns the padding length.
    ///
    /// Fails with [`Error::TruncatedStream`], leaving `self` unchanged,
    /// if `self` is shorter than the header or than the header and the padding together.
    pub fn remove_padding(&mut self) -> Result<u8> {
        if self.len() < PADDING_HEADER_BITS {
            return Err(Error::TruncatedStream { available: self.len(), required: PADDING_HEADER_BITS });
        }
        let padding = (self.begin..self.begin + PADDING_HEADER_BITS)
            .fold(0u8, |acc, i| acc << 1 | self.bits.get_bit(i) as u8);
        let payload = self.len() - PADDING_HEADER_BITS;
        if padding as usize > payload {
            return Err(Error::TruncatedStream { available: payload, required: padding as usize });
        }
        self.begin += PADDING_HEADER_BITS;
        self.end -= padding as usize;
        Ok(padding)
    }

    /// Returns the number of bits.
    #[inline] pub fn len(&self) -> usize { self.end - self.begin }

    /// Returns whether `self` has no bits.
    #[inline] pub fn is_empty(&self) -> bool { self.begin == self.end }

    /// Returns the `index`-th bit or `None` if `index` is out of bounds.
    #[inline] pub fn get(&self, index: usize) -> Option<bool> {
        (index < self.len()).then(|| self.bits.get_bit(self.begin + index))
    }

    /// Returns iterator over the bits.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        (self.begin..self.end).map(|i| self.bits.get_bit(i))
    }
}

impl FromIterator<bool> for BitStream {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let bits: Vec<bool> = iter.into_iter().collect();
        let mut result = Box::<[u64]>::with_zeroed_bits(bits.len());
        for (i, _) in bits.iter().enumerate().filter(|(_, b)| **b) { result.set_bit(i); }
        Self { bits: result, begin: 0, end: bits.len() }
    }
}

impl fmt::Display for BitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|b| f.write_str(if b { "1" } else { "0" }))
    }
}

impl GetSize for BitStream {
    #[inline] fn size_bytes_dyn(&self) -> usize { self.bits.size_bytes_dyn() }
    const USES_DYN_MEM: bool = true;
}
