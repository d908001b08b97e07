//! Bit-granularity I/O over byte buffers.
//!
//! The coder emits and consumes individual bits; these adapters pack them
//! MSB-first into bytes. The reader deliberately returns 0 past the end of
//! its buffer: the decoder relies on that zero fill to terminate cleanly.

/// Initial capacity of the encoder's output buffer in bytes.
pub const INITIAL_OUTPUT_CAPACITY: usize = 4096;

/// MSB-first bit packer backed by a growable byte buffer.
#[derive(Debug)]
pub struct BitWriter {
    bytes: Vec<u8>,
    buffer: u8,
    filled: u8,
}

impl BitWriter {
    /// Create a writer with the default initial capacity.
    pub fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(INITIAL_OUTPUT_CAPACITY),
            buffer: 0,
            filled: 0,
        }
    }

    /// Append a single bit. Only the lowest bit of `bit` is used.
    #[inline]
    pub fn push(&mut self, bit: u8) {
        self.buffer = (self.buffer << 1) | (bit & 1);
        self.filled += 1;
        if self.filled == 8 {
            self.bytes.push(self.buffer);
            self.buffer = 0;
            self.filled = 0;
        }
    }

    /// Append `count` copies of `bit`.
    #[inline]
    pub fn push_repeated(&mut self, bit: u8, count: usize) {
        for _ in 0..count {
            self.push(bit);
        }
    }

    /// Flush any partial byte (zero-padded on the right) and return the buffer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.filled > 0 {
            self.bytes.push(self.buffer << (8 - self.filled));
        }
        self.bytes
    }

    /// Number of whole bytes written so far, excluding any partial byte.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether no whole byte has been written yet.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// MSB-first bit reader over a byte slice.
///
/// Reads past the end of the slice return 0 instead of failing; the encoded
/// stream is conceptually followed by an infinite run of zero bits.
#[derive(Debug)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the first bit of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }

    /// Read the next bit, or 0 if the buffer is exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> u8 {
        let byte_pos = self.cursor / 8;
        if byte_pos >= self.bytes.len() {
            return 0;
        }
        let bit = (self.bytes[byte_pos] >> (7 - (self.cursor % 8))) & 1;
        self.cursor += 1;
        bit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_writer_packs_msb_first() {
        let mut writer = BitWriter::new();
        for bit in [1, 0, 1, 0, 1, 0, 1, 1] {
            writer.push(bit);
        }
        assert_eq!(writer.finish(), vec![0b1010_1011]);
    }

    #[test]
    fn test_writer_pads_partial_byte_with_zeros() {
        let mut writer = BitWriter::new();
        writer.push(1);
        writer.push(1);
        writer.push(0);
        assert_eq!(writer.finish(), vec![0b1100_0000]);
    }

    #[test]
    fn test_writer_empty() {
        let writer = BitWriter::new();
        assert!(writer.is_empty());
        assert_eq!(writer.finish(), Vec::<u8>::new());
    }

    #[test]
    fn test_writer_len_counts_whole_bytes() {
        let mut writer = BitWriter::new();
        writer.push_repeated(1, 9);
        // Nine bits: one whole byte, one bit still buffered.
        assert_eq!(writer.len(), 1);
        assert_eq!(writer.finish().len(), 2);
    }

    #[test]
    fn test_writer_repeated() {
        let mut writer = BitWriter::new();
        writer.push(0);
        writer.push_repeated(1, 9);
        assert_eq!(writer.finish(), vec![0b0111_1111, 0b1100_0000]);
    }

    #[test]
    fn test_reader_msb_first() {
        let mut reader = BitReader::new(&[0b1010_0001]);
        let bits: Vec<u8> = (0..8).map(|_| reader.read_bit()).collect();
        assert_eq!(bits, vec![1, 0, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_reader_returns_zero_past_end() {
        let mut reader = BitReader::new(&[0xFF]);
        for _ in 0..8 {
            assert_eq!(reader.read_bit(), 1);
        }
        for _ in 0..64 {
            assert_eq!(reader.read_bit(), 0);
        }
    }

    proptest! {
        #[test]
        fn prop_write_read_roundtrip(bits in prop::collection::vec(0u8..2, 0..256)) {
            let mut writer = BitWriter::new();
            for &bit in &bits {
                writer.push(bit);
            }
            let bytes = writer.finish();
            prop_assert_eq!(bytes.len(), (bits.len() + 7) / 8);

            let mut reader = BitReader::new(&bytes);
            for &bit in &bits {
                prop_assert_eq!(reader.read_bit(), bit);
            }
            // Padding bits read back as zeros.
            for _ in bits.len()..bytes.len() * 8 {
                prop_assert_eq!(reader.read_bit(), 0);
            }
        }
    }
}
