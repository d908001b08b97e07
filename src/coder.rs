//! The binary arithmetic coder.
//!
//! An [`Encoder`] narrows an integer interval once per input bit and emits
//! interval bits as they settle; a [`Decoder`] replays the same narrowing,
//! steered by the encoded stream, to recover the bits. Both sides query the
//! same [`Model`] against the same sliding context, so their intervals stay
//! bit-for-bit identical; the entire format contract lives in that symmetry.

use crate::bitio::{BitReader, BitWriter};
use crate::context::ContextRing;
use crate::error::{Error, Result};
use crate::model::{LaplaceModel, Model, FIXED_SCALE};

/// Width of the interval registers in bits.
pub const PRECISION: u32 = 31;

/// Total frequency range: the interval lives in `[0, TOTAL_FREQUENCY)`.
pub const TOTAL_FREQUENCY: u32 = 1 << PRECISION;

/// Largest supported context length in bits (256 000 bytes of window).
pub const MAX_CONTEXT_BITS: usize = 256_000 * 8;

const HALF: u32 = 1 << (PRECISION - 1);
const QUARTER: u32 = 1 << (PRECISION - 2);
const THREE_QUARTER: u32 = 3 << (PRECISION - 2);

/// Map a fixed-point probability of 1 to the zero-symbol share of the
/// frequency range. Out-of-contract model values are clamped first.
#[inline]
fn scaled_p0(p1_fixed: u32) -> u32 {
    let p0_fixed = FIXED_SCALE - p1_fixed.clamp(1, FIXED_SCALE - 1);
    let scaled = ((p0_fixed as u64 * TOTAL_FREQUENCY as u64) / FIXED_SCALE as u64) as u32;
    scaled.min(TOTAL_FREQUENCY - 1)
}

fn validate_context_length(context_length: usize) -> Result<()> {
    if context_length == 0 || context_length > MAX_CONTEXT_BITS {
        return Err(Error::InvalidContextLength {
            given: context_length,
            max: MAX_CONTEXT_BITS,
        });
    }
    Ok(())
}

/// Binary arithmetic encoder.
///
/// Feed bits with [`encode_bit`](Self::encode_bit), then call
/// [`finish`](Self::finish) exactly once to emit the termination bits and
/// obtain the encoded bytes.
pub struct Encoder<M: Model> {
    low: u32,
    high: u32,
    bits_to_follow: usize,
    context: ContextRing,
    writer: BitWriter,
    model: M,
}

impl<M: Model> Encoder<M> {
    /// Create an encoder conditioning on the last `context_length` bits.
    ///
    /// # Errors
    /// Returns `Error::InvalidContextLength` if `context_length` is zero or
    /// exceeds [`MAX_CONTEXT_BITS`].
    pub fn new(context_length: usize, model: M) -> Result<Self> {
        validate_context_length(context_length)?;
        Ok(Self {
            low: 0,
            high: TOTAL_FREQUENCY - 1,
            bits_to_follow: 0,
            context: ContextRing::new(context_length),
            writer: BitWriter::new(),
            model,
        })
    }

    /// Encode one bit. Only the lowest bit of `bit` is used.
    pub fn encode_bit(&mut self, bit: u8) {
        let bit = bit & 1;
        let p1 = self
            .model
            .probability_of_one(self.context.count_ones(), self.context.capacity());
        let p0_share = scaled_p0(p1);

        let range = (self.high - self.low + 1) as u64;
        let offset = ((range * p0_share as u64) / TOTAL_FREQUENCY as u64) as u32;

        // [low, low + offset) codes 0, [low + offset, high] codes 1.
        if bit == 0 {
            self.high = self.low + offset - 1;
        } else {
            self.low += offset;
        }
        debug_assert!(self.low <= self.high);

        self.renormalize();
        self.context.push(bit);
    }

    fn renormalize(&mut self) {
        loop {
            if self.high < HALF {
                self.writer.push(0);
                self.writer.push_repeated(1, self.bits_to_follow);
                self.bits_to_follow = 0;
            } else if self.low >= HALF {
                self.writer.push(1);
                self.writer.push_repeated(0, self.bits_to_follow);
                self.bits_to_follow = 0;
                self.low -= HALF;
                self.high -= HALF;
            } else if self.low >= QUARTER && self.high < THREE_QUARTER {
                // Interval straddles the midpoint: the next settled bit is
                // followed by this many opposite bits.
                self.bits_to_follow += 1;
                self.low -= QUARTER;
                self.high -= QUARTER;
            } else {
                break;
            }
            self.low <<= 1;
            self.high = (self.high << 1) | 1;
        }
    }

    /// Emit the termination bits, flush the packer, and return the encoding.
    ///
    /// One disambiguating bit (plus any pending follow bits) pins the final
    /// interval; its polarity says which quarter `low` landed in.
    pub fn finish(mut self) -> Vec<u8> {
        self.bits_to_follow += 1;
        if self.low < QUARTER {
            self.writer.push(0);
            self.writer.push_repeated(1, self.bits_to_follow);
        } else {
            self.writer.push(1);
            self.writer.push_repeated(0, self.bits_to_follow);
        }
        self.writer.finish()
    }
}

/// Binary arithmetic decoder.
///
/// Mirrors [`Encoder`] step for step: construction pre-loads the first
/// [`PRECISION`] encoded bits into the value window, and each
/// [`decode_bit`](Self::decode_bit) locates the coded bit inside the current
/// interval before narrowing it exactly as the encoder did.
pub struct Decoder<'a, M: Model> {
    low: u32,
    high: u32,
    value: u32,
    context: ContextRing,
    reader: BitReader<'a>,
    model: M,
}

impl<'a, M: Model> Decoder<'a, M> {
    /// Create a decoder over `encoded` with the encoder's `context_length`.
    ///
    /// # Errors
    /// Returns `Error::InvalidContextLength` if `context_length` is zero or
    /// exceeds [`MAX_CONTEXT_BITS`].
    pub fn new(encoded: &'a [u8], context_length: usize, model: M) -> Result<Self> {
        validate_context_length(context_length)?;
        let mut reader = BitReader::new(encoded);
        let mut value = 0u32;
        for _ in 0..PRECISION {
            value = (value << 1) | reader.read_bit() as u32;
        }
        Ok(Self {
            low: 0,
            high: TOTAL_FREQUENCY - 1,
            value,
            context: ContextRing::new(context_length),
            reader,
            model,
        })
    }

    /// Decode and return the next bit.
    pub fn decode_bit(&mut self) -> u8 {
        let p1 = self
            .model
            .probability_of_one(self.context.count_ones(), self.context.capacity());
        let p0_share = scaled_p0(p1);

        let range = (self.high - self.low + 1) as u64;
        let offset = ((range * p0_share as u64) / TOTAL_FREQUENCY as u64) as u32;

        // Where does `value` sit inside the interval, on the frequency scale?
        let scaled_value =
            (((self.value - self.low + 1) as u64 * TOTAL_FREQUENCY as u64 - 1) / range) as u32;
        let bit = u8::from(scaled_value >= p0_share);

        // The context must advance with the decoded bit before the next
        // probability query, matching the encoder's schedule.
        self.context.push(bit);

        if bit == 0 {
            self.high = self.low + offset - 1;
        } else {
            self.low += offset;
        }
        debug_assert!(self.low <= self.value && self.value <= self.high);

        self.renormalize();
        bit
    }

    fn renormalize(&mut self) {
        loop {
            if self.high < HALF {
                // Settled bit was 0; nothing to subtract.
            } else if self.low >= HALF {
                self.value -= HALF;
                self.low -= HALF;
                self.high -= HALF;
            } else if self.low >= QUARTER && self.high < THREE_QUARTER {
                self.value -= QUARTER;
                self.low -= QUARTER;
                self.high -= QUARTER;
            } else {
                break;
            }
            self.low <<= 1;
            self.high = (self.high << 1) | 1;
            self.value = (self.value << 1) | self.reader.read_bit() as u32;
        }
    }
}

/// Encode the first `bit_length` bits of `sequence` with a custom model.
///
/// # Arguments
/// * `sequence` - Input bytes, read MSB-first.
/// * `bit_length` - Number of bits to encode; bits past the end of `sequence`
///   (at most 7) read as 0.
/// * `context_length` - Sliding-window size in bits, `1..=MAX_CONTEXT_BITS`.
/// * `model` - Probability oracle; the decoder must use the same one.
///
/// # Errors
/// Returns `Error::InvalidContextLength` or `Error::BitLengthOutOfRange` on
/// bad parameters. No other failure exists on valid inputs.
pub fn encode_with_model<M: Model>(
    sequence: &[u8],
    bit_length: usize,
    context_length: usize,
    model: M,
) -> Result<Vec<u8>> {
    let available = sequence.len() * 8 + 7;
    if bit_length > available {
        return Err(Error::BitLengthOutOfRange {
            given: bit_length,
            available,
        });
    }

    let mut encoder = Encoder::new(context_length, model)?;
    for i in 0..bit_length {
        let byte = sequence.get(i / 8).copied().unwrap_or(0);
        encoder.encode_bit((byte >> (7 - (i % 8))) & 1);
    }
    Ok(encoder.finish())
}

/// Decode `bit_length` bits from `encoded` with a custom model.
///
/// Returns `bit_length.div_ceil(8)` bytes; the decoded bits are packed
/// MSB-first and any trailing bits of the last byte are zero. Decoding never
/// fails on malformed data: feeding bytes that did not come from
/// [`encode_with_model`] with identical parameters yields garbage of the
/// requested length.
///
/// # Errors
/// Returns `Error::InvalidContextLength` if `context_length` is out of range.
pub fn decode_with_model<M: Model>(
    encoded: &[u8],
    bit_length: usize,
    context_length: usize,
    model: M,
) -> Result<Vec<u8>> {
    let mut decoder = Decoder::new(encoded, context_length, model)?;
    let mut decoded = vec![0u8; (bit_length + 7) / 8];
    for i in 0..bit_length {
        if decoder.decode_bit() == 1 {
            decoded[i / 8] |= 1 << (7 - (i % 8));
        }
    }
    Ok(decoded)
}

/// Encode with the reference [`LaplaceModel`].
///
/// See [`encode_with_model`] for the parameter and error contract.
pub fn encode(sequence: &[u8], bit_length: usize, context_length: usize) -> Result<Vec<u8>> {
    encode_with_model(sequence, bit_length, context_length, LaplaceModel)
}

/// Decode with the reference [`LaplaceModel`].
///
/// See [`decode_with_model`] for the parameter and error contract.
pub fn decode(encoded: &[u8], bit_length: usize, context_length: usize) -> Result<Vec<u8>> {
    decode_with_model(encoded, bit_length, context_length, LaplaceModel)
}
