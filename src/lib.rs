//! # Adaptive Binary Arithmetic Coding
//!
//! *Lossless compression of bit sequences at the entropy limit, one bit at a time.*
//!
//! ## Intuition First
//!
//! Imagine the interval [0, 1) as a number line, and a message as an address on it.
//! Every bit you encode splits the current interval in two: a wide part for the
//! likely bit value and a narrow part for the unlikely one. The coder steps into
//! the part matching the actual bit. After the whole message, any number
//! inside the final sliver identifies the message exactly. Likely bits barely
//! shrink the interval (costing a fraction of an output bit); unlikely bits shrink
//! it a lot (costing several).
//!
//! Arithmetic coding is the bookkeeping that makes this work with fixed-width
//! integers: whenever the interval's leading bit is settled, it is emitted and the
//! interval is rescaled, so the coder only ever tracks a 31-bit window of the
//! address.
//!
//! ## The Problem
//!
//! Prefix codes (Huffman) must spend at least one whole output bit per input
//! symbol. For a *binary* alphabet that is fatal: a bit with probability 0.99
//! carries only 0.014 bits of information, yet Huffman still charges 1 bit.
//! Arithmetic coding charges the true information content, amortized across the
//! message, at the cost of per-symbol multiplications and careful carry handling.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon              Entropy as the fundamental limit
//! 1976  Rissanen             Arithmetic coding: optimal rate
//! 1987  Witten/Neal/Cleary   The CACM implementation everyone adapts
//! 1998  Moffat/Neal/Witten   Arithmetic coding revisited: low-precision variants
//! 2003  Marpe et al.         CABAC: adaptive binary coding ships in H.264
//! 2007  Duda                 ANS offers the same rate for static tables
//! ```
//!
//! The binary specialization survives wherever the probability of the next bit is
//! re-estimated *per bit* from context (video codecs, JBIG2, context mixing
//! compressors), because a two-symbol split needs no cumulative-frequency search.
//!
//! ## Mathematical Formulation
//!
//! The coder maintains an integer interval $[low, high]$ inside $[0, 2^{31})$.
//! With $p_0$ the modeled probability of a zero bit, each step splits the
//! interval at
//!
//! ```text
//! split = low + range * p0        (range = high - low + 1)
//! ```
//!
//! and narrows to $[low, split)$ on a zero or $[split, high]$ on a one.
//! Renormalization doubles the interval whenever it fits in the lower half
//! (emit 0), the upper half (emit 1), or straddles the midpoint within the
//! middle half (defer one opposite-polarity "follow" bit, the classic E3
//! carry trick).
//!
//! Probabilities come from a pluggable [`Model`] queried with the number of one
//! bits among the last `context_length` coded bits. The reference
//! [`LaplaceModel`] is add-one smoothing: $p_1 = (k + 1) / (n + 2)$ in 16-bit
//! fixed point.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(1)$ per coded bit: one model query, one 64-bit multiply, an
//!   amortized-constant renormalization loop, and an $O(1)$ ring update.
//! - **Space**: $O(context\_length / 8)$ for the context ring plus the output
//!   buffer.
//!
//! ## Failure Modes
//!
//! 1. **Model mismatch**: encoder and decoder must evaluate the *same*
//!    probability function bit-exactly; any disagreement silently corrupts every
//!    bit after the first divergence.
//! 2. **Incompressible input**: random data costs slightly more than one output
//!    bit per input bit (termination overhead plus model warm-up).
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`encode`] / [`decode`]: one-call drivers using the reference model.
//! - [`Encoder`] / [`Decoder`]: the per-bit state machines, generic over any
//!   [`Model`] implementation.
//!
//! The wire format is headerless: coder-emitted bits packed MSB-first and
//! zero-padded to a byte boundary. The bit length and context length travel out
//! of band, and the decoder treats reads past the end of the buffer as zeros;
//! that zero fill is part of the format, not an error.
//!
//! ## References
//!
//! - Witten, I., Neal, R., Cleary, J. (1987). "Arithmetic coding for data compression." CACM 30(6).
//! - Moffat, A., Neal, R., Witten, I. (1998). "Arithmetic coding revisited." ACM TOIS 16(3).
//! - Marpe, D., Schwarz, H., Wiegand, T. (2003). "Context-based adaptive binary arithmetic coding in the H.264/AVC video compression standard."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitio;
pub mod coder;
pub mod context;
pub mod error;
pub mod model;

pub use coder::{decode, decode_with_model, encode, encode_with_model, Decoder, Encoder};
pub use error::Error;
pub use model::{LaplaceModel, Model};
