//! Profiling harness: hammer encode/decode for flamegraph capture.

use abac::{decode, encode};

fn main() {
    // Deterministic pseudo-random input, no RNG dependency needed here.
    let mut state = 0x9e3779b97f4a7c15u64;
    let input: Vec<u8> = (0..16 * 1024)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state as u8
        })
        .collect();
    let bit_length = input.len() * 8;
    let context_length = 16;

    for _ in 0..100 {
        let encoded = encode(&input, bit_length, context_length).unwrap();
        let decoded = decode(&encoded, bit_length, context_length).unwrap();
        assert_eq!(decoded, input);
    }
}
