#![no_main]
use abac::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, u16)| {
    let (input, context_length) = data;
    let context_length = (context_length as usize % 256) + 1;
    let bit_length = input.len() * 8;

    let encoded = encode(&input, bit_length, context_length).unwrap();
    let decoded = decode(&encoded, bit_length, context_length).unwrap();
    assert_eq!(decoded, input);

    // Decoding the stream as if it were raw garbage must not panic either.
    let _ = decode(&input, bit_length.min(4096), context_length).unwrap();
});
