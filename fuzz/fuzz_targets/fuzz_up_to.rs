#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, Sign};

use fibseq_core::generate_up_to;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the sign, the rest (up to 32 bytes) is the magnitude
    let sign = if data[0] & 1 == 1 { Sign::Minus } else { Sign::Plus };
    let magnitude = &data[1..data.len().min(33)];
    let limit = BigInt::from_bytes_le(sign, magnitude);

    match generate_up_to(&limit) {
        Ok(seq) => {
            assert!(!seq.is_empty());
            assert!(seq.windows(2).all(|w| w[0] <= w[1]));
            assert!(seq.iter().all(|v| BigInt::from(v.clone()) <= limit));
        }
        Err(_) => assert_eq!(limit.sign(), Sign::Minus),
    }
});
