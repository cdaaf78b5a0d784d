//! Codec for base-62 encoding and decoding of 256-bit values. The alphabet
//! contains only letters and numbers (`[A-Za-z0-9]`) and no special
//! characters.

pub mod alphabet;
pub mod codec;
pub mod decode;
pub mod encode;
pub mod hex;

pub use self::{
    codec::{decode_hex, encode_hex},
    decode::decode,
    encode::encode,
};

/// Maximum number of input bytes (256 bits).
pub const MAX_INPUT_LENGTH: usize = 32;
/// Maximum number of base-62 characters: ceil(256 * ln 2 / ln 62).
pub const MAX_ENCODED_LENGTH: usize = 43;
/// Maximum number of hexadecimal characters accepted by [`encode_hex`].
pub const MAX_HEX_LENGTH: usize = 64;

#[cfg(test)]
mod tests {
    struct Generator {
        state: u64,
    }

    impl Generator {
        fn new() -> Self {
            Self { state: 0x243F6A8885A308D3 }
        }

        fn fill(&mut self, output: &mut [u8]) {
            for byte in output {
                self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                *byte = (self.state >> 56) as u8;
            }
        }
    }

    #[test]
    fn round_trip() {
        let mut generator = Generator::new();
        let mut input = [0u8; 32];
        for iteration in 0..1000 {
            generator.fill(&mut input);
            let encoded = super::encode(input).unwrap();
            assert!(!encoded.is_empty() && encoded.len() <= super::MAX_ENCODED_LENGTH);
            assert!(encoded.bytes().all(|byte| byte.is_ascii_alphanumeric()));
            if iteration == 0 {
                assert_eq!(encoded, "nbtuBBpenKVEcawumUc5HNFvMGOAsQLde7auyxq0AuD");
            }
            assert_eq!(super::decode(&encoded), Ok(input));
        }
    }

    #[test]
    fn round_trip_short_inputs() {
        let mut generator = Generator::new();
        let mut input = [0u8; 32];
        for length in 0..=32 {
            generator.fill(&mut input[32 - length..]);
            let expected = {
                let mut output = [0u8; 32];
                output[32 - length..].copy_from_slice(&input[32 - length..]);
                output
            };
            let encoded = super::encode(&input[32 - length..]).unwrap();
            assert_eq!(super::decode(&encoded), Ok(expected));
        }
    }
}
