use crate::alphabet::{self, ALPHABET};
use crate::{MAX_ENCODED_LENGTH, MAX_INPUT_LENGTH};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input held more than 43 characters.
    InvalidLength { length: usize },
    InvalidCharacter { character: char, index: usize },
    /// The decoded magnitude needs more than 32 bytes.
    Overflow { length: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { length } => {
                write!(f, "Input shall not be longer than {} characters, is {}", MAX_ENCODED_LENGTH, length)
            }
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::Overflow { length } => {
                write!(f, "Input entropy shall not be greater than 256 bits, is {} bytes", length)
            }
        }
    }
}

impl From<alphabet::Error> for Error {
    fn from(error: alphabet::Error) -> Self {
        match error {
            alphabet::Error::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}

/// Decodes a base-62 string of up to 43 characters to the 32-byte big-endian
/// representation of its value, zero-padded on the left.
pub fn decode(input: impl AsRef<[u8]>) -> Result<[u8; 32], Error> {
    let input = input.as_ref();
    if input.len() > MAX_ENCODED_LENGTH {
        return Err(Error::InvalidLength { length: input.len() });
    }

    // Little-endian magnitude; 43 digits reach at most 257 bits, so 33 bytes.
    let mut magnitude = [0u8; 33];
    let mut length = 0;
    for (index, &character) in input.iter().enumerate() {
        let mut carry = ALPHABET.decode(character, index)? as usize;
        for byte in &mut magnitude[..length] {
            carry += (*byte as usize) * 62;
            *byte = (carry & 0xFF) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            magnitude[length] = (carry & 0xFF) as u8;
            length += 1;
            carry >>= 8;
        }
    }

    if length > MAX_INPUT_LENGTH {
        return Err(Error::Overflow { length });
    }

    let mut output = [0u8; 32];
    for (index, &byte) in magnitude[..length].iter().enumerate() {
        output[31 - index] = byte;
    }
    Ok(output)
}
