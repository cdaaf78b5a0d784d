use crate::alphabet::ALPHABET;
use crate::{MAX_ENCODED_LENGTH, MAX_INPUT_LENGTH};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input held more than 32 bytes.
    InvalidLength { length: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { length } => {
                write!(f, "Input shall not be longer than {} bytes, is {}", MAX_INPUT_LENGTH, length)
            }
        }
    }
}

/// Encodes up to 32 bytes, interpreted as a big-endian unsigned integer, to a
/// base-62 string of 1 to 43 characters. A zero value encodes as `"A"`.
pub fn encode(input: impl AsRef<[u8]>) -> Result<String, Error> {
    let input = input.as_ref();
    if input.len() > MAX_INPUT_LENGTH {
        return Err(Error::InvalidLength { length: input.len() });
    }

    // Digits accumulate least-significant first; 2^256 - 1 needs 43 of them.
    let mut digits = [0u8; MAX_ENCODED_LENGTH];
    let mut index = 0;
    for &value in input {
        let mut carry = value as usize;
        for digit in &mut digits[..index] {
            carry += (*digit as usize) << 8;
            *digit = (carry % 62) as u8;
            carry /= 62;
        }
        while carry > 0 {
            digits[index] = (carry % 62) as u8;
            index += 1;
            carry /= 62;
        }
    }

    // A zero value still yields one digit.
    if index == 0 {
        index = 1;
    }

    let mut output = Vec::with_capacity(index);
    for &digit in digits[..index].iter().rev() {
        output.push(ALPHABET.encode(digit));
    }
    Ok(unsafe { String::from_utf8_unchecked(output) })
}
