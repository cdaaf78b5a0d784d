use crate::{decode, encode, hex, MAX_HEX_LENGTH};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The hexadecimal input held more than 64 characters.
    InvalidLength { length: usize },
    Hex(hex::Error),
    Encode(encode::Error),
    Decode(decode::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { length } => {
                write!(f, "Input shall not be longer than {} characters, is {}", MAX_HEX_LENGTH, length)
            }
            Error::Hex(error) => write!(f, "{}", error),
            Error::Encode(error) => write!(f, "{}", error),
            Error::Decode(error) => write!(f, "{}", error),
        }
    }
}

impl From<hex::Error> for Error {
    fn from(error: hex::Error) -> Self {
        Error::Hex(error)
    }
}

impl From<encode::Error> for Error {
    fn from(error: encode::Error) -> Self {
        Error::Encode(error)
    }
}

impl From<decode::Error> for Error {
    fn from(error: decode::Error) -> Self {
        Error::Decode(error)
    }
}

/// Parses a hexadecimal string of up to 64 characters and encodes the bytes
/// to base-62.
pub fn encode_hex(input: impl AsRef<[u8]>) -> Result<String, Error> {
    let input = input.as_ref();
    if input.len() > MAX_HEX_LENGTH {
        return Err(Error::InvalidLength { length: input.len() });
    }
    let bytes = hex::decode(input)?;
    Ok(encode::encode(bytes)?)
}

/// Decodes a base-62 string and formats the 32-byte result as uppercase
/// hexadecimal, always exactly 64 characters.
pub fn decode_hex(input: impl AsRef<[u8]>) -> Result<String, Error> {
    let bytes = decode::decode(input)?;
    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::{decode, hex};

    #[test]
    fn encode_hex() {
        assert_eq!(super::encode_hex("01F957"), Ok("hoj".to_string()));
        assert_eq!(super::encode_hex("01f957"), Ok("hoj".to_string()));
        assert_eq!(super::encode_hex(""), Ok("A".to_string()));
    }

    #[test]
    fn decode_hex() {
        assert_eq!(super::decode_hex("hoj"), Ok(format!("{:0>64}", "01F957")));
        assert_eq!(super::decode_hex("A"), Ok("0".repeat(64)));
    }

    #[test]
    fn round_trip_normalizes() {
        for input in [
            "EFDE6A2D6D2FB711AD3AD1561080150560D6273DA17348677B459FA69FF6100E",
            "C4D2ECEC9CB5DF71EC57A0EC154A5BB319C192D0598E09B67B7BBD6E39849AA0",
            "A3ED6D24FB83327BF16F8D2A377BA07E5946BAF46AE87F15D3BAF603661A42B2",
            "259583F7740A082D219D258EB69823BD1E515D8D33803F9484D8A6C130D84762",
        ] {
            let encoded = super::encode_hex(input).unwrap();
            assert_eq!(super::decode_hex(&encoded), Ok(input.to_string()));
        }
        // Lowercase and short inputs normalize to uppercase, zero-padded.
        let encoded = super::encode_hex("01f957").unwrap();
        assert_eq!(super::decode_hex(&encoded), Ok(format!("{:0>64}", "01F957")));
    }

    #[test]
    fn encode_hex_rejects_long_input() {
        let input = "0".repeat(66);
        assert_eq!(super::encode_hex(&input), Err(Error::InvalidLength { length: 66 }));
    }

    #[test]
    fn encode_hex_rejects_odd_length() {
        assert_eq!(super::encode_hex("01F"), Err(Error::Hex(hex::Error::OddLength)));
    }

    #[test]
    fn decode_hex_rejects_invalid_input() {
        assert_eq!(
            super::decode_hex("ho!j"),
            Err(Error::Decode(decode::Error::InvalidCharacter { character: '!', index: 2 }))
        );
    }
}
