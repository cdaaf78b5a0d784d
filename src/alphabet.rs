use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

/// The 62-symbol alphabet, mapping digit values 0–61 to `A–Z a–z 0–9` and back.
pub struct Alphabet {
    encode: [u8; 62],
    decode: [Option<u8>; 256],
}

impl Alphabet {
    pub const fn new(characters: &[u8; 62]) -> Self {
        let mut encode = [0u8; 62];
        let mut decode: [Option<u8>; 256] = [None; 256];

        let mut index = 0;
        while index < encode.len() {
            let character = characters[index];
            if let Some(_) = decode[character as usize] {
                panic!("Duplicate character in alphabet");
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Self { encode, decode }
    }

    pub fn encode(&self, digit: u8) -> u8 {
        self.encode[digit as usize]
    }

    pub fn decode(&self, character: u8, index: usize) -> Result<u8, Error> {
        match self.decode[character as usize] {
            Some(digit) => Ok(digit),
            None => Err(Error::InvalidCharacter {
                character: character as char,
                index,
            }),
        }
    }
}

pub const ALPHABET: Alphabet = Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789");
