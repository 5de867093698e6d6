//! # Byte Vocabulary Seed

use crate::{
    errors::BMResult,
    types::{TokenType, token_from_usize},
};

/// The byte-level starting point of training.
///
/// Each distinct byte of the input is assigned a token, densely from `0`,
/// in order of first appearance; bytes that never appear have no token.
#[derive(Debug, Clone, PartialEq)]
pub struct ByteSeed<T: TokenType> {
    /// Table mapping from byte ordinal (position) to token.
    byte_tokens: [Option<T>; 256],

    /// The distinct bytes, in token order.
    seen_bytes: Vec<u8>,

    /// The input, as byte tokens.
    tokens: Vec<T>,
}

impl<T: TokenType> ByteSeed<T> {
    /// Seed from a byte stream.
    ///
    /// ## Returns
    /// An error if the number of distinct bytes does not fit in `T`.
    pub fn from_bytes<B: AsRef<[u8]>>(bytes: B) -> BMResult<Self> {
        let bytes = bytes.as_ref();

        let mut byte_tokens: [Option<T>; 256] = [None; 256];
        let mut seen_bytes: Vec<u8> = Vec::new();
        let mut tokens: Vec<T> = Vec::with_capacity(bytes.len());

        for &b in bytes {
            let token = match byte_tokens[b as usize] {
                Some(token) => token,
                None => {
                    let token = token_from_usize(seen_bytes.len())?;
                    byte_tokens[b as usize] = Some(token);
                    seen_bytes.push(b);
                    token
                }
            };
            tokens.push(token);
        }

        Ok(Self {
            byte_tokens,
            seen_bytes,
            tokens,
        })
    }

    /// The number of seeded tokens.
    pub fn len(&self) -> usize {
        self.seen_bytes.len()
    }

    /// Is the seed empty?
    pub fn is_empty(&self) -> bool {
        self.seen_bytes.is_empty()
    }

    /// The distinct bytes; `seen_bytes()[i]` is the byte of token `i`.
    pub fn seen_bytes(&self) -> &[u8] {
        &self.seen_bytes
    }

    /// Get the token for a byte, if the byte was seen.
    pub fn get_token(
        &self,
        byte: u8,
    ) -> Option<T> {
        self.byte_tokens[byte as usize]
    }

    /// The input, as byte tokens.
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    /// Take the input token sequence.
    pub fn into_tokens(self) -> Vec<T> {
        self.tokens
    }
}
