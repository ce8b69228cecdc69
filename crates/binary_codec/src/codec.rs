use crate::{
    constants::{TOKEN_SEPARATOR, TOKEN_WIDTH},
    error::CodecError,
    token::{decode_token, encode_char},
};
use log::trace;

/// Converts text into its binary representation: one token per character joined by single spaces.
/// Empty text gives an empty string.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * (TOKEN_WIDTH + 1));
    for (i, c) in text.chars().enumerate() {
        if i != 0 {
            out.push(TOKEN_SEPARATOR);
        }
        out.push_str(&encode_char(c));
    }
    trace!("Encoded {} bytes of text to {} bytes", text.len(), out.len());
    out
}

/// Converts a binary representation back into text.
///
/// Tokens are separated by any run of whitespace so input read from a file may end in a newline.
/// Fails on the first token that isn't base 2 or doesn't name a character.
pub fn decode(binary: &str) -> Result<String, CodecError> {
    let text = binary
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| decode_token(token).map_err(|e| e.at(i)))
        .collect::<Result<String, _>>()?;
    trace!("Decoded {} bytes of binary to {} bytes", binary.len(), text.len());
    Ok(text)
}
