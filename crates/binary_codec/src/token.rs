use crate::{
    constants::{RADIX, TOKEN_WIDTH},
    error::CodecError,
};

/// Formats the code point of `c` in base 2, zero padded to [`TOKEN_WIDTH`] digits.
/// Code points above `u8::MAX` give a token as wide as their bit length.
pub fn encode_char(c: char) -> String {
    format!("{:0width$b}", u32::from(c), width = TOKEN_WIDTH)
}

/// Parses one token back into the character it encodes.
///
/// The reported error index is `0`; [`crate::decode`] rewrites it to the token's position.
pub fn decode_token(token: &str) -> Result<char, CodecError> {
    let code_point = parse_binary(token)?;
    char::from_u32(code_point).ok_or_else(|| CodecError::InvalidCodePoint {
        index: 0,
        token: token.to_owned(),
    })
}

/// Value of a string of base 2 digits.
/// Unlike [`u32::from_str_radix`] a leading sign is not accepted.
fn parse_binary(token: &str) -> Result<u32, CodecError> {
    if token.is_empty() || !token.chars().all(|c| c.is_digit(RADIX)) {
        return Err(CodecError::InvalidFormat {
            index: 0,
            token: token.to_owned(),
        });
    }
    token
        .chars()
        .filter_map(|c| c.to_digit(RADIX))
        .try_fold(0u32, |acc, bit| acc.checked_mul(RADIX)?.checked_add(bit))
        // Too wide for any character.
        .ok_or_else(|| CodecError::InvalidCodePoint {
            index: 0,
            token: token.to_owned(),
        })
}
