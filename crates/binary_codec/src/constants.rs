/// Minimum number of binary digits in a token. Code points needing more bits produce wider tokens.
pub const TOKEN_WIDTH: usize = u8::BITS as usize;

/// Separator placed between tokens when encoding.
pub const TOKEN_SEPARATOR: char = ' ';

/// Radix of the token digits.
pub const RADIX: u32 = 2;
