const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Uppercase hexadecimal rendering of a `u32`, without any prefix.
#[derive(Debug)]
pub(crate) struct Hex {
    digits: [u8; 8],
    start: usize,
}

impl Hex {
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.digits[self.start..]
    }
}

/// Encodes `value`, left-padding with zeros up to `min_digits` (at most 8).
pub(crate) fn encode(mut value: u32, min_digits: usize) -> Hex {
    let mut digits = [b'0'; 8];
    let mut start = digits.len();
    loop {
        start -= 1;
        digits[start] = DIGITS[(value & 0xF) as usize];
        value >>= 4;
        if start == 0 || (value == 0 && digits.len() - start >= min_digits) {
            return Hex { digits, start };
        }
    }
}
