//! CRC-16/CCITT-FALSE (poly `0x1021`, init `0xFFFF`, no reflection, no final XOR).
//!
//! Bit-serial form, MSB first, as used by the EMVCo/VietQR checksum field.

/// Generator polynomial.
pub const POLYNOMIAL: u16 = 0x1021;

/// Initial register value.
pub const INITIAL: u16 = 0xFFFF;

/// CRC-16/CCITT-FALSE of raw bytes.
#[must_use]
pub fn crc16_bytes(data: &[u8]) -> u16 {
    let mut register = INITIAL;
    for &byte in data {
        for j in (0..8).rev() {
            let bit = (byte >> j) & 1 == 1;
            let c15 = register & 0x8000 != 0;
            register <<= 1;
            if c15 != bit {
                register ^= POLYNOMIAL;
            }
        }
    }
    register
}

/// CRC of the UTF-8 bytes of `input`, as four upper-case hex digits.
#[must_use]
pub fn crc16(input: &str) -> String {
    format!("{:04X}", crc16_bytes(input.as_bytes()))
}
