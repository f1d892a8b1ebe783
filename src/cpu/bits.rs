//! Bit helpers over plain bytes (bit 0 = least significant).

#[inline]
pub fn get_bit(byte: u8, idx: u8) -> bool {
    byte & (1 << idx) != 0
}

#[inline]
pub fn set_bit(byte: u8, idx: u8, value: bool) -> u8 {
    if value {
        byte | (1 << idx)
    } else {
        byte & !(1 << idx)
    }
}

#[inline]
pub fn flip_bit(byte: u8, idx: u8) -> u8 {
    byte ^ (1 << idx)
}
