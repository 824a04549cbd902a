// µ-law codes are stored bit-inverted. After inversion a code is laid out as
// sign (bit 7), segment/exponent (bits 6..4) and quantization/mantissa (bits 3..0).
const SIGN_BIT: u8 = 0x80;
const SEG_MASK: u8 = 0x70;
const SEG_SHIFT: u32 = 4;
const QUANT_MASK: u8 = 0x0f;
const BIAS: i32 = 0x84;

/// µ-law byte to 16-bit linear PCM, one entry per possible byte value.
pub const DECODE_TABLE: [i16; 256] = build_table();

/// Expand every µ-law code. The biased magnitude is stored as-is; the bias is not
/// subtracted again, which keeps output byte-identical with existing converted files.
pub const fn build_table() -> [i16; 256] {
    let mut table = [0i16; 256];
    let mut i = 0;
    while i < 256 {
        let code = !(i as u8);
        let exponent = ((code & SEG_MASK) >> SEG_SHIFT) as u32;
        let mantissa = (code & QUANT_MASK) as i32;

        let mut magnitude = ((mantissa << 3) + BIAS) << exponent;
        if code & SIGN_BIT != 0 {
            magnitude = -magnitude;
        }
        table[i] = magnitude as i16;
        i += 1;
    }
    table
}

/// Linear value of one µ-law byte. Every byte has a table entry, so this cannot fail.
#[inline]
pub fn decode(byte: u8) -> i16 {
    DECODE_TABLE[byte as usize]
}

/// Decode at the source rate, appending one sample per byte.
pub fn decode_into(input: &[u8], out: &mut Vec<i16>) {
    out.reserve(input.len());
    out.extend(input.iter().map(|&b| decode(b)));
}
