use crate::config::GrayCodeValue;

/// Converts a reflected binary Gray code value into plain binary.
///
/// Every bit is folded into all bits below it, so the result does not depend
/// on how many of the high bits were sampled. Leading zeros are inert.
pub const fn to_binary(gray: GrayCodeValue) -> GrayCodeValue {
    let mut num = gray;
    let mut mask = gray;
    while mask != 0 {
        mask >>= 1;
        num ^= mask;
    }

    num
}

/// Converts plain binary into reflected binary Gray code.
pub const fn to_gray(binary: GrayCodeValue) -> GrayCodeValue {
    binary ^ (binary >> 1)
}
