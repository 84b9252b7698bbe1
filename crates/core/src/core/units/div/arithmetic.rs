//! Division numeric semantics.
//!
//! Implements the combinational core of the R5900 integer divider: 32-bit
//! signed and unsigned truncating division. The two hardware quirks live
//! here as well:
//!
//! - `i32::MIN / -1` yields `(i32::MIN, 0)` with no overflow trap.
//! - A zero divisor never faults; it produces the documented deterministic
//!   register values instead.

/// Computes the quotient and remainder for one division.
///
/// Operands are raw 32-bit register values; `signed` selects the DIV/DIV1
/// interpretation over DIVU/DIVU1. No input validation is performed, the
/// divisor may be zero.
///
/// # Arguments
///
/// * `dividend` - Raw 32-bit dividend register value.
/// * `divisor`  - Raw 32-bit divisor register value (may be zero).
/// * `signed`   - If true, interpret both operands as two's-complement.
///
/// # Returns
///
/// `(quotient, remainder)` as raw 32-bit register values. For a non-zero
/// divisor the quotient truncates toward zero and the remainder takes the
/// dividend's sign, so `quotient * divisor + remainder == dividend` in
/// wrapping arithmetic. For a zero divisor: signed quotient is `-1` for a
/// non-negative dividend and `+1` for a negative one, unsigned quotient is
/// all ones; the remainder is the dividend in both cases.
pub fn execute(dividend: u32, divisor: u32, signed: bool) -> (u32, u32) {
    if signed {
        let n = dividend as i32;
        let d = divisor as i32;
        if d == 0 {
            let quotient: i32 = if n < 0 { 1 } else { -1 };
            (quotient as u32, n as u32)
        } else {
            // wrapping_div/_rem fold in the i32::MIN / -1 case: the
            // quotient wraps back to i32::MIN and the remainder is 0,
            // which is exactly the no-trap hardware result.
            (n.wrapping_div(d) as u32, n.wrapping_rem(d) as u32)
        }
    } else if divisor == 0 {
        (u32::MAX, dividend)
    } else {
        (dividend / divisor, dividend % divisor)
    }
}
