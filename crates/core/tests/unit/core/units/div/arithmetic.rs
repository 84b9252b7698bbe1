//! Division numeric-core vectors.
//!
//! Deterministic edge-case tests for the R5900 integer divider semantics.
//! Coverage:
//!   - Truncation toward zero and remainder sign for all sign mixes
//!   - Boundary values (0, 1, -1, MAX, MIN)
//!   - The i32::MIN / -1 no-trap case
//!   - The deterministic divide-by-zero register values
//!   - Plain unsigned division

use divsim_core::core::units::div::arithmetic;
use rstest::rstest;

// ─── Constants ───────────────────────────────────────────────────────────────
// Named constants for readability. Every magic number in a test vector should
// be traceable to an architectural boundary condition.

const ZERO: u32 = 0;
const ONE: u32 = 1;
const NEG1: u32 = -1i32 as u32; // 0xFFFF_FFFF

// Signed boundaries
const I32_MAX: u32 = i32::MAX as u32; // 0x7FFF_FFFF
const I32_MIN: u32 = i32::MIN as u32; // 0x8000_0000

// Unsigned boundary
const U32_MAX: u32 = u32::MAX; // 0xFFFF_FFFF

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Run one signed division. Thin wrapper to keep test lines short.
fn div(a: i32, b: i32) -> (i32, i32) {
    let (q, r) = arithmetic::execute(a as u32, b as u32, true);
    (q as i32, r as i32)
}

/// Run one unsigned division.
fn divu(a: u32, b: u32) -> (u32, u32) {
    arithmetic::execute(a, b, false)
}

// ═════════════════════════════════════════════════════════════════════════════
//  Signed division: truncation and remainder sign
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(7, 2, 3, 1)]
#[case(-7, 2, -3, -1)]
#[case(7, -2, -3, 1)]
#[case(-7, -2, 3, -1)]
fn div_truncates_toward_zero(
    #[case] a: i32,
    #[case] b: i32,
    #[case] quotient: i32,
    #[case] remainder: i32,
) {
    assert_eq!(div(a, b), (quotient, remainder));
}

#[test]
fn div_exact() {
    assert_eq!(div(42, 7), (6, 0));
    assert_eq!(div(-42, 7), (-6, 0));
}

#[test]
fn div_identity() {
    assert_eq!(div(42, 1), (42, 0));
    assert_eq!(div(-42, 1), (-42, 0));
}

#[test]
fn div_self() {
    assert_eq!(div(42, 42), (1, 0));
    assert_eq!(div(-1, -1), (1, 0));
}

#[test]
fn div_zero_dividend() {
    assert_eq!(div(0, 5), (0, 0));
    assert_eq!(div(0, -5), (0, 0));
}

#[test]
fn div_dividend_smaller_than_divisor() {
    assert_eq!(div(3, 10), (0, 3));
    assert_eq!(div(-3, 10), (0, -3));
}

#[test]
fn div_remainder_sign_follows_dividend() {
    assert_eq!(div(100, 7), (14, 2));
    assert_eq!(div(-100, 7), (-14, -2));
    assert_eq!(div(100, -7), (-14, 2));
    assert_eq!(div(-100, -7), (14, -2));
}

// ═════════════════════════════════════════════════════════════════════════════
//  Signed division: boundary values
// ═════════════════════════════════════════════════════════════════════════════

/// The overflow case: i32::MIN / -1 wraps back to i32::MIN with a zero
/// remainder. The hardware raises no trap here.
#[test]
fn div_min_by_neg1_no_trap() {
    let (q, r) = arithmetic::execute(I32_MIN, NEG1, true);
    assert_eq!(q, I32_MIN);
    assert_eq!(r, 0);
}

#[test]
fn div_min_by_one() {
    let (q, r) = arithmetic::execute(I32_MIN, ONE, true);
    assert_eq!(q, I32_MIN);
    assert_eq!(r, 0);
}

#[test]
fn div_max_by_neg1() {
    assert_eq!(div(i32::MAX, -1), (-i32::MAX, 0));
}

#[test]
fn div_min_by_min() {
    assert_eq!(div(i32::MIN, i32::MIN), (1, 0));
}

#[test]
fn div_min_by_two() {
    assert_eq!(div(i32::MIN, 2), (i32::MIN / 2, 0));
}

// ═════════════════════════════════════════════════════════════════════════════
//  Signed division by zero: documented deterministic values, never a fault
// ═════════════════════════════════════════════════════════════════════════════

/// Non-negative dividend: quotient is -1, remainder is the dividend.
#[test]
fn div_by_zero_positive_dividend() {
    assert_eq!(div(42, 0), (-1, 42));
}

#[test]
fn div_by_zero_zero_dividend() {
    assert_eq!(div(0, 0), (-1, 0));
}

/// Negative dividend: quotient is +1, remainder is the dividend.
#[test]
fn div_by_zero_negative_dividend() {
    assert_eq!(div(-42, 0), (1, -42));
}

#[test]
fn div_by_zero_min_dividend() {
    assert_eq!(div(i32::MIN, 0), (1, i32::MIN));
}

#[test]
fn div_by_zero_max_dividend() {
    assert_eq!(div(i32::MAX, 0), (-1, i32::MAX));
}

// ═════════════════════════════════════════════════════════════════════════════
//  Unsigned division
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case(7, 2, 3, 1)]
#[case(100, 7, 14, 2)]
#[case(42, 42, 1, 0)]
#[case(3, 10, 0, 3)]
fn divu_basic(#[case] a: u32, #[case] b: u32, #[case] quotient: u32, #[case] remainder: u32) {
    assert_eq!(divu(a, b), (quotient, remainder));
}

/// 0x8000_0000 is a large unsigned value here, not i32::MIN.
#[test]
fn divu_high_bit_is_not_a_sign() {
    assert_eq!(divu(I32_MIN, 2), (0x4000_0000, 0));
    assert_eq!(divu(U32_MAX, 2), (I32_MAX, 1));
}

#[test]
fn divu_max_by_one() {
    assert_eq!(divu(U32_MAX, ONE), (U32_MAX, 0));
}

#[test]
fn divu_max_by_max() {
    assert_eq!(divu(U32_MAX, U32_MAX), (1, 0));
}

/// Unsigned divide-by-zero: quotient is all ones, remainder the dividend.
#[test]
fn divu_by_zero() {
    assert_eq!(divu(42, ZERO), (U32_MAX, 42));
    assert_eq!(divu(ZERO, ZERO), (U32_MAX, 0));
    assert_eq!(divu(U32_MAX, ZERO), (U32_MAX, U32_MAX));
}

// ═════════════════════════════════════════════════════════════════════════════
//  Cross-cutting: the division identity in wrapping arithmetic
// ═════════════════════════════════════════════════════════════════════════════

/// q*b + r == a must hold for every non-zero divisor, including the
/// wrapping MIN / -1 case.
#[test]
fn div_identity_holds_for_boundary_vectors() {
    let vectors: [(u32, u32); 8] = [
        (100, 7),
        (-100i32 as u32, 7),
        (100, -7i32 as u32),
        (I32_MIN, NEG1),
        (I32_MIN, ONE),
        (I32_MAX, 2),
        (ZERO, 5),
        (NEG1, 2),
    ];

    for (a, b) in vectors {
        let (q, r) = arithmetic::execute(a, b, true);
        assert_eq!(
            (q as i32).wrapping_mul(b as i32).wrapping_add(r as i32),
            a as i32,
            "q*b + r must equal a for a={a:#x}, b={b:#x}"
        );
    }
}

#[test]
fn divu_identity_holds_for_boundary_vectors() {
    let vectors: [(u32, u32); 6] = [
        (100, 7),
        (U32_MAX, 2),
        (U32_MAX, U32_MAX),
        (I32_MIN, 3),
        (ZERO, 5),
        (1, U32_MAX),
    ];

    for (a, b) in vectors {
        let (q, r) = divu(a, b);
        assert_eq!(
            q.wrapping_mul(b).wrapping_add(r),
            a,
            "q*b + r must equal a for a={a:#x}, b={b:#x}"
        );
        assert!(r < b, "remainder must be smaller than the divisor");
    }
}
