#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate("[메포] 주간보스", 9), "[메포] 주간보스");
    assert_eq!(truncate("", 4), "");
}

#[test]
fn test_truncate_cuts_with_ellipsis() {
    assert_eq!(truncate("[아매획] 수익 정산", 8), "[아매획] 수…");
}

#[test]
fn test_truncate_width_zero() {
    assert_eq!(truncate("[보스] 자쿰", 0), "");
}

#[test]
fn test_truncate_hangul() {
    // Hangul syllables are multi-byte UTF-8
    assert_eq!(truncate("[보스] 하드 스우", 6), "[보스] …");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234567)), "1,234,567");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(999)), "999");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "0");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-500000)), "-500,000");
}

#[test]
fn test_format_amount_rounds_to_whole_meso() {
    assert_eq!(format_amount(dec!(1999.5)), "2,000");
    assert_eq!(format_amount(dec!(-0.4)), "0");
}

// ── format_meso ───────────────────────────────────────────────

#[test]
fn test_format_meso_small() {
    assert_eq!(format_meso(dec!(9999)), "9999");
    assert_eq!(format_meso(dec!(0)), "0");
}

#[test]
fn test_format_meso_man() {
    assert_eq!(format_meso(dec!(10000)), "1만");
    assert_eq!(format_meso(dec!(35000)), "4만");
    assert_eq!(format_meso(dec!(3000000)), "300만");
}

#[test]
fn test_format_meso_eok() {
    assert_eq!(format_meso(dec!(100000000)), "1.0억");
    assert_eq!(format_meso(dec!(250000000)), "2.5억");
    assert_eq!(format_meso(dec!(1234000000)), "12.3억");
}

#[test]
fn test_format_meso_negative_stays_plain() {
    assert_eq!(format_meso(dec!(-2500000)), "-2500000");
}
