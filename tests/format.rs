//! 수치 포맷/입력 검증 회귀 테스트.
use solution_prep_toolbox::format::{
    format_number, format_result_with_unit, validate_decimal_input, InputError,
};

#[test]
fn format_number_precision_bands() {
    assert_eq!(format_number(5.234), "5.23");
    assert_eq!(format_number(25.84), "25.8");
    assert_eq!(format_number(499.0), "499");
    assert_eq!(format_number(0.0), "0");
}

#[test]
fn format_number_small_values_keep_four_significant_digits() {
    // 미량 피펫팅 영역 (< 0.01)은 유효숫자 4자리 유지
    assert_eq!(format_number(0.00123), "0.00123");
    assert_eq!(format_number(0.001234567), "0.001235");
}

#[test]
fn format_number_keeps_significant_digits_for_extreme_dilutions() {
    assert_eq!(format_number(1.234e-10), "0.0000000001234");
    assert_eq!(format_number(5e-13), "0.0000000000005");
}

#[test]
fn format_number_trims_trailing_zeros() {
    assert_eq!(format_number(5.0), "5");
    assert_eq!(format_number(5.2), "5.2");
    assert_eq!(format_number(25.0), "25");
}

#[test]
fn format_number_negative_values() {
    assert_eq!(format_number(-5.234), "-5.23");
    assert_eq!(format_number(-499.4), "-499");
}

#[test]
fn validate_accepts_period_decimal() {
    assert_eq!(validate_decimal_input("5.2"), Ok(5.2));
    assert_eq!(validate_decimal_input("  5.2  "), Ok(5.2));
    assert_eq!(validate_decimal_input("466.54"), Ok(466.54));
}

#[test]
fn validate_rejects_comma_decimal() {
    // 독일어권 로케일 혼동 가드
    assert!(matches!(
        validate_decimal_input("5,2"),
        Err(InputError::DecimalSeparator(_))
    ));
}

#[test]
fn validate_rejects_garbage_and_non_finite() {
    assert!(matches!(
        validate_decimal_input("abc"),
        Err(InputError::NotANumber(_))
    ));
    assert!(matches!(
        validate_decimal_input("inf"),
        Err(InputError::NotANumber(_))
    ));
    assert!(matches!(validate_decimal_input(""), Err(InputError::Empty)));
    assert!(matches!(
        validate_decimal_input("   "),
        Err(InputError::Empty)
    ));
}

#[test]
fn validate_rejects_non_positive() {
    assert!(matches!(
        validate_decimal_input("0"),
        Err(InputError::NonPositive(_))
    ));
    assert!(matches!(
        validate_decimal_input("-3.5"),
        Err(InputError::NonPositive(_))
    ));
}

#[test]
fn result_with_unit_concatenates_symbol() {
    assert_eq!(format_result_with_unit(5.234, "mg"), "5.23 mg");
    assert_eq!(format_result_with_unit(499.0, "µL"), "499 µL");
}
