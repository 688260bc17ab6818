//! 수치 표시 및 입력 검증.
//!
//! 실험 기구(피펫/저울)의 실제 정밀도에 맞춰 자릿수를 제한한다.
//! "499.0000 µL" 같은 표시는 측정 불가능한 정밀도를 암시하므로 피한다.

/// 수치 입력 검증 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// 빈 입력
    Empty,
    /// 소수점 구분자로 쉼표를 사용 (로케일 혼동)
    DecimalSeparator(String),
    /// 숫자로 해석 불가
    NotANumber(String),
    /// 0 이하의 값
    NonPositive(f64),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Empty => write!(f, "값을 입력하세요."),
            InputError::DecimalSeparator(s) => {
                write!(f, "소수점은 쉼표(,)가 아니라 마침표(.)를 사용하세요: {s}")
            }
            InputError::NotANumber(s) => write!(f, "숫자가 아닙니다: {s}"),
            InputError::NonPositive(v) => write!(f, "0보다 큰 값을 입력하세요: {v}"),
        }
    }
}

impl std::error::Error for InputError {}

/// 값의 크기에 따라 소수 자릿수를 달리해 문자열로 만든다.
///
/// - |v| < 0.01  : 유효숫자 4자리 (미량 피펫팅 영역)
/// - |v| < 10    : 소수 2자리 (P20 피펫 정밀도)
/// - |v| < 100   : 소수 1자리 (P200)
/// - |v| >= 100  : 정수 (P1000)
///
/// 말단의 0과 소수점은 제거한다 ("5.00" → "5").
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();

    let formatted = if abs < 0.01 {
        // 극미량 희석에서도 유효숫자 4자리를 유지한다 (예: 1.234e-10).
        let exponent = abs.log10().floor() as i32;
        let decimals = (3 - exponent).max(4) as usize;
        format!("{value:.decimals$}")
    } else if abs < 10.0 {
        format!("{value:.2}")
    } else if abs < 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.0}")
    };

    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// 사용자 입력 문자열을 양의 실수로 검증/변환한다.
///
/// 독일어권 로케일 사용자가 "5,2"처럼 쉼표를 입력하는 경우를 조기에
/// 잡아내기 위해 쉼표는 별도 오류로 구분한다.
pub fn validate_decimal_input(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if trimmed.contains(',') {
        return Err(InputError::DecimalSeparator(trimmed.to_string()));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NotANumber(trimmed.to_string()));
    }
    if value <= 0.0 {
        return Err(InputError::NonPositive(value));
    }
    Ok(value)
}

/// 값과 단위 기호를 붙여 표시용 문자열을 만든다 (예: "4.67 mg").
pub fn format_result_with_unit(value: f64, unit: &str) -> String {
    format!("{} {unit}", format_number(value))
}
