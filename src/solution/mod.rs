//! 용액 조제 계산기 모음.
//!
//! 분말 시약으로부터 stock 용액을 만드는 계산과, stock 용액을 희석해
//! working 용액을 만드는 계산을 제공한다. 두 계산 모두 순수 함수이며
//! 결과에는 벤치에서 바로 따라 할 수 있는 조제 절차 텍스트가 포함된다.

pub mod stock;
pub mod working;

pub use stock::{compute_stock_solution, StockSolutionInput, StockSolutionResult};
pub use working::{compute_working_solution, WorkingSolutionInput, WorkingSolutionResult};

/// 용액 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionError {
    /// 0 이하 또는 비유한 수치 입력
    NonPositive { field: &'static str, value: f64 },
    /// 목표 농도가 stock 농도 이상 (희석 배수가 1을 넘지 않음)
    TargetNotBelowStock { stock_molar: f64, target_molar: f64 },
}

impl std::fmt::Display for SolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionError::NonPositive { field, value } => {
                write!(f, "{field}은(는) 0보다 큰 값이어야 합니다: {value}")
            }
            SolutionError::TargetNotBelowStock {
                stock_molar,
                target_molar,
            } => write!(
                f,
                "목표 농도가 stock 농도보다 낮아야 합니다 (stock={stock_molar} M, 목표={target_molar} M)"
            ),
        }
    }
}

impl std::error::Error for SolutionError {}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<(), SolutionError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SolutionError::NonPositive { field, value });
    }
    Ok(())
}

/// 표시하기 좋은 체적 단위를 고른다 (1 µL 미만이 아니면 값이 1 이상이
/// 되는 가장 큰 단위).
pub(crate) fn pipettable_volume(volume_l: f64) -> (f64, crate::units::VolumeUnit) {
    use crate::units::VolumeUnit;
    if volume_l >= 1.0 {
        (volume_l, VolumeUnit::Liter)
    } else if volume_l >= 1e-3 {
        (volume_l * 1e3, VolumeUnit::Milliliter)
    } else {
        (volume_l * 1e6, VolumeUnit::Microliter)
    }
}
