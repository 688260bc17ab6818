use serde::{Deserialize, Serialize};

use super::{pipettable_volume, require_positive, SolutionError};
use crate::format::{format_number, format_result_with_unit};
use crate::units::{concentration_in_molar, volume_in_liter, ConcentrationUnit, VolumeUnit};

/// stock 용액을 희석해 working 용액을 만들 때의 입력.
///
/// stock 농도와 목표 농도의 단위가 달라도 된다. 내부에서 mol/L 기준으로
/// 정규화한 뒤 C1V1 = C2V2 공식을 적용한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingSolutionInput {
    /// 화합물 이름 (자유 텍스트)
    pub compound: String,
    /// stock 용액 농도
    pub stock_concentration: f64,
    pub stock_concentration_unit: ConcentrationUnit,
    /// 목표 농도
    pub target_concentration: f64,
    pub target_concentration_unit: ConcentrationUnit,
    /// 최종 체적
    pub target_volume: f64,
    pub volume_unit: VolumeUnit,
    /// 용매 (자유 텍스트, 비울 수 있음)
    pub solvent: String,
}

/// 희석 계산 결과. 체적은 모두 입력 체적 단위 기준이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingSolutionResult {
    /// 희석 배수 (stock 농도 / 목표 농도)
    pub dilution_factor: f64,
    /// 취해야 할 stock 체적
    pub stock_volume: f64,
    /// 첨가할 용매 체적
    pub solvent_volume: f64,
    /// 최종 체적
    pub total_volume: f64,
    pub volume_unit: VolumeUnit,
    /// 조제 절차 텍스트
    pub protocol: String,
}

/// C1V1 = C2V2 희석 계산.
///
/// 희석 배수는 1을 넘어야 한다. 목표 농도가 stock 농도 이상이면
/// `TargetNotBelowStock` 오류를 반환한다.
pub fn compute_working_solution(
    input: &WorkingSolutionInput,
) -> Result<WorkingSolutionResult, SolutionError> {
    require_positive("stock 농도", input.stock_concentration)?;
    require_positive("목표 농도", input.target_concentration)?;
    require_positive("최종 체적", input.target_volume)?;

    let stock_molar =
        concentration_in_molar(input.stock_concentration, input.stock_concentration_unit);
    let target_molar =
        concentration_in_molar(input.target_concentration, input.target_concentration_unit);

    if target_molar >= stock_molar {
        return Err(SolutionError::TargetNotBelowStock {
            stock_molar,
            target_molar,
        });
    }

    let dilution_factor = stock_molar / target_molar;
    let stock_volume = input.target_volume / dilution_factor;
    let solvent_volume = input.target_volume - stock_volume;

    Ok(WorkingSolutionResult {
        dilution_factor,
        stock_volume,
        solvent_volume,
        total_volume: input.target_volume,
        volume_unit: input.volume_unit,
        protocol: protocol(input, dilution_factor, stock_volume, solvent_volume),
    })
}

fn protocol(
    input: &WorkingSolutionInput,
    dilution_factor: f64,
    stock_volume: f64,
    solvent_volume: f64,
) -> String {
    let solvent = if input.solvent.trim().is_empty() {
        "solvent"
    } else {
        input.solvent.trim()
    };
    let vol_symbol = input.volume_unit.symbol();
    // 0.001 mL보다는 1 µL로 보여주는 쪽이 피펫팅하기 좋다.
    let stock_volume_l = volume_in_liter(stock_volume, input.volume_unit);
    let (pip_value, pip_unit) = pipettable_volume(stock_volume_l);
    format!(
        "1. Pipette {stock} of {compound} stock ({factor}x dilution)\n\
         2. Add {solv_vol} of {solvent}\n\
         3. Mix thoroughly (vortex or pipette up and down)\n\
         4. Final volume: {total}\n\
         5. Label: {compound}, {conc} {conc_unit}, date, initials",
        stock = format_result_with_unit(pip_value, pip_unit.symbol()),
        compound = input.compound.trim(),
        factor = format_number(dilution_factor),
        solv_vol = format_result_with_unit(solvent_volume, vol_symbol),
        total = format_result_with_unit(input.target_volume, vol_symbol),
        conc = format_number(input.target_concentration),
        conc_unit = input.target_concentration_unit.symbol(),
    )
}
