use serde::{Deserialize, Serialize};

use super::{require_positive, SolutionError};
use crate::format::format_result_with_unit;
use crate::units::{concentration_in_molar, volume_in_liter, ConcentrationUnit, VolumeUnit};

/// 분말 시약으로 stock 용액을 만들 때의 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSolutionInput {
    /// 화합물 이름 (자유 텍스트)
    pub compound: String,
    /// 분자량 [g/mol]
    pub molecular_weight_g_per_mol: f64,
    /// 목표 농도
    pub target_concentration: f64,
    pub concentration_unit: ConcentrationUnit,
    /// 목표 체적
    pub target_volume: f64,
    pub volume_unit: VolumeUnit,
    /// 용매 (자유 텍스트, 비울 수 있음)
    pub solvent: String,
}

/// stock 용액 계산 결과. 계산 후 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSolutionResult {
    /// 칭량할 질량 [mg]
    pub mass_mg: f64,
    /// 칭량할 질량 [g]
    pub mass_g: f64,
    /// 최종 체적 (입력 단위 기준)
    pub total_volume: f64,
    pub volume_unit: VolumeUnit,
    /// 조제 절차 텍스트
    pub protocol: String,
}

/// 분말 칭량 질량을 계산한다.
///
/// mass [g] = 농도 [mol/L] × 체적 [L] × 분자량 [g/mol]
pub fn compute_stock_solution(
    input: &StockSolutionInput,
) -> Result<StockSolutionResult, SolutionError> {
    require_positive("분자량", input.molecular_weight_g_per_mol)?;
    require_positive("목표 농도", input.target_concentration)?;
    require_positive("목표 체적", input.target_volume)?;

    let concentration_molar =
        concentration_in_molar(input.target_concentration, input.concentration_unit);
    let volume_l = volume_in_liter(input.target_volume, input.volume_unit);

    let moles = concentration_molar * volume_l;
    let mass_g = moles * input.molecular_weight_g_per_mol;
    let mass_mg = mass_g * 1000.0;

    Ok(StockSolutionResult {
        mass_mg,
        mass_g,
        total_volume: input.target_volume,
        volume_unit: input.volume_unit,
        protocol: protocol(input, mass_mg, mass_g),
    })
}

fn protocol(input: &StockSolutionInput, mass_mg: f64, mass_g: f64) -> String {
    let solvent = if input.solvent.trim().is_empty() {
        "solvent"
    } else {
        input.solvent.trim()
    };
    let vol_symbol = input.volume_unit.symbol();
    format!(
        "1. Weigh {mass} of {compound} (= {mass_alt})\n\
         2. Add about 80% of the final volume of {solvent} (~{vol80})\n\
         3. Dissolve completely (vortex or sonicate if needed)\n\
         4. Bring to the final volume: {vol}\n\
         5. Label: {compound}, {conc} {conc_unit}, date, initials",
        mass = format_result_with_unit(mass_mg, "mg"),
        mass_alt = format_result_with_unit(mass_g, "g"),
        compound = input.compound.trim(),
        vol80 = format_result_with_unit(input.target_volume * 0.8, vol_symbol),
        vol = format_result_with_unit(input.target_volume, vol_symbol),
        conc = crate::format::format_number(input.target_concentration),
        conc_unit = input.concentration_unit.symbol(),
    )
}
