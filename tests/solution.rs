//! 용액 조제 계산기 테스트.
use approx::assert_relative_eq;

use solution_prep_toolbox::solution::{
    compute_stock_solution, compute_working_solution, SolutionError, StockSolutionInput,
    WorkingSolutionInput,
};
use solution_prep_toolbox::units::{ConcentrationUnit, VolumeUnit};

fn stock_input(mw: f64, conc: f64, vol: f64) -> StockSolutionInput {
    StockSolutionInput {
        compound: "Rapamycin".to_string(),
        molecular_weight_g_per_mol: mw,
        target_concentration: conc,
        concentration_unit: ConcentrationUnit::MilliMolar,
        target_volume: vol,
        volume_unit: VolumeUnit::Milliliter,
        solvent: "DMSO".to_string(),
    }
}

#[test]
fn stock_mass_matches_closed_form() {
    // 10 mM × 1 mL × 466.54 g/mol → 4.6654 mg
    let result = compute_stock_solution(&stock_input(466.54, 10.0, 1.0)).expect("stock calc");
    assert_relative_eq!(result.mass_mg, 4.6654, max_relative = 1e-12);
    assert_relative_eq!(result.mass_g, 0.0046654, max_relative = 1e-12);
    assert_eq!(result.total_volume, 1.0);
    assert_eq!(result.volume_unit, VolumeUnit::Milliliter);
}

#[test]
fn stock_mass_formula_holds_for_other_units() {
    let input = StockSolutionInput {
        compound: "NaCl".to_string(),
        molecular_weight_g_per_mol: 58.44,
        target_concentration: 150.0,
        concentration_unit: ConcentrationUnit::MilliMolar,
        target_volume: 1.0,
        volume_unit: VolumeUnit::Liter,
        solvent: String::new(),
    };
    let result = compute_stock_solution(&input).expect("stock calc");
    // 0.15 mol/L × 1 L × 58.44 g/mol = 8.766 g
    assert_relative_eq!(result.mass_g, 8.766, max_relative = 1e-12);
    assert_relative_eq!(result.mass_mg, 8766.0, max_relative = 1e-12);
}

#[test]
fn stock_protocol_mentions_compound_and_mass() {
    let result = compute_stock_solution(&stock_input(466.54, 10.0, 1.0)).expect("stock calc");
    assert!(result.protocol.contains("Rapamycin"));
    assert!(result.protocol.contains("4.67 mg"));
    assert!(result.protocol.contains("DMSO"));
    assert!(result.protocol.contains("1 mL"));
}

#[test]
fn stock_rejects_non_positive_inputs() {
    let err = compute_stock_solution(&stock_input(0.0, 10.0, 1.0)).unwrap_err();
    assert!(matches!(err, SolutionError::NonPositive { .. }));

    let err = compute_stock_solution(&stock_input(466.54, -1.0, 1.0)).unwrap_err();
    assert!(matches!(err, SolutionError::NonPositive { .. }));

    let err = compute_stock_solution(&stock_input(466.54, 10.0, f64::NAN)).unwrap_err();
    assert!(matches!(err, SolutionError::NonPositive { .. }));
}

fn working_input(
    stock: f64,
    stock_unit: ConcentrationUnit,
    target: f64,
    target_unit: ConcentrationUnit,
    vol: f64,
) -> WorkingSolutionInput {
    WorkingSolutionInput {
        compound: "Rapamycin".to_string(),
        stock_concentration: stock,
        stock_concentration_unit: stock_unit,
        target_concentration: target,
        target_concentration_unit: target_unit,
        target_volume: vol,
        volume_unit: VolumeUnit::Milliliter,
        solvent: "PBS".to_string(),
    }
}

#[test]
fn dilution_across_units() {
    // 10 mM stock → 1 µM working, 10 mL 최종
    let result = compute_working_solution(&working_input(
        10.0,
        ConcentrationUnit::MilliMolar,
        1.0,
        ConcentrationUnit::MicroMolar,
        10.0,
    ))
    .expect("dilution");
    assert_relative_eq!(result.dilution_factor, 10_000.0, max_relative = 1e-9);
    assert_relative_eq!(result.stock_volume, 0.001, max_relative = 1e-9);
    assert_relative_eq!(result.solvent_volume, 9.999, max_relative = 1e-9);
    // 절차 텍스트는 0.001 mL 대신 1 µL로 표시
    assert!(result.protocol.contains("1 µL"));
}

#[test]
fn dilution_volumes_sum_to_total() {
    let cases = [
        (10.0, 1.0, 10.0),
        (5.0, 0.5, 100.0),
        (250.0, 3.0, 1.5),
    ];
    for (stock, target, vol) in cases {
        let result = compute_working_solution(&working_input(
            stock,
            ConcentrationUnit::MilliMolar,
            target,
            ConcentrationUnit::MilliMolar,
            vol,
        ))
        .expect("dilution");
        assert_relative_eq!(
            result.stock_volume + result.solvent_volume,
            vol,
            max_relative = 1e-12
        );
    }
}

#[test]
fn dilution_requires_target_below_stock() {
    // 같은 농도 → 희석 배수 1 → 오류
    let err = compute_working_solution(&working_input(
        10.0,
        ConcentrationUnit::MilliMolar,
        10.0,
        ConcentrationUnit::MilliMolar,
        10.0,
    ))
    .unwrap_err();
    assert!(matches!(err, SolutionError::TargetNotBelowStock { .. }));

    // 목표가 stock보다 진함 → 오류
    let err = compute_working_solution(&working_input(
        1.0,
        ConcentrationUnit::MilliMolar,
        10.0,
        ConcentrationUnit::MilliMolar,
        10.0,
    ))
    .unwrap_err();
    assert!(matches!(err, SolutionError::TargetNotBelowStock { .. }));
}

#[test]
fn dilution_rejects_non_positive_inputs() {
    let err = compute_working_solution(&working_input(
        0.0,
        ConcentrationUnit::MilliMolar,
        1.0,
        ConcentrationUnit::MicroMolar,
        10.0,
    ))
    .unwrap_err();
    assert!(matches!(err, SolutionError::NonPositive { .. }));
}
