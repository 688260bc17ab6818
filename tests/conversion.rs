//! 단위 변환 회귀 테스트.
use solution_prep_toolbox::conversion::{self, ConversionError};
use solution_prep_toolbox::quantity::QuantityKind;
use solution_prep_toolbox::units::{
    convert_concentration, convert_volume, ConcentrationUnit, VolumeUnit,
};

#[test]
fn concentration_through_molar_base() {
    let um = convert_concentration(10.0, ConcentrationUnit::MilliMolar, ConcentrationUnit::MicroMolar);
    assert!((um - 10_000.0).abs() < 1e-6, "got {um}");

    let m = convert_concentration(2_500.0, ConcentrationUnit::NanoMolar, ConcentrationUnit::Molar);
    assert!((m - 2.5e-6).abs() < 1e-18, "got {m}");
}

#[test]
fn volume_through_liter_base() {
    let ul = convert_volume(1.0, VolumeUnit::Liter, VolumeUnit::Microliter);
    assert!((ul - 1_000_000.0).abs() < 1e-6);

    let ml = convert_volume(250.0, VolumeUnit::Microliter, VolumeUnit::Milliliter);
    assert!((ml - 0.25).abs() < 1e-12);
}

#[test]
fn string_convert_is_case_insensitive() {
    let v = conversion::convert(QuantityKind::Concentration, 1.0, "M", "mM").expect("convert");
    assert!((v - 1000.0).abs() < 1e-9);

    let v = conversion::convert(QuantityKind::Volume, 10.0, "ml", "uL").expect("convert");
    assert!((v - 10_000.0).abs() < 1e-6);

    let v = conversion::convert(QuantityKind::Mass, 2.5, "G", "mg").expect("convert");
    assert!((v - 2500.0).abs() < 1e-9);
}

#[test]
fn micro_prefix_accepts_ascii_and_unicode() {
    let a = conversion::convert(QuantityKind::Concentration, 1.0, "mM", "uM").expect("ascii");
    let b = conversion::convert(QuantityKind::Concentration, 1.0, "mM", "µM").expect("unicode");
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn unknown_unit_is_an_error() {
    let err = conversion::convert(QuantityKind::Concentration, 1.0, "bar", "mM").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(u) if u == "bar"));

    let err = conversion::convert(QuantityKind::Volume, 1.0, "L", "mol/l").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(_)));
}

#[test]
fn round_trip_returns_original() {
    let v = conversion::convert(QuantityKind::Concentration, 3.7, "mM", "nM").expect("to nM");
    let back = conversion::convert(QuantityKind::Concentration, v, "nM", "mM").expect("back");
    assert!((back - 3.7).abs() < 1e-9);
}
