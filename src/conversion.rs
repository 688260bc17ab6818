use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `M`, `mM`, `uM`, `L`, `mL`, `uL`, `g`, `mg` 등을
/// 사용할 수 있다. 농도와 체적처럼 차원이 다른 단위 간 변환은 타입상
/// 표현되지 않는다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Concentration => {
            let from = parse_concentration_unit(from_unit_str)?;
            let to = parse_concentration_unit(to_unit_str)?;
            Ok(convert_concentration(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
    }
}

pub fn parse_concentration_unit(s: &str) -> Result<ConcentrationUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "mol/l" | "molar" => Ok(ConcentrationUnit::Molar),
        "mm" | "mmol/l" | "millimolar" => Ok(ConcentrationUnit::MilliMolar),
        "µm" | "um" | "µmol/l" | "umol/l" | "micromolar" => Ok(ConcentrationUnit::MicroMolar),
        "nm" | "nmol/l" | "nanomolar" => Ok(ConcentrationUnit::NanoMolar),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "ml" | "milliliter" => Ok(VolumeUnit::Milliliter),
        "µl" | "ul" | "microliter" => Ok(VolumeUnit::Microliter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "g" | "gram" => Ok(MassUnit::Gram),
        "mg" | "milligram" => Ok(MassUnit::Milligram),
        "µg" | "ug" | "microgram" => Ok(MassUnit::Microgram),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
