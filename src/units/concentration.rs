use serde::{Deserialize, Serialize};

/// 몰 농도 단위. 내부 기준은 mol/L(M)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcentrationUnit {
    Molar,
    MilliMolar,
    MicroMolar,
    NanoMolar,
}

impl ConcentrationUnit {
    /// 전체 단위 목록 (UI 콤보박스용).
    pub const ALL: [ConcentrationUnit; 4] = [
        ConcentrationUnit::Molar,
        ConcentrationUnit::MilliMolar,
        ConcentrationUnit::MicroMolar,
        ConcentrationUnit::NanoMolar,
    ];

    /// 표시용 기호 (예: "mM").
    pub fn symbol(&self) -> &'static str {
        match self {
            ConcentrationUnit::Molar => "M",
            ConcentrationUnit::MilliMolar => "mM",
            ConcentrationUnit::MicroMolar => "µM",
            ConcentrationUnit::NanoMolar => "nM",
        }
    }
}

fn to_molar(value: f64, unit: ConcentrationUnit) -> f64 {
    match unit {
        ConcentrationUnit::Molar => value,
        ConcentrationUnit::MilliMolar => value * 1e-3,
        ConcentrationUnit::MicroMolar => value * 1e-6,
        ConcentrationUnit::NanoMolar => value * 1e-9,
    }
}

fn from_molar(value: f64, unit: ConcentrationUnit) -> f64 {
    match unit {
        ConcentrationUnit::Molar => value,
        ConcentrationUnit::MilliMolar => value * 1e3,
        ConcentrationUnit::MicroMolar => value * 1e6,
        ConcentrationUnit::NanoMolar => value * 1e9,
    }
}

/// 농도를 변환한다.
pub fn convert_concentration(value: f64, from: ConcentrationUnit, to: ConcentrationUnit) -> f64 {
    let molar = to_molar(value, from);
    from_molar(molar, to)
}

/// 농도를 내부 기준 단위(mol/L)로 환산한다.
pub fn concentration_in_molar(value: f64, unit: ConcentrationUnit) -> f64 {
    to_molar(value, unit)
}
