use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 그램이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Gram,
    Milligram,
    Microgram,
}

impl MassUnit {
    /// 전체 단위 목록 (UI 콤보박스용).
    pub const ALL: [MassUnit; 3] = [MassUnit::Gram, MassUnit::Milligram, MassUnit::Microgram];

    /// 표시용 기호 (예: "mg").
    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::Milligram => "mg",
            MassUnit::Microgram => "µg",
        }
    }
}

fn to_gram(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value,
        MassUnit::Milligram => value * 1e-3,
        MassUnit::Microgram => value * 1e-6,
    }
}

fn from_gram(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value,
        MassUnit::Milligram => value * 1e3,
        MassUnit::Microgram => value * 1e6,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let gram = to_gram(value, from);
    from_gram(gram, to)
}
