use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    Microliter,
}

impl VolumeUnit {
    /// 전체 단위 목록 (UI 콤보박스용).
    pub const ALL: [VolumeUnit; 3] = [
        VolumeUnit::Liter,
        VolumeUnit::Milliliter,
        VolumeUnit::Microliter,
    ];

    /// 표시용 기호 (예: "mL").
    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::Liter => "L",
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::Microliter => "µL",
        }
    }
}

fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::Milliliter => value * 1e-3,
        VolumeUnit::Microliter => value * 1e-6,
    }
}

fn from_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::Milliliter => value * 1e3,
        VolumeUnit::Microliter => value * 1e6,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let liter = to_liter(value, from);
    from_liter(liter, to)
}

/// 체적을 내부 기준 단위(L)로 환산한다.
pub fn volume_in_liter(value: f64, unit: VolumeUnit) -> f64 {
    to_liter(value, unit)
}
