//! 단위 정의 및 변환 모듈 모음.

pub mod concentration;
pub mod mass;
pub mod volume;

pub use concentration::{
    concentration_in_molar, convert_concentration, ConcentrationUnit,
};
pub use mass::{convert_mass, MassUnit};
pub use volume::{convert_volume, volume_in_liter, VolumeUnit};
