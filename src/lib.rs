//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 GUI도 같은
//! 순수 함수에 바인딩하게 한다. 파일 입출력은 history/config 모듈만 수행한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod format;
pub mod history;
pub mod i18n;
pub mod quantity;
pub mod solution;
pub mod ui_cli;
pub mod units;
