use crate::config::Config;
use crate::conversion;
use crate::format;
use crate::history::HistoryStore;
use crate::i18n::{self, Translator};
use crate::solution::SolutionError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 수치 입력 검증 오류
    Input(format::InputError),
    /// 용액 계산 오류
    Solution(SolutionError),
    /// 이력 저장소 오류
    History(crate::history::HistoryError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Input(e) => write!(f, "입력 오류: {e}"),
            AppError::Solution(e) => write!(f, "계산 오류: {e}"),
            AppError::History(e) => write!(f, "이력 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<format::InputError> for AppError {
    fn from(value: format::InputError) -> Self {
        AppError::Input(value)
    }
}

impl From<SolutionError> for AppError {
    fn from(value: SolutionError) -> Self {
        AppError::Solution(value)
    }
}

impl From<crate::history::HistoryError> for AppError {
    fn from(value: crate::history::HistoryError) -> Self {
        AppError::History(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, store: &HistoryStore, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::StockSolution => ui_cli::handle_stock_solution(tr, config, store)?,
            MenuChoice::WorkingSolution => ui_cli::handle_working_solution(tr, config, store)?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::History => ui_cli::handle_history(tr, store)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
