use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::format::{self, format_number, format_result_with_unit};
use crate::history::{HistoryRecord, HistoryStore, RecordResult};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::solution::{
    compute_stock_solution, compute_working_solution, StockSolutionInput, WorkingSolutionInput,
};
use crate::units::{ConcentrationUnit, VolumeUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StockSolution,
    WorkingSolution,
    UnitConversion,
    History,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_STOCK));
    println!("{}", tr.t(keys::MAIN_MENU_WORKING));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_HISTORY));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::StockSolution),
            "2" => return Ok(MenuChoice::WorkingSolution),
            "3" => return Ok(MenuChoice::UnitConversion),
            "4" => return Ok(MenuChoice::History),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// Stock 용액(분말 칭량) 메뉴를 처리한다.
pub fn handle_stock_solution(
    tr: &Translator,
    cfg: &Config,
    store: &HistoryStore,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::STOCK_HEADING));
    println!("{}", tr.t(keys::HELP_STOCK));
    let compound = read_nonempty(tr, tr.t(keys::PROMPT_COMPOUND))?;
    let molecular_weight = read_f64(tr, tr.t(keys::PROMPT_MOLECULAR_WEIGHT))?;
    let target_concentration = read_f64(tr, tr.t(keys::PROMPT_TARGET_CONCENTRATION))?;
    let concentration_unit = read_concentration_unit(tr, cfg.default_units.concentration)?;
    let target_volume = read_f64(tr, tr.t(keys::PROMPT_TARGET_VOLUME))?;
    let volume_unit = read_volume_unit(tr, cfg.default_units.volume)?;
    let solvent = read_line(tr.t(keys::PROMPT_SOLVENT))?.trim().to_string();

    let input = StockSolutionInput {
        compound,
        molecular_weight_g_per_mol: molecular_weight,
        target_concentration,
        concentration_unit,
        target_volume,
        volume_unit,
        solvent,
    };
    let result = match compute_stock_solution(&input) {
        Ok(r) => r,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };

    println!(
        "{} {} ({})",
        tr.t(keys::RESULT_MASS),
        format_result_with_unit(result.mass_mg, "mg"),
        format_result_with_unit(result.mass_g, "g"),
    );
    println!("{}", tr.t(keys::RESULT_PROTOCOL));
    println!("{}", result.protocol);

    store.append(&HistoryRecord::stock(input, result))?;
    println!("{}", tr.t(keys::HISTORY_SAVED));
    Ok(())
}

/// Working 용액(희석) 메뉴를 처리한다.
pub fn handle_working_solution(
    tr: &Translator,
    cfg: &Config,
    store: &HistoryStore,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WORKING_HEADING));
    println!("{}", tr.t(keys::HELP_WORKING));
    let compound = read_nonempty(tr, tr.t(keys::PROMPT_COMPOUND))?;
    let stock_concentration = read_f64(tr, tr.t(keys::PROMPT_STOCK_CONCENTRATION))?;
    let stock_concentration_unit = read_concentration_unit(tr, cfg.default_units.concentration)?;
    let target_concentration = read_f64(tr, tr.t(keys::PROMPT_TARGET_CONCENTRATION))?;
    let target_concentration_unit = read_concentration_unit(tr, cfg.default_units.concentration)?;
    let target_volume = read_f64(tr, tr.t(keys::PROMPT_TARGET_VOLUME))?;
    let volume_unit = read_volume_unit(tr, cfg.default_units.volume)?;
    let solvent = read_line(tr.t(keys::PROMPT_SOLVENT))?.trim().to_string();

    let input = WorkingSolutionInput {
        compound,
        stock_concentration,
        stock_concentration_unit,
        target_concentration,
        target_concentration_unit,
        target_volume,
        volume_unit,
        solvent,
    };
    let result = match compute_working_solution(&input) {
        Ok(r) => r,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };

    let vol_symbol = result.volume_unit.symbol();
    println!(
        "{} {}x",
        tr.t(keys::RESULT_DILUTION_FACTOR),
        format_number(result.dilution_factor)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_STOCK_VOLUME),
        format_result_with_unit(result.stock_volume, vol_symbol)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_SOLVENT_VOLUME),
        format_result_with_unit(result.solvent_volume, vol_symbol)
    );
    println!("{}", tr.t(keys::RESULT_PROTOCOL));
    println!("{}", result.protocol);

    store.append(&HistoryRecord::working(input, result))?;
    println!("{}", tr.t(keys::HISTORY_SAVED));
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    println!("{}", tr.t(keys::HELP_UNIT_CONVERSION));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    match conversion::convert(kind, value, from_unit.trim(), to_unit.trim()) {
        Ok(result) => println!(
            "{} {}",
            tr.t(keys::UNIT_CONVERSION_RESULT),
            format_result_with_unit(result, to_unit.trim())
        ),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Concentration),
        2 => Some(QuantityKind::Volume),
        3 => Some(QuantityKind::Mass),
        _ => None,
    }
}

/// 계산 이력 메뉴를 처리한다.
pub fn handle_history(tr: &Translator, store: &HistoryStore) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HISTORY_HEADING));
    println!("{} {}", tr.t(keys::HISTORY_COUNT), store.count()?);
    println!("{}", tr.t(keys::HISTORY_OPTIONS));
    let choice = read_line(tr.t(keys::PROMPT_SELECT))?;
    match choice.trim() {
        "1" => {
            let records = store.list_all()?;
            if records.is_empty() {
                println!("{}", tr.t(keys::HISTORY_EMPTY));
            }
            for record in records {
                print_record(&record);
            }
        }
        "2" => {
            if let Some(backup) = store.clear()? {
                println!("{} {}", tr.t(keys::HISTORY_BACKUP_SAVED), backup.display());
            }
            println!("{}", tr.t(keys::HISTORY_CLEARED));
        }
        _ => {}
    }
    Ok(())
}

fn print_record(record: &HistoryRecord) {
    let summary = match &record.result {
        RecordResult::Stock(r) => format!(
            "{} / {}",
            format_result_with_unit(r.mass_mg, "mg"),
            format_result_with_unit(r.total_volume, r.volume_unit.symbol())
        ),
        RecordResult::Working(r) => format!(
            "{}x, {} + {}",
            format_number(r.dilution_factor),
            format_result_with_unit(r.stock_volume, r.volume_unit.symbol()),
            format_result_with_unit(r.solvent_volume, r.volume_unit.symbol())
        ),
    };
    println!(
        "[{}] {:?} {} -> {}",
        record.timestamp,
        record.calculator_type,
        record.compound(),
        summary
    );
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!(
        "{} {} / {}",
        tr.t(keys::SETTINGS_CURRENT_UNITS),
        cfg.default_units.concentration.symbol(),
        cfg.default_units.volume.symbol()
    );

    println!("{}", tr.t(keys::SETTINGS_CONCENTRATION_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        other => match concentration_by_index(other) {
            Some(unit) => cfg.default_units.concentration = unit,
            None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        },
    }

    println!("{}", tr.t(keys::SETTINGS_VOLUME_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        other => match volume_by_index(other) {
            Some(unit) => cfg.default_units.volume = unit,
            None => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        },
    }

    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn concentration_by_index(s: &str) -> Option<ConcentrationUnit> {
    match s {
        "1" => Some(ConcentrationUnit::Molar),
        "2" => Some(ConcentrationUnit::MilliMolar),
        "3" => Some(ConcentrationUnit::MicroMolar),
        "4" => Some(ConcentrationUnit::NanoMolar),
        _ => None,
    }
}

fn volume_by_index(s: &str) -> Option<VolumeUnit> {
    match s {
        "1" => Some(VolumeUnit::Liter),
        "2" => Some(VolumeUnit::Milliliter),
        "3" => Some(VolumeUnit::Microliter),
        _ => None,
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

/// 빈 입력을 허용하지 않는 자유 텍스트 입력.
fn read_nonempty(tr: &Translator, prompt: &str) -> Result<String, AppError> {
    loop {
        let line = read_line(prompt)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

/// 양의 실수 입력. 쉼표 소수점/비수치/0 이하 입력에는 구체적 메시지를
/// 보여주고 다시 묻는다.
fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let line = read_line(prompt)?;
        match format::validate_decimal_input(&line) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    }
}

fn read_concentration_unit(
    tr: &Translator,
    default: ConcentrationUnit,
) -> Result<ConcentrationUnit, AppError> {
    println!("{}", tr.t(keys::CONCENTRATION_UNIT_OPTIONS));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        let trimmed = sel.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        if let Some(unit) = concentration_by_index(trimmed) {
            return Ok(unit);
        }
        if let Ok(unit) = conversion::parse_concentration_unit(trimmed) {
            return Ok(unit);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_volume_unit(tr: &Translator, default: VolumeUnit) -> Result<VolumeUnit, AppError> {
    println!("{}", tr.t(keys::VOLUME_UNIT_OPTIONS));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        let trimmed = sel.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        if let Some(unit) = volume_by_index(trimmed) {
            return Ok(unit);
        }
        if let Ok(unit) = conversion::parse_volume_unit(trimmed) {
            return Ok(unit);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}
