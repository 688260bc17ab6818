#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use solution_prep_toolbox::{
    config, conversion,
    format::{self, format_number, format_result_with_unit},
    history::{HistoryRecord, HistoryStore, RecordResult},
    i18n,
    quantity::QuantityKind,
    solution::{
        compute_stock_solution, compute_working_solution, StockSolutionInput,
        WorkingSolutionInput,
    },
    units::{ConcentrationUnit, VolumeUnit},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(760.0, 640.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Solution Prep Toolbox",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한국어 UI 표시를 위한 시스템 폰트를 탐색해 등록한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = Vec::new();
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(cand));
        }
    }
    candidates.push("/usr/share/fonts/truetype/nanum/NanumGothic.ttf".into());
    candidates.push("/System/Library/Fonts/AppleSDGothicNeo.ttc".into());

    for path in candidates {
        if path.exists() {
            let bytes = fs::read(&path)
                .map_err(|e| format!("Failed to read font ({}): {e}", path.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; falling back to the default font.".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, name.to_owned());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(name.to_owned());
    ctx.set_fonts(fonts);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Stock,
    Working,
    Converter,
    History,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    store: Option<HistoryStore>,
    store_error: Option<String>,
    tab: Tab,
    show_settings_modal: bool,
    ui_scale: f32,
    // Stock 용액
    stock_compound: String,
    stock_mw: String,
    stock_conc: String,
    stock_conc_unit: ConcentrationUnit,
    stock_vol: String,
    stock_vol_unit: VolumeUnit,
    stock_solvent: String,
    stock_result: Option<String>,
    stock_error: Option<String>,
    // Working 용액
    work_compound: String,
    work_stock_conc: String,
    work_stock_conc_unit: ConcentrationUnit,
    work_target_conc: String,
    work_target_conc_unit: ConcentrationUnit,
    work_vol: String,
    work_vol_unit: VolumeUnit,
    work_solvent: String,
    work_result: Option<String>,
    work_error: Option<String>,
    // 단위 변환
    conv_value: String,
    conv_kind: QuantityKind,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
    // 이력
    history: Vec<HistoryRecord>,
    history_dirty: bool,
    history_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang = i18n::resolve_language(&config.language, None);
        let tr = i18n::Translator::new_with_pack(&lang, None);
        let (store, store_error) = match HistoryStore::open(&config.data_dir) {
            Ok(s) => (Some(s), None),
            Err(e) => (None, Some(e.to_string())),
        };
        let default_conc = config.default_units.concentration;
        let default_vol = config.default_units.volume;
        Self {
            lang_input: config.language.clone(),
            config,
            tr,
            store,
            store_error,
            tab: Tab::Stock,
            show_settings_modal: false,
            ui_scale: 1.0,
            stock_compound: String::new(),
            stock_mw: String::new(),
            stock_conc: String::new(),
            stock_conc_unit: default_conc,
            stock_vol: String::new(),
            stock_vol_unit: default_vol,
            stock_solvent: String::new(),
            stock_result: None,
            stock_error: None,
            work_compound: String::new(),
            work_stock_conc: String::new(),
            work_stock_conc_unit: default_conc,
            work_target_conc: String::new(),
            work_target_conc_unit: default_conc,
            work_vol: String::new(),
            work_vol_unit: default_vol,
            work_solvent: String::new(),
            work_result: None,
            work_error: None,
            conv_value: String::new(),
            conv_kind: QuantityKind::Concentration,
            conv_from: "mM".to_string(),
            conv_to: "µM".to_string(),
            conv_result: None,
            history: Vec::new(),
            history_dirty: true,
            history_status: None,
        }
    }

    /// 프레임 경로의 번역 조회. `t`와 달리 호출마다 메모리를 남기지 않는다.
    fn text(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// 저장소에 추가하고 이력 탭을 갱신 대상으로 표시한다.
    fn append_history(&mut self, record: HistoryRecord) -> Option<String> {
        match &self.store {
            Some(store) => match store.append(&record) {
                Ok(()) => {
                    self.history_dirty = true;
                    None
                }
                Err(e) => Some(e.to_string()),
            },
            None => self.store_error.clone(),
        }
    }

    fn calculate_stock(&mut self) {
        self.stock_result = None;
        self.stock_error = None;
        let parsed = (
            format::validate_decimal_input(&self.stock_mw),
            format::validate_decimal_input(&self.stock_conc),
            format::validate_decimal_input(&self.stock_vol),
        );
        let (mw, conc, vol) = match parsed {
            (Ok(mw), Ok(conc), Ok(vol)) => (mw, conc, vol),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                self.stock_error = Some(e.to_string());
                return;
            }
        };
        if self.stock_compound.trim().is_empty() {
            self.stock_error = Some(format::InputError::Empty.to_string());
            return;
        }
        let input = StockSolutionInput {
            compound: self.stock_compound.trim().to_string(),
            molecular_weight_g_per_mol: mw,
            target_concentration: conc,
            concentration_unit: self.stock_conc_unit,
            target_volume: vol,
            volume_unit: self.stock_vol_unit,
            solvent: self.stock_solvent.trim().to_string(),
        };
        match compute_stock_solution(&input) {
            Ok(result) => {
                self.stock_result = Some(format!(
                    "{} {} ({})\n\n{}",
                    self.text(i18n::keys::RESULT_MASS, "Mass to weigh:"),
                    format_result_with_unit(result.mass_mg, "mg"),
                    format_result_with_unit(result.mass_g, "g"),
                    result.protocol,
                ));
                self.stock_error = self.append_history(HistoryRecord::stock(input, result));
            }
            Err(e) => self.stock_error = Some(e.to_string()),
        }
    }

    fn calculate_working(&mut self) {
        self.work_result = None;
        self.work_error = None;
        let parsed = (
            format::validate_decimal_input(&self.work_stock_conc),
            format::validate_decimal_input(&self.work_target_conc),
            format::validate_decimal_input(&self.work_vol),
        );
        let (stock_conc, target_conc, vol) = match parsed {
            (Ok(a), Ok(b), Ok(c)) => (a, b, c),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                self.work_error = Some(e.to_string());
                return;
            }
        };
        if self.work_compound.trim().is_empty() {
            self.work_error = Some(format::InputError::Empty.to_string());
            return;
        }
        let input = WorkingSolutionInput {
            compound: self.work_compound.trim().to_string(),
            stock_concentration: stock_conc,
            stock_concentration_unit: self.work_stock_conc_unit,
            target_concentration: target_conc,
            target_concentration_unit: self.work_target_conc_unit,
            target_volume: vol,
            volume_unit: self.work_vol_unit,
            solvent: self.work_solvent.trim().to_string(),
        };
        match compute_working_solution(&input) {
            Ok(result) => {
                let vol_symbol = result.volume_unit.symbol();
                self.work_result = Some(format!(
                    "{} {}x\n{} {}\n{} {}\n\n{}",
                    self.text(i18n::keys::RESULT_DILUTION_FACTOR, "Dilution factor:"),
                    format_number(result.dilution_factor),
                    self.text(i18n::keys::RESULT_STOCK_VOLUME, "Stock volume:"),
                    format_result_with_unit(result.stock_volume, vol_symbol),
                    self.text(i18n::keys::RESULT_SOLVENT_VOLUME, "Solvent volume:"),
                    format_result_with_unit(result.solvent_volume, vol_symbol),
                    result.protocol,
                ));
                self.work_error = self.append_history(HistoryRecord::working(input, result));
            }
            Err(e) => self.work_error = Some(e.to_string()),
        }
    }

    fn calculate_conversion(&mut self) {
        self.conv_result = None;
        let value = match format::validate_decimal_input(&self.conv_value) {
            Ok(v) => v,
            Err(e) => {
                self.conv_result = Some(e.to_string());
                return;
            }
        };
        match conversion::convert(self.conv_kind, value, &self.conv_from, &self.conv_to) {
            Ok(result) => {
                self.conv_result =
                    Some(format_result_with_unit(result, self.conv_to.trim()));
            }
            Err(e) => self.conv_result = Some(e.to_string()),
        }
    }

    fn reload_history(&mut self) {
        if let Some(store) = &self.store {
            match store.list_all() {
                Ok(records) => {
                    self.history = records;
                    self.history_dirty = false;
                }
                Err(e) => self.history_status = Some(e.to_string()),
            }
        }
    }

    fn reopen_store(&mut self) {
        match HistoryStore::open(&self.config.data_dir) {
            Ok(s) => {
                self.store = Some(s);
                self.store_error = None;
                self.history_dirty = true;
            }
            Err(e) => {
                self.store = None;
                self.store_error = Some(e.to_string());
            }
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Solution Prep Toolbox"));
                ui.separator();
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Stock,
                    txt("gui.tab.stock", "Stock solution"),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Working,
                    txt("gui.tab.working", "Working solution"),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Converter,
                    txt("gui.tab.converter", "Unit converter"),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::History,
                    txt("gui.tab.history", "History"),
                );
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut save_requested = false;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            for code in ["auto", "ko", "en"] {
                                ui.selectable_value(&mut self.lang_input, code.into(), code);
                            }
                        });
                    ui.separator();
                    ui.label(txt("gui.settings.data_dir", "Data directory"));
                    ui.text_edit_singleline(&mut self.config.data_dir);
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    if ui
                        .add(egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x"))
                        .changed()
                    {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    if ui.button(txt("gui.settings.save", "Save")).clicked() {
                        save_requested = true;
                    }
                });
            if save_requested {
                self.config.language = self.lang_input.clone();
                let lang = i18n::resolve_language(&self.config.language, None);
                self.tr = i18n::Translator::new_with_pack(&lang, None);
                if let Err(e) = self.config.save() {
                    self.history_status = Some(e.to_string());
                }
                self.reopen_store();
                self.show_settings_modal = false;
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.store_error {
                ui.colored_label(egui::Color32::RED, err);
                ui.separator();
            }
            match self.tab {
                Tab::Stock => self.stock_tab(ui, &txt),
                Tab::Working => self.working_tab(ui, &txt),
                Tab::Converter => self.converter_tab(ui, &txt),
                Tab::History => self.history_tab(ui, &txt),
            }
        });
    }
}

impl GuiApp {
    fn stock_tab(&mut self, ui: &mut egui::Ui, txt: &dyn Fn(&str, &str) -> String) {
        ui.heading(txt("gui.tab.stock", "Stock solution"));
        ui.label(txt(i18n::keys::HELP_STOCK, "Help: molecular weight [g/mol] plus target concentration/volume give the mass to weigh (mg, g) and a bench protocol."));
        ui.separator();

        egui::Grid::new("stock_grid").num_columns(3).show(ui, |ui| {
            ui.label(txt(i18n::keys::PROMPT_COMPOUND, "Compound name: "));
            ui.text_edit_singleline(&mut self.stock_compound);
            ui.end_row();

            ui.label(txt(i18n::keys::PROMPT_MOLECULAR_WEIGHT, "Molecular weight [g/mol]: "));
            ui.text_edit_singleline(&mut self.stock_mw);
            ui.end_row();

            ui.label(txt(
                i18n::keys::PROMPT_TARGET_CONCENTRATION,
                "Target concentration value: ",
            ));
            ui.text_edit_singleline(&mut self.stock_conc);
            concentration_unit_combo(ui, "stock_conc_unit", &mut self.stock_conc_unit);
            ui.end_row();

            ui.label(txt(i18n::keys::PROMPT_TARGET_VOLUME, "Target volume value: "));
            ui.text_edit_singleline(&mut self.stock_vol);
            volume_unit_combo(ui, "stock_vol_unit", &mut self.stock_vol_unit);
            ui.end_row();

            ui.label(txt(i18n::keys::PROMPT_SOLVENT, "Solvent (e.g. DMSO, enter to skip): "));
            ui.text_edit_singleline(&mut self.stock_solvent);
            ui.end_row();
        });

        if ui.button(txt("gui.button.calculate", "Calculate")).clicked() {
            self.calculate_stock();
        }
        if let Some(err) = &self.stock_error {
            ui.colored_label(egui::Color32::RED, err);
        }
        if let Some(result) = &self.stock_result {
            ui.separator();
            ui.monospace(result);
        }
    }

    fn working_tab(&mut self, ui: &mut egui::Ui, txt: &dyn Fn(&str, &str) -> String) {
        ui.heading(txt("gui.tab.working", "Working solution"));
        ui.label(txt(i18n::keys::HELP_WORKING, "Help: stock and target concentration units may differ. C1V1=C2V2 gives the stock volume to pipette."));
        ui.separator();

        egui::Grid::new("working_grid").num_columns(3).show(ui, |ui| {
            ui.label(txt(i18n::keys::PROMPT_COMPOUND, "Compound name: "));
            ui.text_edit_singleline(&mut self.work_compound);
            ui.end_row();

            ui.label(txt(
                i18n::keys::PROMPT_STOCK_CONCENTRATION,
                "Stock concentration value: ",
            ));
            ui.text_edit_singleline(&mut self.work_stock_conc);
            concentration_unit_combo(ui, "work_stock_unit", &mut self.work_stock_conc_unit);
            ui.end_row();

            ui.label(txt(
                i18n::keys::PROMPT_TARGET_CONCENTRATION,
                "Target concentration value: ",
            ));
            ui.text_edit_singleline(&mut self.work_target_conc);
            concentration_unit_combo(ui, "work_target_unit", &mut self.work_target_conc_unit);
            ui.end_row();

            ui.label(txt(i18n::keys::PROMPT_TARGET_VOLUME, "Target volume value: "));
            ui.text_edit_singleline(&mut self.work_vol);
            volume_unit_combo(ui, "work_vol_unit", &mut self.work_vol_unit);
            ui.end_row();

            ui.label(txt(i18n::keys::PROMPT_SOLVENT, "Solvent (e.g. DMSO, enter to skip): "));
            ui.text_edit_singleline(&mut self.work_solvent);
            ui.end_row();
        });

        if ui.button(txt("gui.button.calculate", "Calculate")).clicked() {
            self.calculate_working();
        }
        if let Some(err) = &self.work_error {
            ui.colored_label(egui::Color32::RED, err);
        }
        if let Some(result) = &self.work_result {
            ui.separator();
            ui.monospace(result);
        }
    }

    fn converter_tab(&mut self, ui: &mut egui::Ui, txt: &dyn Fn(&str, &str) -> String) {
        ui.heading(txt("gui.tab.converter", "Unit converter"));
        ui.label(txt(i18n::keys::HELP_UNIT_CONVERSION, "Help: choose quantity, enter value, then from/to units (M/mM/µM/nM, L/mL/µL, g/mg/µg)."));
        ui.separator();

        ui.horizontal(|ui| {
            for (label, kind) in [
                ("Concentration", QuantityKind::Concentration),
                ("Volume", QuantityKind::Volume),
                ("Mass", QuantityKind::Mass),
            ] {
                ui.selectable_value(&mut self.conv_kind, kind, label);
            }
        });
        egui::Grid::new("conv_grid").num_columns(2).show(ui, |ui| {
            ui.label(txt(i18n::keys::UNIT_CONVERSION_PROMPT_VALUE, "Value: "));
            ui.text_edit_singleline(&mut self.conv_value);
            ui.end_row();
            ui.label(txt(
                i18n::keys::UNIT_CONVERSION_PROMPT_FROM_UNIT,
                "From unit (ex: mM, mL, mg): ",
            ));
            ui.text_edit_singleline(&mut self.conv_from);
            ui.end_row();
            ui.label(txt(
                i18n::keys::UNIT_CONVERSION_PROMPT_TO_UNIT,
                "To unit (ex: µM, µL, g): ",
            ));
            ui.text_edit_singleline(&mut self.conv_to);
            ui.end_row();
        });
        if ui.button(txt("gui.button.calculate", "Calculate")).clicked() {
            self.calculate_conversion();
        }
        if let Some(result) = &self.conv_result {
            ui.separator();
            ui.monospace(format!(
                "{} {result}",
                txt(i18n::keys::UNIT_CONVERSION_RESULT, "Result:")
            ));
        }
    }

    fn history_tab(&mut self, ui: &mut egui::Ui, txt: &dyn Fn(&str, &str) -> String) {
        ui.heading(txt("gui.tab.history", "History"));
        ui.label(txt(i18n::keys::HELP_HISTORY, "Help: every successful calculation is appended to the JSON history file. Clearing leaves a backup."));
        ui.separator();

        if self.history_dirty {
            self.reload_history();
        }

        ui.horizontal(|ui| {
            if ui.button(txt("gui.button.refresh", "Refresh")).clicked() {
                self.history_dirty = true;
            }
            if ui
                .button(txt("gui.button.clear", "Clear (with backup)"))
                .clicked()
            {
                if let Some(store) = &self.store {
                    match store.clear() {
                        Ok(backup) => {
                            self.history_status = backup.map(|p| {
                                format!(
                                    "{} {}",
                                    self.text(i18n::keys::HISTORY_BACKUP_SAVED, "Backup file:"),
                                    p.display()
                                )
                            });
                            self.history_dirty = true;
                        }
                        Err(e) => self.history_status = Some(e.to_string()),
                    }
                }
            }
            if ui.button(txt("gui.button.export", "Export...")).clicked() {
                self.export_history();
            }
        });
        if let Some(status) = &self.history_status {
            ui.label(status);
        }
        ui.separator();

        if self.history.is_empty() {
            ui.label(txt(i18n::keys::HISTORY_EMPTY, "No saved calculations."));
            return;
        }
        egui::ScrollArea::vertical().show(ui, |ui| {
            for record in &self.history {
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
                ui.horizontal(|ui| {
                    ui.monospace(&record.timestamp);
                    ui.label(record.compound());
                    ui.label(summary);
                });
                ui.separator();
            }
        });
    }

    /// 이력 JSON 파일을 사용자가 고른 경로로 복사한다.
    fn export_history(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        let picked = FileDialog::new()
            .set_file_name("calculation_history.json")
            .add_filter("JSON", &["json"])
            .save_file();
        if let Some(target) = picked {
            self.history_status = match fs::copy(store.path(), &target) {
                Ok(_) => Some(target.display().to_string()),
                Err(e) => Some(e.to_string()),
            };
        }
    }
}

fn concentration_unit_combo(ui: &mut egui::Ui, id: &str, value: &mut ConcentrationUnit) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.symbol())
        .show_ui(ui, |ui| {
            for unit in ConcentrationUnit::ALL {
                ui.selectable_value(value, unit, unit.symbol());
            }
        });
}

fn volume_unit_combo(ui: &mut egui::Ui, id: &str, value: &mut VolumeUnit) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.symbol())
        .show_ui(ui, |ui| {
            for unit in VolumeUnit::ALL {
                ui.selectable_value(value, unit, unit.symbol());
            }
        });
}
