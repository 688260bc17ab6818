use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_STOCK: &str = "main_menu.stock";
    pub const MAIN_MENU_WORKING: &str = "main_menu.working";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_HISTORY: &str = "main_menu.history";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const PROMPT_SELECT: &str = "prompt.select";

    pub const STOCK_HEADING: &str = "stock.heading";
    pub const PROMPT_COMPOUND: &str = "prompt.compound";
    pub const PROMPT_MOLECULAR_WEIGHT: &str = "prompt.molecular_weight";
    pub const PROMPT_TARGET_CONCENTRATION: &str = "prompt.target_concentration";
    pub const PROMPT_TARGET_VOLUME: &str = "prompt.target_volume";
    pub const PROMPT_SOLVENT: &str = "prompt.solvent";
    pub const RESULT_MASS: &str = "result.mass";
    pub const RESULT_PROTOCOL: &str = "result.protocol";

    pub const WORKING_HEADING: &str = "working.heading";
    pub const PROMPT_STOCK_CONCENTRATION: &str = "prompt.stock_concentration";
    pub const RESULT_DILUTION_FACTOR: &str = "result.dilution_factor";
    pub const RESULT_STOCK_VOLUME: &str = "result.stock_volume";
    pub const RESULT_SOLVENT_VOLUME: &str = "result.solvent_volume";

    pub const CONCENTRATION_UNIT_OPTIONS: &str = "unit.concentration_options";
    pub const VOLUME_UNIT_OPTIONS: &str = "unit.volume_options";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const HISTORY_HEADING: &str = "history.heading";
    pub const HISTORY_EMPTY: &str = "history.empty";
    pub const HISTORY_COUNT: &str = "history.count";
    pub const HISTORY_OPTIONS: &str = "history.options";
    pub const HISTORY_CLEARED: &str = "history.cleared";
    pub const HISTORY_BACKUP_SAVED: &str = "history.backup_saved";
    pub const HISTORY_SAVED: &str = "history.saved";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNITS: &str = "settings.current_units";
    pub const SETTINGS_CONCENTRATION_OPTIONS: &str = "settings.concentration_options";
    pub const SETTINGS_VOLUME_OPTIONS: &str = "settings.volume_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const HELP_STOCK: &str = "help.stock";
    pub const HELP_WORKING: &str = "help.working";
    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_HISTORY: &str = "help.history";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Solution Prep Toolbox ===",
        MAIN_MENU_STOCK => "1) Stock 용액 (분말 칭량)",
        MAIN_MENU_WORKING => "2) Working 용액 (희석)",
        MAIN_MENU_UNIT_CONVERSION => "3) 단위 변환기",
        MAIN_MENU_HISTORY => "4) 계산 이력",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROMPT_SELECT => "선택: ",
        STOCK_HEADING => "\n-- Stock 용액 (분말 → 용액) --",
        PROMPT_COMPOUND => "화합물 이름: ",
        PROMPT_MOLECULAR_WEIGHT => "분자량 [g/mol]: ",
        PROMPT_TARGET_CONCENTRATION => "목표 농도 값: ",
        PROMPT_TARGET_VOLUME => "목표 체적 값: ",
        PROMPT_SOLVENT => "용매 (예: DMSO, 없으면 엔터): ",
        RESULT_MASS => "칭량 질량:",
        RESULT_PROTOCOL => "조제 절차:",
        WORKING_HEADING => "\n-- Working 용액 (stock 희석) --",
        PROMPT_STOCK_CONCENTRATION => "Stock 농도 값: ",
        RESULT_DILUTION_FACTOR => "희석 배수:",
        RESULT_STOCK_VOLUME => "Stock 체적:",
        RESULT_SOLVENT_VOLUME => "용매 체적:",
        CONCENTRATION_UNIT_OPTIONS => "농도 단위: 1=M 2=mM 3=µM 4=nM",
        VOLUME_UNIT_OPTIONS => "체적 단위: 1=L 2=mL 3=µL",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 농도  2) 체적  3) 질량",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: mM, mL, mg): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: µM, µL, g): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        HISTORY_HEADING => "\n-- 계산 이력 (최신순) --",
        HISTORY_EMPTY => "저장된 이력이 없습니다.",
        HISTORY_COUNT => "저장된 건수:",
        HISTORY_OPTIONS => "1) 전체 보기  2) 이력 비우기(백업 후)  0) 돌아가기",
        HISTORY_CLEARED => "이력을 비웠습니다.",
        HISTORY_BACKUP_SAVED => "백업 파일:",
        HISTORY_SAVED => "이력에 저장했습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNITS => "현재 기본 단위:",
        SETTINGS_CONCENTRATION_OPTIONS => "기본 농도 단위: 1=M 2=mM 3=µM 4=nM",
        SETTINGS_VOLUME_OPTIONS => "기본 체적 단위: 1=L 2=mL 3=µL",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        HELP_STOCK => "도움말: 분자량[g/mol], 목표 농도/체적 입력 → 칭량 질량(mg, g)과 조제 절차를 계산합니다.",
        HELP_WORKING => "도움말: stock 농도와 목표 농도 단위가 달라도 됩니다. C1V1=C2V2로 취할 stock 체적을 계산합니다.",
        HELP_UNIT_CONVERSION => "도움말: 물리량 번호 → 값 → 입력/변환 단위 순으로 입력 (예: M/mM/µM/nM, L/mL/µL, g/mg/µg).",
        HELP_HISTORY => "도움말: 모든 성공한 계산은 JSON 이력 파일에 자동 저장됩니다. 비우기 전 백업을 남깁니다.",
        HELP_SETTINGS => "도움말: 계산기 기본 농도/체적 단위를 바꿉니다. config.toml에 저장됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Solution Prep Toolbox ===",
        MAIN_MENU_STOCK => "1) Stock solution (weigh powder)",
        MAIN_MENU_WORKING => "2) Working solution (dilution)",
        MAIN_MENU_UNIT_CONVERSION => "3) Unit converter",
        MAIN_MENU_HISTORY => "4) Calculation history",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        PROMPT_SELECT => "Select: ",
        STOCK_HEADING => "\n-- Stock solution (powder to solution) --",
        PROMPT_COMPOUND => "Compound name: ",
        PROMPT_MOLECULAR_WEIGHT => "Molecular weight [g/mol]: ",
        PROMPT_TARGET_CONCENTRATION => "Target concentration value: ",
        PROMPT_TARGET_VOLUME => "Target volume value: ",
        PROMPT_SOLVENT => "Solvent (e.g. DMSO, enter to skip): ",
        RESULT_MASS => "Mass to weigh:",
        RESULT_PROTOCOL => "Protocol:",
        WORKING_HEADING => "\n-- Working solution (dilute stock) --",
        PROMPT_STOCK_CONCENTRATION => "Stock concentration value: ",
        RESULT_DILUTION_FACTOR => "Dilution factor:",
        RESULT_STOCK_VOLUME => "Stock volume:",
        RESULT_SOLVENT_VOLUME => "Solvent volume:",
        CONCENTRATION_UNIT_OPTIONS => "Concentration units: 1=M 2=mM 3=µM 4=nM",
        VOLUME_UNIT_OPTIONS => "Volume units: 1=L 2=mL 3=µL",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Concentration  2) Volume  3) Mass",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: mM, mL, mg): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: µM, µL, g): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        HISTORY_HEADING => "\n-- Calculation history (newest first) --",
        HISTORY_EMPTY => "No saved calculations.",
        HISTORY_COUNT => "Saved entries:",
        HISTORY_OPTIONS => "1) Show all  2) Clear (with backup)  0) Back",
        HISTORY_CLEARED => "History cleared.",
        HISTORY_BACKUP_SAVED => "Backup file:",
        HISTORY_SAVED => "Saved to history.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNITS => "Current default units:",
        SETTINGS_CONCENTRATION_OPTIONS => "Default concentration unit: 1=M 2=mM 3=µM 4=nM",
        SETTINGS_VOLUME_OPTIONS => "Default volume unit: 1=L 2=mL 3=µL",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        HELP_STOCK => "Help: molecular weight [g/mol] plus target concentration/volume give the mass to weigh (mg, g) and a bench protocol.",
        HELP_WORKING => "Help: stock and target concentration units may differ. C1V1=C2V2 gives the stock volume to pipette.",
        HELP_UNIT_CONVERSION => "Help: choose quantity, enter value, then from/to units (M/mM/µM/nM, L/mL/µL, g/mg/µg).",
        HELP_HISTORY => "Help: every successful calculation is appended to the JSON history file. Clearing leaves a backup.",
        HELP_SETTINGS => "Help: changes the calculators' default concentration/volume units. Stored in config.toml.",
        _ => return None,
    })
}
