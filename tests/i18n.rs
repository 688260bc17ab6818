//! 언어팩/번역기 테스트.
use solution_prep_toolbox::i18n::{self, keys, Translator};

// GUI가 매 프레임 lookup으로 조회하는 키들. 팩에 없으면 영어 기본값으로
// 조용히 떨어지므로, 누락을 여기서 잡는다.
const FRAME_LOOP_KEYS: &[&str] = &[
    keys::PROMPT_COMPOUND,
    keys::PROMPT_MOLECULAR_WEIGHT,
    keys::PROMPT_TARGET_CONCENTRATION,
    keys::PROMPT_TARGET_VOLUME,
    keys::PROMPT_SOLVENT,
    keys::PROMPT_STOCK_CONCENTRATION,
    keys::RESULT_MASS,
    keys::RESULT_DILUTION_FACTOR,
    keys::RESULT_STOCK_VOLUME,
    keys::RESULT_SOLVENT_VOLUME,
    keys::UNIT_CONVERSION_PROMPT_VALUE,
    keys::UNIT_CONVERSION_PROMPT_FROM_UNIT,
    keys::UNIT_CONVERSION_PROMPT_TO_UNIT,
    keys::UNIT_CONVERSION_RESULT,
    keys::HISTORY_EMPTY,
    keys::HISTORY_BACKUP_SAVED,
    keys::HELP_STOCK,
    keys::HELP_WORKING,
    keys::HELP_UNIT_CONVERSION,
    keys::HELP_HISTORY,
    "gui.nav.app_title",
    "gui.tab.stock",
    "gui.tab.working",
    "gui.tab.converter",
    "gui.tab.history",
    "gui.button.calculate",
    "gui.button.refresh",
    "gui.button.clear",
    "gui.button.export",
    "gui.settings.title",
    "gui.settings.lang",
    "gui.settings.data_dir",
    "gui.settings.save",
];

#[test]
fn built_in_packs_serve_every_frame_loop_key_via_lookup() {
    for lang in ["en-us", "ko-kr"] {
        let tr = Translator::new_with_pack(lang, None);
        for key in FRAME_LOOP_KEYS {
            assert!(tr.lookup(key).is_some(), "{lang}: missing pack entry {key}");
        }
    }
}

#[test]
fn lookup_miss_returns_none_for_caller_fallback() {
    let tr = Translator::new_with_pack("en-us", None);
    assert!(tr.lookup("gui.no_such_key").is_none());
}

#[test]
fn built_in_tables_translate_every_key_constant() {
    let all_keys = [
        keys::ERROR_PREFIX,
        keys::APP_EXIT,
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_STOCK,
        keys::MAIN_MENU_WORKING,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_HISTORY,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
        keys::PROMPT_MENU_SELECT,
        keys::INVALID_SELECTION_RETRY,
        keys::PROMPT_SELECT,
        keys::STOCK_HEADING,
        keys::PROMPT_COMPOUND,
        keys::PROMPT_MOLECULAR_WEIGHT,
        keys::PROMPT_TARGET_CONCENTRATION,
        keys::PROMPT_TARGET_VOLUME,
        keys::PROMPT_SOLVENT,
        keys::RESULT_MASS,
        keys::RESULT_PROTOCOL,
        keys::WORKING_HEADING,
        keys::PROMPT_STOCK_CONCENTRATION,
        keys::RESULT_DILUTION_FACTOR,
        keys::RESULT_STOCK_VOLUME,
        keys::RESULT_SOLVENT_VOLUME,
        keys::CONCENTRATION_UNIT_OPTIONS,
        keys::VOLUME_UNIT_OPTIONS,
        keys::UNIT_CONVERSION_HEADING,
        keys::UNIT_CONVERSION_OPTIONS,
        keys::UNIT_CONVERSION_PROMPT_KIND,
        keys::UNIT_CONVERSION_PROMPT_VALUE,
        keys::UNIT_CONVERSION_PROMPT_FROM_UNIT,
        keys::UNIT_CONVERSION_PROMPT_TO_UNIT,
        keys::UNIT_CONVERSION_RESULT,
        keys::UNIT_CONVERSION_UNSUPPORTED,
        keys::HISTORY_HEADING,
        keys::HISTORY_EMPTY,
        keys::HISTORY_COUNT,
        keys::HISTORY_OPTIONS,
        keys::HISTORY_CLEARED,
        keys::HISTORY_BACKUP_SAVED,
        keys::HISTORY_SAVED,
        keys::SETTINGS_HEADING,
        keys::SETTINGS_CURRENT_UNITS,
        keys::SETTINGS_CONCENTRATION_OPTIONS,
        keys::SETTINGS_VOLUME_OPTIONS,
        keys::SETTINGS_PROMPT_CHANGE,
        keys::SETTINGS_INVALID,
        keys::SETTINGS_SAVED,
        keys::HELP_STOCK,
        keys::HELP_WORKING,
        keys::HELP_UNIT_CONVERSION,
        keys::HELP_HISTORY,
        keys::HELP_SETTINGS,
    ];
    for key in all_keys {
        assert_ne!(
            Translator::new("ko").t(key),
            "[missing translation]",
            "ko table misses {key}"
        );
        assert_ne!(
            Translator::new("en").t(key),
            "[missing translation]",
            "en fallback misses {key}"
        );
    }
}

#[test]
fn resolve_language_prefers_cli_then_config() {
    assert_eq!(i18n::resolve_language("ko", Some("en")), "ko");
    assert_eq!(i18n::resolve_language("auto", Some("en")), "en");
    assert_eq!(i18n::resolve_language("auto", Some("ko-kr")), "ko-kr");
}
