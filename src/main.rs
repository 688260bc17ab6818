use clap::Parser;

use solution_prep_toolbox::{app, config, history::HistoryStore, i18n};

/// 실험실 용액 조제 계산기 (CLI).
#[derive(Debug, Parser)]
#[command(name = "solution_prep_toolbox_cli")]
struct Cli {
    /// 언어 (auto/ko/ko-kr/en/en-us)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 이력 저장 디렉터리 (이번 실행에만 적용, config.toml은 바꾸지 않음)
    #[arg(long)]
    data_dir: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);
    let store = HistoryStore::open(config::effective_data_dir(&cfg, cli.data_dir.as_deref()))?;
    app::run(&mut cfg, &store, &tr)?;
    Ok(())
}
