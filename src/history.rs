//! 계산 이력 저장소.
//!
//! `data/calculation_history.json` 한 파일에 JSON 배열로 누적 저장한다.
//! 단일 프로세스/단일 사용자 가정이므로 파일 잠금은 두지 않고, 전체
//! 배열을 임시 파일에 쓴 뒤 rename으로 교체해 부분 쓰기만 방지한다.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::solution::{
    StockSolutionInput, StockSolutionResult, WorkingSolutionInput, WorkingSolutionResult,
};

pub const HISTORY_FILE_NAME: &str = "calculation_history.json";

/// 이력 저장/조회 시 발생 가능한 오류.
#[derive(Debug)]
pub enum HistoryError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화 오류 (쓰기 경로에서만 발생)
    Serialize(serde_json::Error),
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "이력 파일 입출력 오류: {e}"),
            HistoryError::Serialize(e) => write!(f, "이력 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<std::io::Error> for HistoryError {
    fn from(value: std::io::Error) -> Self {
        HistoryError::Io(value)
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(value: serde_json::Error) -> Self {
        HistoryError::Serialize(value)
    }
}

/// 이력 항목이 어느 계산기에서 나왔는지 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculatorKind {
    #[serde(rename = "stock")]
    Stock,
    #[serde(rename = "working")]
    Working,
}

/// 계산기 종류별 입력. 필드 구성이 서로 달라 untagged로도 복원 가능하다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordInput {
    Stock(StockSolutionInput),
    Working(WorkingSolutionInput),
}

/// 계산기 종류별 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordResult {
    Stock(StockSolutionResult),
    Working(WorkingSolutionResult),
}

/// 저장되는 이력 한 건. 생성 후 수정/삭제되지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// ISO-8601 로컬 타임스탬프
    pub timestamp: String,
    pub calculator_type: CalculatorKind,
    pub input: RecordInput,
    pub result: RecordResult,
}

impl HistoryRecord {
    /// stock 계산 결과로부터 이력 항목을 만든다.
    pub fn stock(input: StockSolutionInput, result: StockSolutionResult) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339(),
            calculator_type: CalculatorKind::Stock,
            input: RecordInput::Stock(input),
            result: RecordResult::Stock(result),
        }
    }

    /// working(희석) 계산 결과로부터 이력 항목을 만든다.
    pub fn working(input: WorkingSolutionInput, result: WorkingSolutionResult) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339(),
            calculator_type: CalculatorKind::Working,
            input: RecordInput::Working(input),
            result: RecordResult::Working(result),
        }
    }

    /// 이력 목록 표시에 쓰는 화합물 이름.
    pub fn compound(&self) -> &str {
        match &self.input {
            RecordInput::Stock(i) => &i.compound,
            RecordInput::Working(i) => &i.compound,
        }
    }
}

/// 이력 파일을 소유하는 저장소. 시작 시 한 번 만들어 참조로 넘긴다.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    data_dir: PathBuf,
    history_file: PathBuf,
}

impl HistoryStore {
    /// 데이터 디렉터리를 만들고 (없으면) 빈 이력 파일을 초기화한다.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        let history_file = data_dir.join(HISTORY_FILE_NAME);
        let store = Self {
            data_dir,
            history_file,
        };
        if !store.history_file.exists() {
            store.save(&[])?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.history_file
    }

    /// 이력 한 건을 맨 뒤에 추가한다.
    pub fn append(&self, record: &HistoryRecord) -> Result<(), HistoryError> {
        let mut records = self.load()?;
        records.push(record.clone());
        self.save(&records)
    }

    /// 전체 이력을 최신순으로 반환한다.
    pub fn list_all(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let mut records = self.load()?;
        records.reverse();
        Ok(records)
    }

    /// 저장된 이력 건수.
    pub fn count(&self) -> Result<usize, HistoryError> {
        Ok(self.load()?.len())
    }

    /// 이력을 비운다. 항목이 있었다면 백업 파일 경로를 돌려준다.
    pub fn clear(&self) -> Result<Option<PathBuf>, HistoryError> {
        let records = self.load()?;
        let backup = if records.is_empty() {
            None
        } else {
            let stamp = Local::now().format("%Y%m%d_%H%M%S");
            let backup_file = self.data_dir.join(format!("history_backup_{stamp}.json"));
            let json = serde_json::to_string_pretty(&records)?;
            fs::write(&backup_file, json)?;
            Some(backup_file)
        };
        self.save(&[])?;
        Ok(backup)
    }

    /// 이력 파일을 읽는다. 파일이 없으면 빈 목록, 내용이 손상되었으면
    /// 빈 목록으로 간주한다 (입출력 오류는 그대로 전파).
    fn load(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let content = match fs::read_to_string(&self.history_file) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(HistoryError::Io(e)),
        };
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    /// 전체 배열을 임시 파일에 쓴 뒤 rename으로 교체한다.
    fn save(&self, records: &[HistoryRecord]) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(records)?;
        let tmp = self.history_file.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.history_file)?;
        Ok(())
    }
}
