use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use chrono::{DateTime, Local};
use dialoguer::{Confirm, Input, Select};
use crate::action::cli::run_conversion;
use crate::config::ports::{AppConfig, AssumeYesOverwrite, ConfigPort, OverwritePort};
use crate::models::conversion::Operation;
use crate::service::config_service::ConfigService;
use crate::service::validation::file_exists;
use crate::utils::utils::setup_logging;

/// 互動模式：重複進行轉換直到使用者選擇離開，返回最後一次轉換的結束碼
pub fn process_interactive_mode() -> io::Result<i32> {
    setup_logging("warn")?;
    println!("=== 文字 / 二進位轉換（互動模式） ===");

    let mut last_input = String::new();
    let mut last_output = String::new();
    let mut confirmed: Option<ConfirmedOutput> = None;
    let mut exit_code = 0;

    while let Some(operation) = get_operation()? {
        let input = get_input_path(&last_input)?;
        let output = get_output_path(&last_output)?;
        last_input = input.clone();
        last_output = output.clone();

        // 選擇輸出檔時就先確認覆寫，並記住檔案狀態，避免轉換時重複詢問
        if file_exists(Path::new(&output)) && !is_confirmed(confirmed.as_ref(), Path::new(&output)) {
            if PromptOverwrite.confirm_overwrite(Path::new(&output))? {
                confirmed = ConfirmedOutput::capture(Path::new(&output));
            } else {
                println!("請選擇其他輸出檔案。");
                continue;
            }
        }

        let adapter = InteractiveConfigAdapter::new(input, output.clone(), operation);
        let config = ConfigService::new(Box::new(adapter)).get_config()?;

        let overwrite_port: Box<dyn OverwritePort> = if is_confirmed(confirmed.as_ref(), Path::new(&output)) {
            Box::new(AssumeYesOverwrite)
        } else {
            Box::new(PromptOverwrite)
        };
        let (code, message) = run_conversion(&config, overwrite_port)?;
        println!("{}", message);
        exit_code = code;

        // 產生了新的輸出檔才清除確認紀錄；預檢失敗時檔案未變動，保留紀錄
        if file_exists(Path::new(&output)) && !is_confirmed(confirmed.as_ref(), Path::new(&output)) {
            confirmed = None;
        }
    }

    Ok(exit_code)
}

/// 已同意覆寫的輸出檔，以大小與修改時間辨識磁碟上是否仍是同一份
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmedOutput {
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
}

impl ConfirmedOutput {
    pub fn capture(path: &Path) -> Option<Self> {
        let metadata = fs::metadata(path).ok()?;
        Some(ConfirmedOutput {
            path: path.to_path_buf(),
            size: metadata.len(),
            modified: metadata.modified().ok()?,
        })
    }

    pub fn matches_disk(&self, path: &Path) -> bool {
        self.path == path && ConfirmedOutput::capture(path).as_ref() == Some(self)
    }
}

fn is_confirmed(confirmed: Option<&ConfirmedOutput>, path: &Path) -> bool {
    confirmed.is_some_and(|c| c.matches_disk(path))
}

/// 以 dialoguer 詢問是否覆寫
pub struct PromptOverwrite;

impl OverwritePort for PromptOverwrite {
    fn confirm_overwrite(&self, output: &Path) -> io::Result<bool> {
        let modified = fs::metadata(output)
            .and_then(|m| m.modified())
            .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| "未知".to_string());
        Confirm::new()
            .with_prompt(format!(
                "輸出檔案 {} 已存在（最後修改：{}），是否覆寫？",
                output.display(),
                modified
            ))
            .default(false)
            .interact()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("覆寫確認失敗: {}", e)))
    }
}

/// 選擇轉換方向，選擇離開時返回 None
pub fn get_operation() -> io::Result<Option<Operation>> {
    let choice = Select::new()
        .with_prompt("選擇操作（使用方向鍵選擇，按 Enter 確認）")
        .items(&["Encode - 文字轉二進位", "Decode - 二進位轉文字", "離開"])
        .default(0)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("操作選擇失敗: {}", e)))?;
    Ok(match choice {
        0 => Some(Operation::Encode),
        1 => Some(Operation::Decode),
        _ => None,
    })
}

pub fn get_input_path(previous: &str) -> io::Result<String> {
    let mut input = Input::<String>::new().with_prompt("請輸入輸入檔案路徑（例如：./myfile.txt）");
    if !previous.is_empty() {
        input = input.default(previous.to_string());
    }
    input
        .validate_with(|input: &String| -> Result<(), String> {
            if file_exists(Path::new(input)) { Ok(()) } else { Err(format!("檔案 '{}' 不存在", input)) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn get_output_path(previous: &str) -> io::Result<String> {
    let mut output = Input::<String>::new().with_prompt("請輸入輸出檔案路徑（例如：./output.txt）");
    if !previous.is_empty() {
        output = output.default(previous.to_string());
    }
    output
        .validate_with(|output: &String| -> Result<(), String> {
            if output.trim().is_empty() { Err("輸出路徑不可為空".to_string()) } else { Ok(()) }
        })
        .interact_text()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

// 互動配置適配器
pub struct InteractiveConfigAdapter {
    input: String,
    output: String,
    operation: Operation,
}

impl InteractiveConfigAdapter {
    pub fn new(input: String, output: String, operation: Operation) -> Self {
        InteractiveConfigAdapter { input, output, operation }
    }
}

impl ConfigPort for InteractiveConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            operation: self.operation,
            assume_yes: false,
            parallel: true,
            no_progress: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn confirmation_is_forgotten_once_file_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "first").unwrap();

        let confirmed = ConfirmedOutput::capture(&path).unwrap();
        assert!(confirmed.matches_disk(&path));

        fs::write(&path, "a longer second version").unwrap();
        assert!(!confirmed.matches_disk(&path));
    }

    #[test]
    fn confirmation_is_tied_to_one_path() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.txt");
        let second = dir.path().join("b.txt");
        fs::write(&first, "same").unwrap();
        fs::write(&second, "same").unwrap();

        let confirmed = ConfirmedOutput::capture(&first);
        assert!(is_confirmed(confirmed.as_ref(), &first));
        assert!(!is_confirmed(confirmed.as_ref(), &second));
        assert!(!is_confirmed(None, &first));
    }

    #[test]
    fn interactive_config_uses_parallel_defaults() {
        let config = InteractiveConfigAdapter::new("in.txt".into(), "out.txt".into(), Operation::Decode)
            .get_config()
            .unwrap();
        assert_eq!(config.operation, Operation::Decode);
        assert!(config.parallel);
        assert!(!config.assume_yes);
    }
}
