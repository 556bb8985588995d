use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use log::{debug, warn};
use crate::service::error::ConversionError;
use crate::service::line_reader::TextLines;

const BOM: &str = "\u{FEFF}";

/// 轉換前的檢查與清理，依序執行，遇到第一個錯誤即返回
///
/// 1. 輸入檔必須存在且為一般檔案
/// 2. 輸入檔不可為空（見 [`is_empty_file`]）
/// 3. 輸入與輸出的正規路徑不可相同
/// 4. 若輸出檔已存在則刪除
///
/// 失敗時輸出檔不會被建立或修改。
pub fn run_preliminary_checks(input: &Path, output: &Path) -> Result<(), ConversionError> {
    if !input_file_exists(input)? {
        warn!("輸入檔案不存在：{}", input.display());
        return Err(ConversionError::InputMissing);
    }

    if is_empty_file(input)? {
        warn!("輸入檔案為空：{}", input.display());
        return Err(ConversionError::InputEmpty);
    }

    if same_canonical_path(input, output).map_err(ConversionError::SameFileCheck)? {
        warn!("輸入與輸出為同一檔案：{}", input.display());
        return Err(ConversionError::SameFile);
    }

    clear_output(output, |path| fs::remove_file(path))
}

/// 路徑存在且不是目錄時返回 true
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).map(|m| !m.is_dir()).unwrap_or(false)
}

fn input_file_exists(path: &Path) -> Result<bool, ConversionError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(!metadata.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ConversionError::InputExistsCheck(e)),
    }
}

/// 判斷檔案是否「語意上為空」
///
/// 只接受以下情況：完全沒有內容、只有一個行尾（`\n`、`\r\n` 或 `\r`）、只有 BOM、或 BOM 加一個行尾。
/// 其他只含空白行的檔案不算空。
pub fn is_empty_file(path: &Path) -> Result<bool, ConversionError> {
    let file = File::open(path).map_err(map_probe_error)?;
    let mut lines = TextLines::new(BufReader::new(file));

    let first = match lines.next() {
        None => return Ok(true),
        Some(line) => line.map_err(map_probe_error)?,
    };
    if lines.next().transpose().map_err(map_probe_error)?.is_some() {
        return Ok(false);
    }

    debug!("輸入檔案只有一行，長度 {} 位元組", first.len());
    Ok(first.is_empty() || first == BOM)
}

fn map_probe_error(err: io::Error) -> ConversionError {
    match err.kind() {
        io::ErrorKind::NotFound => ConversionError::InputVanished(err),
        io::ErrorKind::InvalidData => ConversionError::InputNotUtf8,
        _ => ConversionError::EmptinessCheck(err),
    }
}

/// 比較兩個路徑解析後的絕對正規形式；輸出檔不存在也可比較
pub fn same_canonical_path(first: &Path, second: &Path) -> io::Result<bool> {
    let first = canonical_path(first)?;
    let second = canonical_path(second)?;
    debug!("比較正規路徑：{} / {}", first.display(), second.display());
    Ok(paths_equal(&first, &second))
}

fn canonical_path(path: &Path) -> io::Result<PathBuf> {
    if path.exists() {
        return fs::canonicalize(path);
    }
    let file_name = match path.file_name() {
        Some(name) => name,
        None => return std::path::absolute(path),
    };
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => std::env::current_dir()?,
    };
    match fs::canonicalize(&parent) {
        Ok(parent) => Ok(parent.join(file_name)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => std::path::absolute(path),
        Err(e) => Err(e),
    }
}

#[cfg(any(windows, target_os = "macos"))]
fn paths_equal(first: &Path, second: &Path) -> bool {
    first.to_string_lossy().to_lowercase() == second.to_string_lossy().to_lowercase()
}

#[cfg(not(any(windows, target_os = "macos")))]
fn paths_equal(first: &Path, second: &Path) -> bool {
    first == second
}

/// 輸出檔已存在時以 `remove` 刪除，一律從空檔開始寫
fn clear_output<F>(path: &Path, remove: F) -> Result<(), ConversionError>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    if file_exists(path) {
        debug!("刪除既有輸出檔案：{}", path.display());
        remove(path).map_err(ConversionError::DeleteOutput)?;
    }
    Ok(())
}
