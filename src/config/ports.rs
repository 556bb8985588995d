use std::io;
use std::path::Path;
use crate::models::conversion::Operation;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: String,
    pub output: String,
    pub operation: Operation,
    pub assume_yes: bool,
    pub parallel: bool,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 覆寫確認的 Port，轉換核心本身不會詢問，一律刪除重建輸出檔
pub trait OverwritePort: Send + Sync {
    fn confirm_overwrite(&self, output: &Path) -> io::Result<bool>;
}

/// --yes：直接覆寫
pub struct AssumeYesOverwrite;

impl OverwritePort for AssumeYesOverwrite {
    fn confirm_overwrite(&self, output: &Path) -> io::Result<bool> {
        log::info!("已指定直接覆寫：{}", output.display());
        Ok(true)
    }
}

/// 非互動環境且未指定 --yes：拒絕覆寫
pub struct RefuseOverwrite;

impl OverwritePort for RefuseOverwrite {
    fn confirm_overwrite(&self, output: &Path) -> io::Result<bool> {
        log::warn!("輸出檔案已存在且無法詢問使用者，未覆寫：{}", output.display());
        Ok(false)
    }
}
