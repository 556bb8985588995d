use std::path::PathBuf;
use crate::models::conversion::{ConversionOutcome, Operation};

#[derive(Clone, Debug)]
pub struct FacadeInput {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub operation: Operation,
    pub no_progress: bool,
}

#[derive(Debug)]
pub struct FacadeOutput {
    pub outcome: Option<ConversionOutcome>,
    pub message: String,
    pub output_path: PathBuf,
}

impl FacadeOutput {
    /// `outcome` 為 None 表示使用者拒絕覆寫，轉換未執行
    pub fn was_cancelled(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn exit_code(&self) -> i32 {
        self.outcome.as_ref().map_or(0, ConversionOutcome::exit_code)
    }
}
