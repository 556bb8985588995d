use std::fmt;
use std::path::PathBuf;

/// 轉換方向
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Encode,
    Decode,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encode => write!(f, "Encode"),
            Operation::Decode => write!(f, "Decode"),
        }
    }
}

/// 單次轉換請求，不會被保存
#[derive(Clone, Debug)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub operation: Operation,
}

impl ConversionRequest {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>, operation: Operation) -> Self {
        ConversionRequest {
            input_path: input_path.into(),
            output_path: output_path.into(),
            operation,
        }
    }
}

pub const PROBLEMS_OCCURRED: &str = "Problems have occurred, but an output file was generated.";

/// 轉換結果：成功、部分成功（有輸出但部分字元失敗）或失敗
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ConversionOutcome {
    Success,
    PartialSuccess(String),
    Failure(String),
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success)
    }

    /// 給使用者看的狀態字串
    pub fn status_message(&self, operation: Operation) -> String {
        match (self, operation) {
            (ConversionOutcome::Success, Operation::Encode) => {
                "The text from the input file was successfully encoded to binary.".to_string()
            }
            (ConversionOutcome::Success, Operation::Decode) => {
                "The text from the input file was successfully decoded from binary.".to_string()
            }
            (ConversionOutcome::PartialSuccess(msg), _) | (ConversionOutcome::Failure(msg), _) => msg.clone(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ConversionOutcome::Success => 0,
            ConversionOutcome::Failure(_) => 1,
            ConversionOutcome::PartialSuccess(_) => 2,
        }
    }
}

/// 每行轉換後的結果，`failures` 為該行轉換失敗的單位數
#[derive(Debug, Default)]
pub struct LineReport {
    pub text: String,
    pub failures: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct ConverterOptions {
    pub parallel: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        ConverterOptions { parallel: true }
    }
}
