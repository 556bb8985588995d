use std::io;
use thiserror::Error;

/// 單一字元或單一 token 的轉換錯誤，不會中止整個轉換
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("無法將碼位 {0} 轉為二進位字串")]
    Encode(u32),
    #[error("空的二進位 token")]
    EmptyToken,
    #[error("token '{0}' 含有非 0/1 字元")]
    InvalidDigit(String),
    #[error("token '{0}' 超出碼位範圍")]
    Overflow(String),
    #[error("{0} 不是合法的字元碼位")]
    InvalidCodePoint(u32),
}

/// 預檢或讀寫階段的錯誤，`Display` 即為顯示給使用者的狀態字串
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Input file does not exist.")]
    InputMissing,
    #[error("Error when checking if input file exists.")]
    InputExistsCheck(#[source] io::Error),
    #[error("Input file is empty.")]
    InputEmpty,
    #[error("Error: could not find input file.")]
    InputVanished(#[source] io::Error),
    #[error("Input file must be encoded as UTF-8 or must be plain text with basic ASCII characters.")]
    InputNotUtf8,
    #[error("Error when checking if input file is empty.")]
    EmptinessCheck(#[source] io::Error),
    #[error("Input file and output file must not be the same.")]
    SameFile,
    #[error("Exception when checking if output file is same as input file.")]
    SameFileCheck(#[source] io::Error),
    #[error("Error: could not delete pre-existing output file.")]
    DeleteOutput(#[source] io::Error),
    #[error("An error occurred when reading the input file.")]
    Read(#[source] io::Error),
    #[error("Error: Cannot write output file (access denied). Please try saving to a different location.")]
    WriteAccessDenied(#[source] io::Error),
    #[error("Error: A problem occurred when writing to output file.")]
    Write(#[source] io::Error),
}

impl ConversionError {
    pub fn from_write(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            ConversionError::WriteAccessDenied(err)
        } else {
            ConversionError::Write(err)
        }
    }
}
