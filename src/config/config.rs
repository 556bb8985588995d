use clap::{Parser, ValueEnum};
use crate::models::conversion::Operation;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "binary_translator",
    about = "將文字檔逐行轉換為二進位數字，或從二進位數字還原",
    long_about = "將 UTF-8 文字檔的每個字元轉為不補零的二進位碼位（以空白分隔、逐行輸出），或反向解碼。\n輸出檔若已存在會先詢問是否覆寫（--yes 可略過詢問）。\n不帶任何參數執行時進入互動模式。",
    arg_required_else_help = true
)]
pub struct Cli {
    pub input: String,
    pub output: String,
    #[arg(short, long, value_enum)]
    pub mode: Mode,
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,
    #[arg(long, default_value_t = false)]
    pub sequential: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "warn", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Debug)]
pub enum Mode {
    Encode,
    Decode,
}

impl From<Mode> for Operation {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Encode => Operation::Encode,
            Mode::Decode => Operation::Decode,
        }
    }
}
