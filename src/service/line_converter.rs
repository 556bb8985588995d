use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::LazyLock;
use log::{debug, error, info, warn};
use rayon::prelude::*;
use regex::Regex;
use crate::models::conversion::{
    ConversionOutcome, ConversionRequest, ConverterOptions, LineReport, Operation, PROBLEMS_OCCURRED,
};
use crate::service::codec::{decode_token, encode_char};
use crate::service::error::{CodecError, ConversionError};
use crate::service::line_reader::TextLines;
use crate::service::traits::i_service::ConverterServiceTrait;
use crate::service::validation::run_preliminary_checks;

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

// 只認 ASCII 空白
static TOKEN_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").unwrap());

/// 逐行轉換器，負責預檢、逐行讀取、轉換與寫出
pub struct LineConverter {
    options: ConverterOptions,
}

impl LineConverter {
    pub fn new(options: ConverterOptions) -> Self {
        LineConverter { options }
    }

    /// 將輸入檔的每個字元轉為二進位字串，以單一空白分隔
    pub fn encode(&self, input: &Path, output: &Path) -> ConversionOutcome {
        self.run(input, output, |line| self.encode_line(line))
    }

    /// 將輸入檔中以空白分隔的二進位 token 還原為文字
    pub fn decode(&self, input: &Path, output: &Path) -> ConversionOutcome {
        self.run(input, output, |line| self.decode_line(line))
    }

    fn run<F>(&self, input: &Path, output: &Path, transform: F) -> ConversionOutcome
    where
        F: Fn(&str) -> LineReport,
    {
        if let Err(e) = run_preliminary_checks(input, output) {
            return ConversionOutcome::Failure(e.to_string());
        }

        match self.convert_lines(input, output, transform) {
            Ok(0) => ConversionOutcome::Success,
            Ok(failures) => {
                warn!("{} 個單位轉換失敗，已略過", failures);
                ConversionOutcome::PartialSuccess(PROBLEMS_OCCURRED.to_string())
            }
            Err(e) => {
                error!("轉換中止：{}（{:?}）", e, e);
                ConversionOutcome::Failure(e.to_string())
            }
        }
    }

    /// 逐行讀取並依序寫出，返回失敗單位總數；讀寫錯誤立即中止，不回滾已寫出的內容
    fn convert_lines<F>(&self, input: &Path, output: &Path, transform: F) -> Result<usize, ConversionError>
    where
        F: Fn(&str) -> LineReport,
    {
        let reader = BufReader::new(File::open(input).map_err(ConversionError::Read)?);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(output)
            .map_err(ConversionError::from_write)?;
        let mut writer = BufWriter::new(file);

        let mut failures = 0;
        let mut line_count = 0usize;
        for line in TextLines::new(reader) {
            let line = line.map_err(ConversionError::Read)?;
            let report = transform(&line);
            failures += report.failures;
            writer.write_all(report.text.as_bytes()).map_err(ConversionError::from_write)?;
            writer.write_all(LINE_SEPARATOR.as_bytes()).map_err(ConversionError::from_write)?;
            line_count += 1;
        }
        writer.flush().map_err(ConversionError::from_write)?;

        debug!("共處理 {} 行，失敗單位 {} 個", line_count, failures);
        Ok(failures)
    }

    pub fn encode_line(&self, line: &str) -> LineReport {
        let chars: Vec<char> = line.chars().collect();
        let results = self.map_units(&chars, |c| encode_char(*c as u32));

        let mut report = LineReport::default();
        let mut parts = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(binary) => parts.push(binary),
                Err(_) => {
                    report.failures += 1;
                    parts.push(String::new());
                }
            }
        }
        report.text = parts.join(" ");
        report
    }

    pub fn decode_line(&self, line: &str) -> LineReport {
        let tokens: Vec<&str> = TOKEN_SEPARATOR.split(line).collect();
        let results = self.map_units(&tokens, |token| decode_unit(token));

        let mut report = LineReport::default();
        for result in results {
            match result {
                Ok(Some(c)) => report.text.push(c),
                Ok(None) => {}
                Err(_) => report.failures += 1,
            }
        }
        report
    }

    /// 對一行內的單位做轉換，結果保持原始順序
    fn map_units<T, R, F>(&self, units: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if self.options.parallel {
            units.par_iter().map(f).collect()
        } else {
            units.iter().map(f).collect()
        }
    }
}

impl Default for LineConverter {
    fn default() -> Self {
        LineConverter::new(ConverterOptions::default())
    }
}

// 空 token 來自空行或行首空白，不算錯誤
fn decode_unit(token: &str) -> Result<Option<char>, CodecError> {
    if token.is_empty() {
        return Ok(None);
    }
    decode_token(token).map(Some)
}

impl ConverterServiceTrait for LineConverter {
    fn convert(&self, request: &ConversionRequest) -> ConversionOutcome {
        info!(
            "開始轉換（{}），輸入檔案：{}，輸出檔案：{}",
            request.operation,
            request.input_path.display(),
            request.output_path.display()
        );
        let outcome = match request.operation {
            Operation::Encode => self.encode(&request.input_path, &request.output_path),
            Operation::Decode => self.decode(&request.input_path, &request.output_path),
        };
        info!("轉換結束：{:?}", outcome);
        outcome
    }
}
