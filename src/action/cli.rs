use std::io::{self, IsTerminal};
use std::path::PathBuf;
use clap::Parser;
use crate::action::interactive::{process_interactive_mode, PromptOverwrite};
use crate::config::config::Cli;
use crate::config::ports::{AppConfig, AssumeYesOverwrite, ConfigPort, OverwritePort, RefuseOverwrite};
use crate::facade::conversion_facade::ConversionFacade;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::ConverterOptions;
use crate::models::facade::FacadeInput;
use crate::service::config_service::ConfigService;
use crate::service::line_converter::LineConverter;
use crate::utils::utils::setup_logging;

/// 沒有參數時進入互動模式，否則解析命令列；返回行程結束碼
pub fn process_args(args: Vec<String>) -> io::Result<i32> {
    if args.len() == 1 {
        process_interactive_mode()
    } else {
        process_cli_mode()
    }
}

pub fn process_cli_mode() -> io::Result<i32> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = config_service.get_config()?;

    let overwrite_port: Box<dyn OverwritePort> = if config.assume_yes {
        Box::new(AssumeYesOverwrite)
    } else if io::stdin().is_terminal() {
        Box::new(PromptOverwrite)
    } else {
        Box::new(RefuseOverwrite)
    };

    let (code, message) = run_conversion(&config, overwrite_port)?;
    println!("{}", message);
    Ok(code)
}

/// 依配置建立 facade 並執行一次轉換，返回 (結束碼, 狀態字串)
pub fn run_conversion(config: &AppConfig, overwrite_port: Box<dyn OverwritePort>) -> io::Result<(i32, String)> {
    let converter = LineConverter::new(ConverterOptions { parallel: config.parallel });
    let facade: Box<dyn ConversionFacadeTrait> = Box::new(ConversionFacade::new(Box::new(converter), overwrite_port));

    let output = facade.execute_conversion(FacadeInput {
        input_path: PathBuf::from(&config.input),
        output_path: PathBuf::from(&config.output),
        operation: config.operation,
        no_progress: config.no_progress,
    })?;
    Ok((output.exit_code(), output.message))
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        if self.cli.input.trim().is_empty() || self.cli.output.trim().is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "輸入與輸出路徑不可為空"));
        }
        Ok(AppConfig {
            input: self.cli.input.clone(),
            output: self.cli.output.clone(),
            operation: self.cli.mode.into(),
            assume_yes: self.cli.yes,
            parallel: !self.cli.sequential,
            no_progress: self.cli.no_progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::conversion::Operation;

    #[test]
    fn cli_flags_map_to_config() {
        let cli = Cli::try_parse_from(["binary_translator", "in.txt", "out.txt", "--mode", "decode", "--sequential", "-y"]).unwrap();
        let config = CliConfigAdapter::new(cli).get_config().unwrap();
        assert_eq!(config.operation, Operation::Decode);
        assert!(!config.parallel);
        assert!(config.assume_yes);
        assert!(!config.no_progress);
    }

    #[test]
    fn mode_is_required() {
        assert!(Cli::try_parse_from(["binary_translator", "in.txt", "out.txt"]).is_err());
    }

    #[test]
    fn blank_paths_are_rejected() {
        let cli = Cli::try_parse_from(["binary_translator", " ", "out.txt", "-m", "encode"]).unwrap();
        assert!(CliConfigAdapter::new(cli).get_config().is_err());
    }
}
