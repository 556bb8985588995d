use std::io;
use log::info;
use crate::config::ports::OverwritePort;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::ConversionRequest;
use crate::models::facade::{FacadeInput, FacadeOutput};
use crate::service::traits::i_service::ConverterServiceTrait;
use crate::service::validation::file_exists;
use crate::utils::utils::ProgressManager;

pub const CANCELLED: &str = "Conversion cancelled: output file was not overwritten.";

pub struct ConversionFacade {
    converter: Box<dyn ConverterServiceTrait>,
    overwrite_port: Box<dyn OverwritePort>,
}

impl ConversionFacade {
    pub fn new(converter: Box<dyn ConverterServiceTrait>, overwrite_port: Box<dyn OverwritePort>) -> Self {
        ConversionFacade {
            converter,
            overwrite_port,
        }
    }
}

impl ConversionFacadeTrait for ConversionFacade {
    fn execute_conversion(&self, input: FacadeInput) -> io::Result<FacadeOutput> {
        if file_exists(&input.output_path) && !self.overwrite_port.confirm_overwrite(&input.output_path)? {
            info!("使用者未同意覆寫：{}", input.output_path.display());
            return Ok(FacadeOutput {
                outcome: None,
                message: CANCELLED.to_string(),
                output_path: input.output_path,
            });
        }

        let request = ConversionRequest::new(&input.input_path, &input.output_path, input.operation);
        let pm = ProgressManager::new(format!("{}：{}", input.operation, input.input_path.display()), input.no_progress);
        let outcome = self.converter.convert(&request);
        pm.finish();

        Ok(FacadeOutput {
            message: outcome.status_message(input.operation),
            outcome: Some(outcome),
            output_path: input.output_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;
    use crate::config::ports::{AssumeYesOverwrite, RefuseOverwrite};
    use crate::models::conversion::{ConversionOutcome, Operation};
    use crate::service::line_converter::LineConverter;

    fn facade(port: Box<dyn OverwritePort>) -> ConversionFacade {
        ConversionFacade::new(Box::new(LineConverter::default()), port)
    }

    fn facade_input(input: &Path, output: &Path, operation: Operation) -> FacadeInput {
        FacadeInput {
            input_path: input.to_path_buf(),
            output_path: output.to_path_buf(),
            operation,
            no_progress: true,
        }
    }

    #[test]
    fn refused_overwrite_keeps_existing_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "Hi\n").unwrap();
        fs::write(&output, "old").unwrap();

        let result = facade(Box::new(RefuseOverwrite))
            .execute_conversion(facade_input(&input, &output, Operation::Encode))
            .unwrap();
        assert!(result.was_cancelled());
        assert_eq!(result.message, CANCELLED);
        assert_eq!(fs::read_to_string(&output).unwrap(), "old");
    }

    #[test]
    fn confirmed_overwrite_replaces_old_content() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "A\n").unwrap();
        fs::write(&output, "old content\nmore old content\n").unwrap();

        let result = facade(Box::new(AssumeYesOverwrite))
            .execute_conversion(facade_input(&input, &output, Operation::Encode))
            .unwrap();
        assert_eq!(result.outcome, Some(ConversionOutcome::Success));
        assert_eq!(result.message, "The text from the input file was successfully encoded to binary.");
        assert_eq!(fs::read_to_string(&output).unwrap().trim_end(), "1000001");
    }

    #[test]
    fn missing_output_needs_no_confirmation() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "1000001\n").unwrap();

        let result = facade(Box::new(RefuseOverwrite))
            .execute_conversion(facade_input(&input, &output, Operation::Decode))
            .unwrap();
        assert_eq!(result.message, "The text from the input file was successfully decoded from binary.");
        assert_eq!(result.exit_code(), 0);
    }

    #[test]
    fn failure_message_is_passed_through() {
        let dir = tempdir().unwrap();
        let result = facade(Box::new(AssumeYesOverwrite))
            .execute_conversion(facade_input(&dir.path().join("missing.txt"), &dir.path().join("out.txt"), Operation::Encode))
            .unwrap();
        assert_eq!(result.message, "Input file does not exist.");
        assert_eq!(result.exit_code(), 1);
    }
}
