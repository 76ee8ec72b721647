//! Questionnaire configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::questionnaire::{BankLoadError, QuestionBank};

/// Question bank source
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QuestionnaireConfig {
    /// YAML file replacing the built-in bank
    pub bank_path: Option<PathBuf>,
}

impl QuestionnaireConfig {
    /// Load the configured bank, or the built-in one
    pub fn load_bank(&self) -> Result<QuestionBank, BankLoadError> {
        match &self.bank_path {
            Some(path) => QuestionBank::from_yaml_file(path),
            None => Ok(QuestionBank::standard().clone()),
        }
    }

    /// Validate questionnaire configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.bank_path {
            if !path.is_file() {
                return Err(ValidationError::BankFileNotFound(path.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_uses_standard_bank() {
        let config = QuestionnaireConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.load_bank().unwrap(), *QuestionBank::standard());
    }

    #[test]
    fn test_missing_bank_file_fails_validation() {
        let config = QuestionnaireConfig {
            bank_path: Some(PathBuf::from("/nonexistent/bank.yaml")),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::BankFileNotFound(_))
        ));
    }

    #[test]
    fn test_loads_bank_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "questions:\n  - id: 1\n    text: \"Prefiero ir al grano\"\n    category: Rojo\n"
        )
        .unwrap();

        let config = QuestionnaireConfig {
            bank_path: Some(file.path().to_path_buf()),
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.load_bank().unwrap().len(), 1);
    }
}
