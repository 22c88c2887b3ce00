//! OCR adapter: image file in, raw text lines out.
//!
//! The lines are only echoed back to the user; nothing here interprets them.

use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{info, instrument, warn};

/// Single line returned when no OCR engine could be initialized.
pub const OCR_UNAVAILABLE: &str = "OCR System not initialized.";

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("failed to run OCR command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("OCR command exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
}

/// Extracts text lines from an image file.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: &Path) -> Result<Vec<String>, OcrError>;
}

/// Stand-in used when the OCR engine is missing; always yields [`OCR_UNAVAILABLE`].
pub struct UnavailableRecognizer;

#[async_trait]
impl TextRecognizer for UnavailableRecognizer {
    async fn recognize(&self, _image: &Path) -> Result<Vec<String>, OcrError> {
        Ok(vec![OCR_UNAVAILABLE.to_string()])
    }
}

/// Runs a tesseract-compatible command: `<program> <image> stdout -l <languages>`.
pub struct CommandRecognizer {
    program: String,
    languages: String,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<String>, languages: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            languages: languages.into(),
        }
    }

    /// Checks that the program can be started (`<program> --version`).
    pub async fn probe(&self) -> Result<(), OcrError> {
        let status = Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;
        if status.success() {
            Ok(())
        } else {
            Err(OcrError::Failed {
                status: status.to_string(),
                stderr: String::new(),
            })
        }
    }
}

#[async_trait]
impl TextRecognizer for CommandRecognizer {
    #[instrument(skip(self))]
    async fn recognize(&self, image: &Path) -> Result<Vec<String>, OcrError> {
        let output = Command::new(&self.program)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(OcrError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let lines = text_lines(&String::from_utf8_lossy(&output.stdout));
        info!(lines = lines.len(), "OCR finished");
        Ok(lines)
    }
}

/// Non-empty trimmed lines of OCR output.
fn text_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the recognizer for the configured command. An empty command, or one that cannot be
/// started, yields [`UnavailableRecognizer`].
pub async fn build_recognizer(program: &str, languages: &str) -> Arc<dyn TextRecognizer> {
    if program.trim().is_empty() {
        info!("OCR disabled (empty OCR command)");
        return Arc::new(UnavailableRecognizer);
    }

    let recognizer = CommandRecognizer::new(program, languages);
    match recognizer.probe().await {
        Ok(()) => {
            info!(program = %program, languages = %languages, "OCR engine ready");
            Arc::new(recognizer)
        }
        Err(e) => {
            warn!(program = %program, error = %e, "OCR engine unavailable");
            Arc::new(UnavailableRecognizer)
        }
    }
}
