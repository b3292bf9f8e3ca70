//! Executive report assembly.
//!
//! [`ReportGenerator`] runs a list of user questions through an
//! [`AnswerEngine`] and assembles the question-and-answer report text, and
//! can write it into a configured output directory. Diagnostic answers are
//! embedded verbatim; report assembly never fails on an unanswerable
//! question.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::answer::AnswerEngine;
use crate::table::Table;

/// Default file stem for the written report.
const DEFAULT_OUTPUT_NAME: &str = "executive_summary";

/// Assembles and writes question-and-answer executive reports.
pub struct ReportGenerator {
    output_dir: PathBuf,
    output_name: Option<String>,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./outputs"),
            output_name: None,
        }
    }
}

impl ReportGenerator {
    /// Create a new generator with custom output settings.
    pub fn new(output_dir: PathBuf, output_name: Option<String>) -> Self {
        Self {
            output_dir,
            output_name,
        }
    }

    /// Build the report text: a `Title:` header followed by a `Q:`/`A:`
    /// pair per question. Blank questions are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only if the answer engine fails; the bundled
    /// rule-based engine never does.
    pub fn build_report(
        &self,
        title: &str,
        questions: &[String],
        engine: &dyn AnswerEngine,
        table: &Table,
    ) -> Result<String> {
        let mut content = format!("Title: {title}\n\n");

        for question in questions {
            if question.trim().is_empty() {
                continue;
            }
            let answer = engine.answer(question, table)?;
            content.push_str(&format!("Q: {question}\nA: {answer}\n\n"));
        }

        Ok(content)
    }

    /// Write report content to `{output_name}.txt` in the output directory,
    /// creating the directory if needed. Returns the written path.
    pub fn write_report_to_file(&self, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let file_name = self.output_name.as_deref().unwrap_or(DEFAULT_OUTPUT_NAME);
        let report_path = self.output_dir.join(format!("{file_name}.txt"));
        let mut file = File::create(&report_path)?;
        file.write_all(content.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}
