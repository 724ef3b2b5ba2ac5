//! JSON and plain-text reports of classified addresses.

use crate::domain::{AddressInput, AddressStatus, InputSource, InvalidReason, ValidationError};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Outcome of classifying one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Public,
    Private,
    Invalid,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Invalid => "invalid",
        }
    }
}

/// One classified input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub input: String,
    pub source: InputSource,
    pub address: Option<IpAddr>,
    pub private: bool,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AddressStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<InvalidReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Counts per verdict
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub public: usize,
    pub private: usize,
    pub invalid: usize,
}

impl Summary {
    /// True if every entry is public
    pub fn all_public(&self) -> bool {
        self.public == self.total
    }
}

/// Complete report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    pub entries: Vec<ReportEntry>,
}

/// Error output printed when addresses could not be collected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    pub status: String,
    pub error: String,
}

/// Builds and renders reports
pub struct ReportFormatter;

impl ReportFormatter {
    /// Creates a new ReportFormatter instance
    pub fn new() -> Self {
        Self
    }

    /// Classifies every input and tallies the verdicts
    pub fn format(&self, inputs: &[AddressInput]) -> Report {
        let entries: Vec<ReportEntry> = inputs.iter().map(|input| self.classify_entry(input)).collect();

        let summary = entries.iter().fold(
            Summary {
                total: entries.len(),
                ..Summary::default()
            },
            |mut summary, entry| {
                match entry.verdict {
                    Verdict::Public => summary.public += 1,
                    Verdict::Private => summary.private += 1,
                    Verdict::Invalid => summary.invalid += 1,
                }
                summary
            },
        );

        Report { summary, entries }
    }

    /// Runs the guard on a single input
    fn classify_entry(&self, input: &AddressInput) -> ReportEntry {
        let result = input.address.require_public();

        let verdict = match &result {
            Ok(()) => Verdict::Public,
            Err(err) => match err.status() {
                AddressStatus::AddressPrivate => Verdict::Private,
                AddressStatus::AddressInvalid => Verdict::Invalid,
            },
        };

        let reason = match &result {
            Err(ValidationError::Invalid { reason, .. }) => Some(*reason),
            _ => None,
        };

        ReportEntry {
            input: input.raw.clone(),
            source: input.source.clone(),
            address: input.address.ip(),
            private: input.address.is_private(),
            verdict,
            status: result.as_ref().err().map(ValidationError::status),
            reason,
            message: result.err().map(|err| err.to_string()),
        }
    }

    /// Serializes the report as a single JSON document
    pub fn render_json(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string(report)?)
    }

    /// Renders the report as one line per entry plus a summary line
    pub fn render_text(&self, report: &Report) -> String {
        let mut lines: Vec<String> = report
            .entries
            .iter()
            .map(|entry| self.format_entry_line(entry))
            .collect();

        let summary = &report.summary;
        lines.push(format!(
            "{} addresses: {} public, {} private, {} invalid",
            summary.total, summary.public, summary.private, summary.invalid
        ));

        lines.join("\n")
    }

    /// Format a single entry line
    fn format_entry_line(&self, entry: &ReportEntry) -> String {
        let mut line = format!("{:<8} {} ({})", entry.verdict.as_str(), entry.input.trim(), entry.source);

        if let Some(status) = entry.status {
            line.push_str(&format!(" {}", status));
        }
        if let Some(reason) = entry.reason {
            line.push_str(&format!(": {}", reason));
        }

        line
    }

    /// Creates error output for a failed collection
    pub fn create_error_output(error: anyhow::Error) -> ErrorOutput {
        ErrorOutput {
            status: "error".to_string(),
            error: format!("{:#}", error),
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
