//! Gathers addresses to classify from every configured source.

use crate::data::{inputs, interfaces};
use crate::domain::{AddressInput, InputSource};
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Collects address inputs from arguments, files, stdin and local interfaces
#[derive(Debug, Clone, Default)]
pub struct AddressCollector {
    arguments: Vec<String>,
    files: Vec<PathBuf>,
    read_stdin: bool,
    include_interfaces: bool,
}

impl AddressCollector {
    /// Creates a collector with no sources
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_arguments(mut self, arguments: Vec<String>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_files(mut self, files: Vec<PathBuf>) -> Self {
        self.files = files;
        self
    }

    pub fn with_stdin(mut self, read_stdin: bool) -> Self {
        self.read_stdin = read_stdin;
        self
    }

    pub fn with_interfaces(mut self, include_interfaces: bool) -> Self {
        self.include_interfaces = include_interfaces;
        self
    }

    /// True if no source is configured
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.files.is_empty() && !self.read_stdin && !self.include_interfaces
    }

    /// Collects inputs in source order: arguments, files, stdin, interfaces
    pub fn collect_inputs(&self) -> Result<Vec<AddressInput>> {
        let mut collected: Vec<AddressInput> = self
            .arguments
            .iter()
            .map(|raw| AddressInput::parse(InputSource::Argument, raw.clone()))
            .collect();

        for path in &self.files {
            let tokens = inputs::read_address_file(path)?;
            debug!(path = %path.display(), count = tokens.len(), "read address file");

            let source = InputSource::File(path.display().to_string());
            collected.extend(
                tokens
                    .into_iter()
                    .map(|raw| AddressInput::parse(source.clone(), raw)),
            );
        }

        if self.read_stdin {
            let tokens = inputs::read_stdin()?;
            debug!(count = tokens.len(), "read addresses from stdin");
            collected.extend(
                tokens
                    .into_iter()
                    .map(|raw| AddressInput::parse(InputSource::Stdin, raw)),
            );
        }

        if self.include_interfaces {
            let addresses = interfaces::interface_addresses()?;
            debug!(count = addresses.len(), "enumerated interface addresses");
            collected.extend(
                addresses
                    .into_iter()
                    .map(|(name, ip)| AddressInput::from_ip(InputSource::Interface(name), ip)),
            );
        }

        for input in collected.iter().filter(|input| !input.address.is_valid()) {
            trace!(raw = %input.raw, source = %input.source, "input is not an IP address");
        }

        Ok(collected)
    }
}
