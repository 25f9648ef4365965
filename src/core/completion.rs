//! Package-name tab-completion
//!
//! The list of known package names is fetched from the sync databases the first
//! time a completion is requested and kept for the rest of the run. Each
//! request scans it from the start again.

use crate::{
    core::actions,
    error::{ArchieError, Result},
    utils::process::Runner,
};
use rustyline::{
    Context, Helper, Highlighter, Hinter, Validator, completion::Completer,
    error::ReadlineError,
};
use std::cell::OnceCell;
use tracing::{debug, instrument};

/// Something that can list every installable package name
pub trait PackageSource {
    fn list_packages(&self) -> Result<Vec<String>>;
}

impl<R: Runner> PackageSource for R {
    #[instrument(skip(self))]
    fn list_packages(&self) -> Result<Vec<String>> {
        let invocation = actions::list_packages();
        let result = self
            .capture(&invocation)
            .map_err(|e| ArchieError::package_index(format!("failed to run {invocation}: {e}")))?;

        if !result.success {
            return Err(ArchieError::package_index(format!(
                "{invocation} exited with {:?}: {}",
                result.exit_code,
                result.stderr.trim()
            )));
        }

        let packages = actions::parse_package_lines(&result.stdout);
        debug!("Loaded {} package names", packages.len());
        Ok(packages)
    }
}

/// Lazily built, then immutable, list of package names
pub struct CompletionIndex {
    source: Option<Box<dyn PackageSource>>,
    entries: OnceCell<Vec<String>>,
}

impl CompletionIndex {
    /// Index backed by `source`, queried on first use
    pub fn new(source: impl PackageSource + 'static) -> Self {
        Self {
            source: Some(Box::new(source)),
            entries: OnceCell::new(),
        }
    }

    /// Index over a fixed list
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self {
            source: None,
            entries: OnceCell::from(entries),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_loaded(&self) -> bool {
        self.entries.get().is_some()
    }

    /// All entries, loading them on first call
    pub fn entries(&self) -> Result<&[String]> {
        if let Some(entries) = self.entries.get() {
            return Ok(entries);
        }
        let loaded = match &self.source {
            Some(source) => source.list_packages()?,
            None => Vec::new(),
        };
        Ok(self.entries.get_or_init(|| loaded))
    }

    /// Entries starting with `prefix`, in index order
    pub fn matches<'a>(&'a self, prefix: &'a str) -> Result<Matches<'a>> {
        Ok(Matches {
            entries: self.entries()?,
            prefix,
            position: 0,
        })
    }
}

/// Resumable scan over the index for one completion request
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    entries: &'a [String],
    prefix: &'a str,
    position: usize,
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.entries.get(self.position) {
            self.position += 1;
            if entry.starts_with(self.prefix) {
                return Some(entry);
            }
        }
        None
    }
}

/// rustyline helper completing the word under the cursor from a [`CompletionIndex`]
///
/// Completion is switched off unless a prompt explicitly asks for it.
#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct PackageCompleter {
    index: CompletionIndex,
    enabled: bool,
}

impl PackageCompleter {
    pub fn new(index: CompletionIndex) -> Self {
        Self {
            index,
            enabled: false,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[cfg(test)]
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start of the replaced word and its candidates
    pub fn candidates(&self, line: &str, pos: usize) -> Result<(usize, Vec<String>)> {
        if !self.enabled {
            return Ok((pos, Vec::new()));
        }
        let start = word_start(line, pos);
        let candidates = self
            .index
            .matches(&line[start..pos])?
            .map(str::to_string)
            .collect();
        Ok((start, candidates))
    }
}

impl Completer for PackageCompleter {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        self.candidates(line, pos)
            .map_err(|e| ReadlineError::Io(std::io::Error::other(e.to_string())))
    }
}

fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}
