//! Terminal prompt backed by rustyline

use crate::{
    core::{CompletionIndex, PackageCompleter, Prompt},
    error::{ArchieError, Result},
};
use rustyline::{
    CompletionType, Config as EditorConfig, Editor, error::ReadlineError, history::DefaultHistory,
};

/// Line editor with history and optional package-name completion
pub struct LinePrompt {
    editor: Editor<PackageCompleter, DefaultHistory>,
}

impl LinePrompt {
    /// Prompt completing package names from `index` when asked to
    pub fn new(index: CompletionIndex) -> Result<Self> {
        let config = EditorConfig::builder()
            .completion_type(CompletionType::List)
            .auto_add_history(false)
            .build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(PackageCompleter::new(index)));
        Ok(Self { editor })
    }

    /// Prompt for contexts that never complete
    pub fn without_completion() -> Result<Self> {
        Self::new(CompletionIndex::from_entries(Vec::new()))
    }

    fn set_completion(&mut self, enabled: bool) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_enabled(enabled);
        }
    }
}

impl Prompt for LinePrompt {
    fn read_line(&mut self, prompt: &str, complete: bool) -> Result<Option<String>> {
        self.set_completion(complete);
        let line = self.editor.readline(prompt);
        self.set_completion(false);

        match line {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => Err(ArchieError::Interrupted),
            Err(e) => Err(e.into()),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
