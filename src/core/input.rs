//! Line input abstraction

use crate::error::{ArchieError, Result};
use std::io::Write;
use tracing::warn;

/// Source of user input lines
pub trait Prompt {
    /// Read one line without its trailing newline; `Ok(None)` on end-of-input
    ///
    /// `complete` turns package-name tab-completion on for this read only.
    fn read_line(&mut self, prompt: &str, complete: bool) -> Result<Option<String>>;

    /// Remember an accepted line in the history
    fn add_history(&mut self, line: &str);
}

/// Ask until a non-empty line arrives
///
/// Empty lines and end-of-input both print a diagnostic and ask again, but
/// `max_eof` consecutive end-of-input reads end the loop with
/// [`ArchieError::InputClosed`].
pub fn read_non_empty<P, W>(
    prompt: &mut P,
    out: &mut W,
    text: &str,
    complete: bool,
    max_eof: usize,
) -> Result<String>
where
    P: Prompt + ?Sized,
    W: Write + ?Sized,
{
    let mut eof_count = 0;
    loop {
        match prompt.read_line(text, complete)? {
            Some(line) if !line.is_empty() => return Ok(line),
            Some(_) => eof_count = 0,
            None => {
                eof_count += 1;
                if eof_count >= max_eof {
                    warn!("Giving up after {} end-of-input reads", eof_count);
                    return Err(ArchieError::InputClosed {
                        attempts: eof_count,
                    });
                }
            }
        }
        let _ = writeln!(out, "Please input something, not air.");
    }
}

/// `y` or `yes`, exactly
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer, "y" | "yes")
}


#[cfg(test)]
mod tests {
    use super::{testing::ScriptedPrompt, *};

    #[test]
    fn test_returns_first_non_empty_line() {
        let mut prompt = ScriptedPrompt::new(&["", "", "firefox"]);
        let mut out = Vec::new();

        let line = read_non_empty(&mut prompt, &mut out, "$ ", false, 3).unwrap();

        assert_eq!(line, "firefox");
        assert_eq!(prompt.prompts.len(), 3);
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Please input something, not air.").count(), 2);
    }

    #[test]
    fn test_sustained_eof_is_fatal() {
        let mut prompt = ScriptedPrompt::default().then_eof(5);
        let mut out = Vec::new();

        let err = read_non_empty(&mut prompt, &mut out, "$ ", false, 3).unwrap_err();

        assert!(matches!(err, ArchieError::InputClosed { attempts: 3 }));
        assert_eq!(prompt.prompts.len(), 3);
    }

    #[test]
    fn test_eof_counter_resets_on_input() {
        let mut prompt = ScriptedPrompt::default()
            .then_eof(2)
            .then_answer("")
            .then_eof(2)
            .then_answer("u");
        let mut out = Vec::new();

        let line = read_non_empty(&mut prompt, &mut out, "$ ", false, 3).unwrap();
        assert_eq!(line, "u");
        assert_eq!(prompt.prompts.len(), 6);
    }

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("yes"));
        for answer in ["Y", "YES", "n", "no", "yes ", "yep", ""] {
            assert!(!is_affirmative(answer));
        }
    }
}
