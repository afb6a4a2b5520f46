//! The interaction boundary between the batch runner and the person driving it.
//!
//! The runner only talks to a [`Prompter`]; a console implementation lives
//! here, native dialogs live in `dialog` behind the `native-dialogs` feature,
//! and tests script their own.

use crate::batch::{BatchResult, SelectionItem};
use crate::constants::{DEFAULT_QUALITY, QUALITY_PROMPT};
use crate::error::{CompressionError, Result};
use crate::report::render_summary;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::path::PathBuf;

/// Every method returns `Err(CompressionError::Interaction)` when the
/// boundary itself cannot be shown; that ends the whole run.
pub trait Prompter {
    /// An empty selection means the user cancelled.
    fn select_paths(&mut self) -> Result<Vec<SelectionItem>>;

    /// `false` for "no" or a dismissed prompt.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Raw quality text, `None` if the prompt was dismissed.
    fn input_quality(&mut self) -> Result<Option<String>>;

    fn message(&mut self, text: &str) -> Result<()>;

    fn report(&mut self, result: &BatchResult) -> Result<()>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn select_paths(&mut self) -> Result<Vec<SelectionItem>> {
        (**self).select_paths()
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        (**self).confirm(prompt)
    }

    fn input_quality(&mut self) -> Result<Option<String>> {
        (**self).input_quality()
    }

    fn message(&mut self, text: &str) -> Result<()> {
        (**self).message(text)
    }

    fn report(&mut self, result: &BatchResult) -> Result<()> {
        (**self).report(result)
    }
}

/// Line-oriented prompter over any reader/writer pair.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text).map_err(interaction)?;
        self.output.flush().map_err(interaction)
    }

    /// `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(interaction)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn select_paths(&mut self) -> Result<Vec<SelectionItem>> {
        self.write_prompt(
            "Enter files or directories to compress, one per line (empty line to finish):\n",
        )?;

        let mut items = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            items.push(SelectionItem::from_path(PathBuf::from(line)));
        }
        Ok(items)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.write_prompt(&format!("{} [Y/n]: ", prompt))?;
        Ok(match self.read_line()? {
            Some(answer) => matches!(answer.to_lowercase().as_str(), "" | "y" | "yes"),
            None => false,
        })
    }

    fn input_quality(&mut self) -> Result<Option<String>> {
        self.write_prompt(&format!("{} [{}]: ", QUALITY_PROMPT, DEFAULT_QUALITY))?;
        self.read_line()
    }

    fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).map_err(interaction)
    }

    fn report(&mut self, result: &BatchResult) -> Result<()> {
        writeln!(self.output, "{}", render_summary(result)).map_err(interaction)
    }
}

fn interaction(e: io::Error) -> CompressionError {
    CompressionError::Interaction(e.to_string())
}
