//! Native file picker and message boxes.

use crate::batch::{BatchResult, SelectionItem};
use crate::error::Result;
use crate::prompt::{ConsolePrompter, Prompter};
use crate::report::render_summary;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::io::{Stdout, StdinLock};

const TITLE: &str = "comp-img";
const FOLDERS: &str = "Folders";
const FILES: &str = "Files";
const CANCEL: &str = "Cancel";

pub struct DialogPrompter {
    // rfd has no text-entry dialog, so quality is typed on the console
    console: ConsolePrompter<StdinLock<'static>, Stdout>,
}

impl DialogPrompter {
    pub fn new() -> Self {
        Self {
            console: ConsolePrompter::stdio(),
        }
    }

    fn show(&self, level: MessageLevel, text: &str) {
        MessageDialog::new()
            .set_level(level)
            .set_title(TITLE)
            .set_description(text)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Default for DialogPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialogPrompter {
    fn select_paths(&mut self) -> Result<Vec<SelectionItem>> {
        let choice = MessageDialog::new()
            .set_title(TITLE)
            .set_description("Compress whole folders or individual files?")
            .set_buttons(MessageButtons::YesNoCancelCustom(
                FOLDERS.to_string(),
                FILES.to_string(),
                CANCEL.to_string(),
            ))
            .show();

        let picked = match choice {
            MessageDialogResult::Yes => FileDialog::new().pick_folders(),
            MessageDialogResult::No => FileDialog::new().pick_files(),
            MessageDialogResult::Custom(label) if label == FOLDERS => {
                FileDialog::new().pick_folders()
            }
            MessageDialogResult::Custom(label) if label == FILES => FileDialog::new().pick_files(),
            _ => None,
        };

        Ok(picked
            .unwrap_or_default()
            .into_iter()
            .map(SelectionItem::from_path)
            .collect())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = MessageDialog::new()
            .set_title(TITLE)
            .set_description(prompt)
            .set_buttons(MessageButtons::YesNo)
            .show();
        Ok(matches!(answer, MessageDialogResult::Yes))
    }

    fn input_quality(&mut self) -> Result<Option<String>> {
        self.console.input_quality()
    }

    fn message(&mut self, text: &str) -> Result<()> {
        self.show(MessageLevel::Info, text);
        Ok(())
    }

    fn report(&mut self, result: &BatchResult) -> Result<()> {
        self.show(MessageLevel::Info, &render_summary(result));
        Ok(())
    }
}
