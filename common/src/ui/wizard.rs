//! Two-step bulk import flow: pick a file, then review and confirm the parsed rows.
//!
//! ```text
//! AwaitingFile --parse ok--> Previewing --commit ok--> Closed
//! AwaitingFile --parse err-> AwaitingFile (error shown)
//! Previewing --replace file-> AwaitingFile
//! ```
//!
//! A commit that stops part-way leaves the wizard in `Previewing` with only the
//! failing row and those after it, so a retry never resubmits rows that were
//! already created. Transitions requested from any other step are ignored.

use crate::model::import::ImportRow;

#[derive(Debug, Clone, PartialEq)]
pub enum WizardStep {
    AwaitingFile { error: Option<String> },
    Previewing { rows: Vec<ImportRow> },
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportWizard {
    step: WizardStep,
}

impl Default for ImportWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::AwaitingFile { error: None },
        }
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.step, WizardStep::Closed)
    }

    pub fn parse_succeeded(&mut self, rows: Vec<ImportRow>) {
        if matches!(self.step, WizardStep::AwaitingFile { .. }) {
            self.step = WizardStep::Previewing { rows };
        }
    }

    pub fn parse_failed(&mut self, message: impl Into<String>) {
        if matches!(self.step, WizardStep::AwaitingFile { .. }) {
            self.step = WizardStep::AwaitingFile {
                error: Some(message.into()),
            };
        }
    }

    pub fn replace_file(&mut self) {
        if matches!(self.step, WizardStep::Previewing { .. }) {
            self.step = WizardStep::AwaitingFile { error: None };
        }
    }

    pub fn commit_succeeded(&mut self) {
        if matches!(self.step, WizardStep::Previewing { .. }) {
            self.step = WizardStep::Closed;
        }
    }

    /// Drops every row before `row_index`: those were either created or skipped
    /// as invalid by the commit that stopped there.
    pub fn commit_stopped_at(&mut self, row_index: usize) {
        if let WizardStep::Previewing { rows } = &mut self.step {
            rows.drain(..row_index.min(rows.len()));
        }
    }

    /// Closing from any step discards the parsed rows.
    pub fn close(&mut self) {
        self.step = WizardStep::Closed;
    }

    pub fn rows(&self) -> &[ImportRow] {
        match &self.step {
            WizardStep::Previewing { rows } => rows,
            _ => &[],
        }
    }

    pub fn valid_count(&self) -> usize {
        self.rows().iter().filter(|r| r.is_valid).count()
    }
}
