use thiserror::Error;

use crate::app::domain::{Draft, DraftStep, MissingField, StepField, Submission};
use crate::app::services::submission::SubmissionSink;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ComposerError {
    #[error("Please fill in: {}", list_fields(.0))]
    Incomplete(Vec<MissingField>),
}

fn list_fields(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Owns the draft of a new codelab for one authoring session.
pub struct TutorialComposer {
    draft: Draft,
    sink: Box<dyn SubmissionSink>,
}

impl TutorialComposer {
    pub fn new(sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            draft: Draft::default(),
            sink,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn step_count(&self) -> usize {
        self.draft.steps.len()
    }

    /// The per-step remove control is only offered while this is true.
    pub fn can_remove_steps(&self) -> bool {
        self.draft.steps.len() > 1
    }

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.draft.title = text.into();
    }

    pub fn add_step(&mut self) {
        self.draft.steps.push(DraftStep::default());
    }

    pub fn remove_step(&mut self, index: usize) -> bool {
        if index >= self.draft.steps.len() || !self.can_remove_steps() {
            tracing::debug!(index, steps = self.draft.steps.len(), "refusing to remove step");
            return false;
        }
        self.draft.steps.remove(index);
        true
    }

    pub fn set_step_field(
        &mut self,
        index: usize,
        field: StepField,
        value: impl Into<String>,
    ) -> bool {
        let Some(step) = self.draft.steps.get_mut(index) else {
            tracing::warn!(index, "ignoring edit of nonexistent step");
            return false;
        };
        match field {
            StepField::Title => step.title = value.into(),
            StepField::Content => step.content = value.into(),
        }
        true
    }

    pub fn missing_fields(&self) -> Vec<MissingField> {
        self.draft.missing_fields()
    }

    /// Hand the finished draft to the sink and start over with an empty one.
    /// An incomplete draft is left untouched.
    pub fn submit(&mut self) -> Result<Submission, ComposerError> {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            return Err(ComposerError::Incomplete(missing));
        }

        let submission = self.draft.to_submission();
        self.sink.accept(submission.clone());
        self.draft = Draft::default();
        Ok(submission)
    }
}
