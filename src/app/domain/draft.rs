use serde::Serialize;
use std::fmt;

use super::tutorial::Step;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftStep {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepField {
    Title,
    Content,
}

/// A tutorial being authored. Always holds at least one step slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub steps: Vec<DraftStep>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            steps: vec![DraftStep::default()],
        }
    }
}

/// A required form field left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Title,
    StepTitle(usize),
    StepContent(usize),
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Steps are shown 1-based in the form.
        match self {
            MissingField::Title => f.write_str("codelab title"),
            MissingField::StepTitle(i) => write!(f, "step {} title", i + 1),
            MissingField::StepContent(i) => write!(f, "step {} content", i + 1),
        }
    }
}

impl Draft {
    /// Every empty required field, in form order. Whitespace counts as content.
    pub fn missing_fields(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push(MissingField::Title);
        }
        for (i, step) in self.steps.iter().enumerate() {
            if step.title.is_empty() {
                missing.push(MissingField::StepTitle(i));
            }
            if step.content.is_empty() {
                missing.push(MissingField::StepContent(i));
            }
        }
        missing
    }

    pub fn to_submission(&self) -> Submission {
        Submission {
            title: self.title.clone(),
            steps: self
                .steps
                .iter()
                .map(|s| Step::new(s.title.clone(), s.content.clone()))
                .collect(),
        }
    }
}

/// Finished snapshot of a draft, handed to a submission sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub title: String,
    pub steps: Vec<Step>,
}
