use crate::app::domain::Submission;

/// Receives finished codelabs from the composer, one value per submission.
pub trait SubmissionSink {
    fn accept(&mut self, submission: Submission);
}

/// Writes submissions to the log. Nothing is stored.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl SubmissionSink for LogSink {
    fn accept(&mut self, submission: Submission) {
        tracing::info!(
            title = %submission.title,
            steps = submission.steps.len(),
            "codelab submitted"
        );
        match serde_json::to_string_pretty(&submission) {
            Ok(json) => tracing::debug!("submission body:\n{json}"),
            Err(e) => tracing::warn!("could not serialize submission: {e}"),
        }
    }
}

impl<F> SubmissionSink for F
where
    F: FnMut(Submission),
{
    fn accept(&mut self, submission: Submission) {
        self(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::Step;

    fn submission() -> Submission {
        Submission {
            title: "My Tutorial".into(),
            steps: vec![Step::new("One", "body")],
        }
    }

    #[test]
    fn test_log_sink_accepts_through_trait_object() {
        let mut sink: Box<dyn SubmissionSink> = Box::new(LogSink::new());
        sink.accept(submission());
        sink.accept(submission());
    }

    #[test]
    fn test_closure_sink() {
        let mut received = Vec::new();
        {
            let mut sink = |s: Submission| received.push(s);
            sink.accept(submission());
        }
        assert_eq!(received, vec![submission()]);
    }
}
