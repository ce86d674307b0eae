use thiserror::Error;

use crate::feedback::FeedbackError;
use crate::model::{CategoryParseError, InterviewError, ScoreError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Category(#[from] CategoryParseError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Interview(#[from] InterviewError),
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryId, Score};

    #[test]
    fn domain_errors_convert_into_crate_error() {
        let err: Error = "voice".parse::<CategoryId>().unwrap_err().into();
        assert!(matches!(err, Error::Category(_)));

        let err: Error = Score::new(101).unwrap_err().into();
        assert!(matches!(err, Error::Score(_)));
        assert!(!err.to_string().is_empty());
    }
}
