#![forbid(unsafe_code)]

pub mod error;
pub mod feedback;
pub mod model;
pub mod question_bank;
pub mod time;

pub use error::Error;
pub use feedback::{Feedback, FeedbackError, FeedbackGenerator, RandomSource, ScriptedRandom};
pub use question_bank::QuestionBank;
pub use time::{Clock, ElapsedTimer};
