use thiserror::Error;

use crate::fast_talk::{SessionError, TimeBudgetError};
use crate::model::{CardColorError, CategoryParseError, QuestionCountError, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Color(#[from] CardColorError),
    #[error(transparent)]
    QuestionCount(#[from] QuestionCountError),
    #[error(transparent)]
    Category(#[from] CategoryParseError),
    #[error(transparent)]
    TimeBudget(#[from] TimeBudgetError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
