//! Employer compatibility quiz
//!
//! The engine is pure: it never touches the DOM or the clock. Delays between
//! answering, hiding a card and showing the next one are issued as
//! [`Transition`] requests to a [`Scheduler`], which hands them back later
//! through [`QuizEngine::fulfil`].

pub mod engine;
pub mod questions;
pub mod tier;

pub use engine::{
    AnswerRejected, QuizEngine, QuizEvent, QuizProgress, QuizResult, QuizState, Scheduler,
    Transition, TransitionQueue,
};
pub use questions::{QUESTIONS, Question, QuizOption};
pub use tier::Tier;
