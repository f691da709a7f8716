//! Quiz state machine
//!
//! Sequencing:
//! 1. `answer` records the choice and requests `Advance` after 800 ms
//! 2. `Advance` hides the card and requests `ShowQuestion` or `ShowResult` after 300 ms
//! 3. `ShowQuestion` reveals the next card, `ShowResult` reveals the score
//!
//! Transitions are stamped with the run they were issued in and the question
//! they refer to. A reset starts a new run, so anything still queued from the
//! previous run falls through as a no-op.

use std::collections::VecDeque;

use thiserror::Error;

use super::questions::question;
use super::tier::Tier;
use crate::consts::{ANSWER_DELAY_MS, QUESTION_COUNT, TRANSITION_DELAY_MS};
use crate::score_percentage;

/// A delayed continuation requested by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Leave `question` (it has been answered)
    Advance { run: u32, question: usize },
    /// Reveal the card at `index`
    ShowQuestion { run: u32, index: usize },
    /// Reveal the final score
    ShowResult { run: u32 },
}

impl Transition {
    /// How long the scheduler should wait before handing this back
    pub fn delay_ms(&self) -> u32 {
        match self {
            Transition::Advance { .. } => ANSWER_DELAY_MS,
            Transition::ShowQuestion { .. } | Transition::ShowResult { .. } => {
                TRANSITION_DELAY_MS
            }
        }
    }

    pub fn run(&self) -> u32 {
        match *self {
            Transition::Advance { run, .. }
            | Transition::ShowQuestion { run, .. }
            | Transition::ShowResult { run } => run,
        }
    }
}

/// Timer collaborator: fires `transition` back into the engine after `delay_ms`
pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, transition: Transition);
}

/// Scheduler that just queues requests; the owner decides when they fire
#[derive(Debug, Clone, Default)]
pub struct TransitionQueue {
    pending: VecDeque<(u32, Transition)>,
}

impl TransitionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest queued request
    pub fn pop(&mut self) -> Option<(u32, Transition)> {
        self.pending.pop_front()
    }

    /// Take every queued request, oldest first
    pub fn drain(&mut self) -> Vec<(u32, Transition)> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for TransitionQueue {
    fn schedule(&mut self, delay_ms: u32, transition: Transition) {
        self.pending.push_back((delay_ms, transition));
    }
}

/// Why an answer was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnswerRejected {
    #[error("quiz already finished")]
    Finished,
    #[error("question {question} is not current (current is {current})")]
    StaleQuestion { question: usize, current: usize },
    #[error("question {question} has no option worth {value} points")]
    UnknownOption { question: usize, value: u32 },
}

/// Progress bar state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based number of the question on screen
    pub question_number: usize,
    pub total: usize,
}

impl QuizProgress {
    fn at(index: usize) -> Self {
        Self {
            question_number: (index + 1).min(QUESTION_COUNT),
            total: QUESTION_COUNT,
        }
    }

    /// Progress bar fill (percent)
    pub fn fill_percent(&self) -> f32 {
        self.question_number as f32 / self.total as f32 * 100.0
    }

    pub fn label(&self) -> String {
        format!("Question {} of {}", self.question_number, self.total)
    }
}

/// Final outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub percentage: u32,
    pub tier: Tier,
}

impl QuizResult {
    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

/// View updates produced by the engine, drained by the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// Show only question 0 and hide the result panel
    Reset,
    /// Highlight the chosen option of `question`, clearing any other
    OptionSelected { question: usize, value: u32 },
    QuestionHidden(usize),
    QuestionShown(usize),
    Progress(QuizProgress),
    Finished(QuizResult),
}

/// Mutable quiz data for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    /// Current question (QUESTION_COUNT once finished)
    pub index: usize,
    /// Sum of `answers`
    pub score: u32,
    /// Chosen value per question
    pub answers: Vec<u32>,
}

impl QuizState {
    pub fn is_finished(&self) -> bool {
        self.index >= QUESTION_COUNT
    }

    /// Current question has been answered and is waiting to advance
    fn awaiting_advance(&self) -> bool {
        self.answers.len() > self.index
    }
}

/// Quiz engine
///
/// Re-selecting an option before the advance fires replaces the earlier
/// choice, so `score` always equals the sum of `answers`.
#[derive(Debug, Default)]
pub struct QuizEngine {
    state: QuizState,
    run: u32,
    events: Vec<QuizEvent>,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn answers(&self) -> &[u32] {
        &self.state.answers
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Identifier of the current run
    pub fn run(&self) -> u32 {
        self.run
    }

    /// Start a new run at question 0
    pub fn reset(&mut self) {
        self.state = QuizState::default();
        self.run = self.run.wrapping_add(1);
        self.events.push(QuizEvent::Reset);
        self.events.push(QuizEvent::Progress(QuizProgress::at(0)));
        log::debug!("Quiz reset (run {})", self.run);
    }

    /// Select `value` for `question`.
    ///
    /// Only the question on screen accepts answers. The first answer schedules
    /// the advance; a second answer before it fires swaps the contribution.
    pub fn answer(
        &mut self,
        question_index: usize,
        value: u32,
        scheduler: &mut impl Scheduler,
    ) -> Result<(), AnswerRejected> {
        if self.state.is_finished() {
            return Err(AnswerRejected::Finished);
        }
        if question_index != self.state.index {
            return Err(AnswerRejected::StaleQuestion {
                question: question_index,
                current: self.state.index,
            });
        }
        if !question(question_index).is_some_and(|q| q.offers(value)) {
            return Err(AnswerRejected::UnknownOption {
                question: question_index,
                value,
            });
        }

        if self.state.awaiting_advance() {
            let previous = self.state.answers[question_index];
            self.state.answers[question_index] = value;
            self.state.score = self.state.score - previous + value;
            log::debug!(
                "Question {} re-answered: {} -> {}",
                question_index,
                previous,
                value
            );
        } else {
            self.state.answers.push(value);
            self.state.score += value;
            let advance = Transition::Advance {
                run: self.run,
                question: question_index,
            };
            scheduler.schedule(advance.delay_ms(), advance);
        }

        self.events.push(QuizEvent::OptionSelected {
            question: question_index,
            value,
        });
        Ok(())
    }

    /// Move past the current, answered question.
    ///
    /// Returns false (and changes nothing) when finished or unanswered.
    pub fn advance(&mut self, scheduler: &mut impl Scheduler) -> bool {
        if self.state.is_finished() || !self.state.awaiting_advance() {
            return false;
        }

        let left = self.state.index;
        self.state.index += 1;
        self.events.push(QuizEvent::QuestionHidden(left));

        let next = if self.state.is_finished() {
            Transition::ShowResult { run: self.run }
        } else {
            Transition::ShowQuestion {
                run: self.run,
                index: self.state.index,
            }
        };
        scheduler.schedule(next.delay_ms(), next);
        true
    }

    /// Percentage and tier of a finished run
    pub fn compute_result(&self) -> Option<QuizResult> {
        if !self.state.is_finished() {
            return None;
        }
        let percentage = score_percentage(self.state.score);
        Some(QuizResult {
            score: self.state.score,
            percentage,
            tier: Tier::for_result(percentage),
        })
    }

    /// Apply a transition the scheduler handed back.
    ///
    /// Returns false when the transition no longer applies (earlier run,
    /// question already left, card no longer current).
    pub fn fulfil(&mut self, transition: Transition, scheduler: &mut impl Scheduler) -> bool {
        if transition.run() != self.run {
            log::debug!("Dropping {:?} from an earlier run", transition);
            return false;
        }

        match transition {
            Transition::Advance { question, .. } => {
                question == self.state.index && self.advance(scheduler)
            }
            Transition::ShowQuestion { index, .. } => {
                if index != self.state.index || self.state.is_finished() {
                    return false;
                }
                self.events.push(QuizEvent::QuestionShown(index));
                self.events.push(QuizEvent::Progress(QuizProgress::at(index)));
                true
            }
            Transition::ShowResult { .. } => match self.compute_result() {
                Some(result) => {
                    log::info!(
                        "Quiz finished: {} points ({}%, {})",
                        result.score,
                        result.percentage,
                        result.tier.as_str()
                    );
                    self.events.push(QuizEvent::Finished(result));
                    true
                }
                None => false,
            },
        }
    }

    /// Take the view updates produced since the last drain
    pub fn drain_events(&mut self) -> Vec<QuizEvent> {
        std::mem::take(&mut self.events)
    }
}
