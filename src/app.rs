//! Page command handlers
//!
//! The browser layer turns DOM events into calls on [`Portfolio`], then drains
//! [`UiEvent`]s to update the page and queued [`Transition`]s to arm timers.

use chrono::{DateTime, Utc};

use crate::effects::konami::EASTER_EGG_MESSAGE;
use crate::effects::{Confetti, KonamiDetector};
use crate::quiz::{AnswerRejected, QuizEngine, QuizEvent, Transition, TransitionQueue};
use crate::storage::{KeyValueStorage, StorageError};
use crate::submissions::{DisplayCard, PitchForm, SubmissionRecord, SubmissionStore, render};
use crate::view::{View, ViewNavigator};

/// Page update for the view layer to apply
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    ShowView(View),
    HideView(View),
    Quiz(QuizEvent),
    /// Replace the contents of `#submissions-list`
    RenderSubmissions(Vec<DisplayCard>),
    ShowModal,
    CloseModal,
    ResetForm,
    Confetti(Confetti),
    Alert(&'static str),
}

pub struct Portfolio<S> {
    navigator: ViewNavigator,
    quiz: QuizEngine,
    store: SubmissionStore<S>,
    konami: KonamiDetector,
    transitions: TransitionQueue,
    events: Vec<UiEvent>,
}

impl<S: KeyValueStorage> Portfolio<S> {
    pub fn new(storage: S) -> Self {
        Self {
            navigator: ViewNavigator::new(),
            quiz: QuizEngine::new(),
            store: SubmissionStore::new(storage),
            konami: KonamiDetector::new(),
            transitions: TransitionQueue::new(),
            events: Vec::new(),
        }
    }

    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    pub fn store(&self) -> &SubmissionStore<S> {
        &self.store
    }

    pub fn current_view(&self) -> View {
        self.navigator.current()
    }

    /// Page loaded
    pub fn start(&mut self) {
        self.refresh_submissions();
    }

    pub fn show(&mut self, view: View) {
        let switch = self.navigator.show(view, &mut self.quiz);
        self.events
            .extend(switch.hidden.into_iter().map(UiEvent::HideView));
        self.events.push(UiEvent::ShowView(switch.shown));
        self.collect_quiz_events();
        if view == View::Submissions {
            self.refresh_submissions();
        }
    }

    /// Option button clicked
    pub fn select_option(&mut self, question: usize, value: u32) -> Result<(), AnswerRejected> {
        let result = self.quiz.answer(question, value, &mut self.transitions);
        if let Err(e) = &result {
            log::debug!("Ignoring answer: {}", e);
        }
        self.collect_quiz_events();
        result
    }

    /// A timer armed for `transition` fired
    pub fn fulfil(&mut self, transition: Transition) -> bool {
        let applied = self.quiz.fulfil(transition, &mut self.transitions);
        self.collect_quiz_events();
        applied
    }

    /// Transitions waiting for a timer, with their delays
    pub fn take_transitions(&mut self) -> Vec<(u32, Transition)> {
        self.transitions.drain()
    }

    /// Form submitted: stamp with the current quiz score and persist
    pub fn submit(
        &mut self,
        form: PitchForm,
        now: DateTime<Utc>,
    ) -> Result<SubmissionRecord, StorageError> {
        let record = SubmissionRecord::new(form, self.quiz.score(), now);
        let stored = self.store.append(record).inspect_err(|e| {
            log::warn!("Failed to save submission: {}", e);
        })?;

        self.events.push(UiEvent::ShowModal);
        self.events.push(UiEvent::Confetti(Confetti::submitted()));
        self.events.push(UiEvent::ResetForm);
        self.refresh_submissions();
        Ok(stored)
    }

    pub fn close_modal(&mut self) {
        self.events.push(UiEvent::CloseModal);
    }

    /// "View submissions" in the success modal
    pub fn view_submissions(&mut self) {
        self.close_modal();
        self.show(View::Submissions);
    }

    /// Clear the inbox once the visitor confirmed. Returns whether anything ran.
    pub fn clear_submissions(&mut self, confirmed: bool) -> Result<bool, StorageError> {
        if !confirmed {
            return Ok(false);
        }
        self.store.clear().inspect_err(|e| {
            log::warn!("Failed to clear submissions: {}", e);
        })?;
        self.refresh_submissions();
        self.events.push(UiEvent::Confetti(Confetti::clean_slate()));
        Ok(true)
    }

    /// Key pressed anywhere on the page
    pub fn key_down(&mut self, key_code: u32) -> bool {
        if !self.konami.push(key_code) {
            return false;
        }
        log::info!("Konami code entered");
        self.events.push(UiEvent::Confetti(Confetti::easter_egg()));
        self.events.push(UiEvent::Alert(EASTER_EGG_MESSAGE));
        true
    }

    /// Take the page updates produced since the last drain
    pub fn drain_events(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }

    fn refresh_submissions(&mut self) {
        let cards = render(&self.store.load());
        self.events.push(UiEvent::RenderSubmissions(cards));
    }

    fn collect_quiz_events(&mut self) {
        self.events
            .extend(self.quiz.drain_events().into_iter().map(UiEvent::Quiz));
    }
}
