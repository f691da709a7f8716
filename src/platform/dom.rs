//! Applying page updates to the document
//!
//! Missing elements are skipped; the page never fails visibly.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use super::timers::repeat_every;
use crate::UiEvent;
use crate::consts::COUNT_UP_INTERVAL_MS;
use crate::effects::{CountUpFrame, ScoreCountUp};
use crate::quiz::{QuizEvent, QuizProgress, QuizResult};
use crate::settings::Settings;
use crate::submissions::render_html;

#[wasm_bindgen(inline_js = "
    export function fire_confetti(options) {
        if (typeof confetti === 'function') {
            confetti(JSON.parse(options));
        }
    }
")]
extern "C" {
    fn fire_confetti(options: &str);
}

/// Handle on the document plus the settings that shape animations
pub struct Page {
    document: Document,
    settings: Settings,
}

impl Page {
    pub fn new(document: Document, settings: Settings) -> Self {
        Self { document, settings }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn apply(&self, event: &UiEvent) {
        match event {
            UiEvent::ShowView(view) => {
                if let Some(el) = self.document.get_element_by_id(view.id()) {
                    let _ = el.class_list().add_2("active", "fade-in");
                }
            }
            UiEvent::HideView(view) => {
                if let Some(el) = self.document.get_element_by_id(view.id()) {
                    let _ = el.class_list().remove_1("active");
                }
            }
            UiEvent::Quiz(quiz) => self.apply_quiz(quiz),
            UiEvent::RenderSubmissions(cards) => {
                if let Some(el) = self.document.get_element_by_id("submissions-list") {
                    el.set_inner_html(&render_html(cards));
                }
            }
            UiEvent::ShowModal => self.toggle_modal(true),
            UiEvent::CloseModal => self.toggle_modal(false),
            UiEvent::ResetForm => {
                if let Some(form) = self
                    .document
                    .get_element_by_id("employer-form")
                    .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
                {
                    form.reset();
                }
            }
            UiEvent::Confetti(confetti) => fire_confetti(&confetti.to_json()),
            UiEvent::Alert(message) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(message);
                }
            }
        }
    }

    fn apply_quiz(&self, event: &QuizEvent) {
        match event {
            QuizEvent::Reset => {
                for card in self.query_all(".question-card") {
                    let _ = card.class_list().remove_1("active");
                }
                for btn in self.query_all(".option-btn.selected") {
                    let _ = btn.class_list().remove_1("selected");
                }
                self.set_question_active(0, true);
                if let Some(el) = self.query_html(".quiz-result") {
                    let _ = el.style().set_property("display", "none");
                }
            }
            QuizEvent::OptionSelected { question, value } => {
                let card = format!(".question-card[data-question=\"{}\"]", question);
                for btn in self.query_all(&format!("{} .option-btn", card)) {
                    let _ = btn.class_list().remove_1("selected");
                }
                let chosen = format!("{} .option-btn[data-value=\"{}\"]", card, value);
                if let Some(btn) = self.document.query_selector(&chosen).ok().flatten() {
                    let _ = btn.class_list().add_1("selected");
                }
            }
            QuizEvent::QuestionHidden(index) => self.set_question_active(*index, false),
            QuizEvent::QuestionShown(index) => self.set_question_active(*index, true),
            QuizEvent::Progress(progress) => self.show_progress(progress),
            QuizEvent::Finished(result) => self.show_result(result),
        }
    }

    fn set_question_active(&self, index: usize, active: bool) {
        let selector = format!(".question-card[data-question=\"{}\"]", index);
        if let Some(card) = self.document.query_selector(&selector).ok().flatten() {
            let classes = card.class_list();
            let _ = if active {
                classes.add_1("active")
            } else {
                classes.remove_1("active")
            };
        }
    }

    fn show_progress(&self, progress: &QuizProgress) {
        if let Some(fill) = self.query_html(".progress-fill") {
            let width = format!("{}%", progress.fill_percent());
            let _ = fill.style().set_property("width", &width);
        }
        if let Some(text) = self.document.query_selector(".progress-text").ok().flatten() {
            text.set_text_content(Some(&progress.label()));
        }
    }

    fn show_result(&self, result: &QuizResult) {
        if let Some(el) = self.document.query_selector(".score-message").ok().flatten() {
            el.set_text_content(Some(result.message()));
        }
        if let Some(panel) = self.query_html(".quiz-result") {
            let _ = panel.style().set_property("display", "block");
            let _ = panel.class_list().add_1("slide-up");
        }

        let text = self.document.query_selector(".score-text").ok().flatten();
        let circle = self.query_html(".score-circle");
        let draw = move |frame: &CountUpFrame| {
            if let Some(text) = &text {
                text.set_text_content(Some(&frame.text()));
            }
            if let Some(circle) = &circle {
                let _ = circle
                    .style()
                    .set_property("background", &frame.circle_background());
            }
        };

        let mut count_up = ScoreCountUp::new(result.percentage);
        if !self.settings.effective_count_up() {
            let mut last = None;
            while let Some(frame) = count_up.tick() {
                last = Some(frame);
            }
            if let Some(frame) = last {
                draw(&frame);
            }
            return;
        }
        repeat_every(COUNT_UP_INTERVAL_MS, move || match count_up.tick() {
            Some(frame) => {
                draw(&frame);
                !frame.done
            }
            None => false,
        });
    }

    fn toggle_modal(&self, open: bool) {
        if let Some(modal) = self.document.get_element_by_id("success-modal") {
            let classes = modal.class_list();
            let _ = if open {
                classes.add_1("active")
            } else {
                classes.remove_1("active")
            };
        }
    }

    fn query_html(&self, selector: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    /// All elements matching `selector`
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}
