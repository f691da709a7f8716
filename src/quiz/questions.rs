//! The fixed question set

use std::fmt::Write;

use crate::consts::QUESTION_COUNT;
use crate::html::escape_html;

/// One selectable answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub label: &'static str,
    /// Points added to the score when chosen (0-10)
    pub points: u32,
}

/// A multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// 0-based position in the quiz
    pub id: usize,
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

impl Question {
    /// Whether `points` is the value of one of this question's options
    pub fn offers(&self, points: u32) -> bool {
        self.options.iter().any(|o| o.points == points)
    }
}

const fn opt(label: &'static str, points: u32) -> QuizOption {
    QuizOption { label, points }
}

pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: 0,
        prompt: "How does your team feel about remote work?",
        options: &[
            opt("Work from anywhere, we're fully remote", 10),
            opt("Hybrid, a few office days a week", 7),
            opt("Remote on special occasions", 4),
            opt("Butts in seats, 9 to 5", 0),
        ],
    },
    Question {
        id: 1,
        prompt: "What's your deployment process like?",
        options: &[
            opt("CI/CD on every merge, with tests", 10),
            opt("Weekly release train", 8),
            opt("Someone FTPs the files on Friday night", 2),
            opt("We don't talk about deployments", 0),
        ],
    },
    Question {
        id: 2,
        prompt: "How are meetings handled?",
        options: &[
            opt("Async first, meetings only when needed", 10),
            opt("A short daily standup", 6),
            opt("Status meetings about status meetings", 2),
            opt("The calendar is the job", 0),
        ],
    },
    Question {
        id: 3,
        prompt: "What's the learning budget?",
        options: &[
            opt("Conferences, courses and books, just ask", 10),
            opt("A yearly allowance", 8),
            opt("Free webinars count, right?", 4),
            opt("Learn on your own time", 0),
        ],
    },
    Question {
        id: 4,
        prompt: "How would you describe the coffee situation?",
        options: &[
            opt("Espresso machine and a barista", 10),
            opt("Decent beans, self-serve", 6),
            opt("Instant, but plenty of it", 2),
            opt("Bring your own", 0),
        ],
    },
];

/// Question at `index`, `None` past the end
pub fn question(index: usize) -> Option<&'static Question> {
    QUESTIONS.get(index)
}

/// Markup for all question cards; only question 0 starts active
pub fn render_html() -> String {
    let mut html = String::new();
    for q in &QUESTIONS {
        let active = if q.id == 0 { " active" } else { "" };
        let _ = write!(
            html,
            "<div class=\"question-card{}\" data-question=\"{}\"><h3>{}</h3><div class=\"options\">",
            active,
            q.id,
            escape_html(q.prompt)
        );
        for o in q.options {
            let _ = write!(
                html,
                "<button class=\"option-btn\" data-value=\"{}\">{}</button>",
                o.points,
                escape_html(o.label)
            );
        }
        html.push_str("</div></div>");
    }
    html
}
