//! Page sections
//!
//! Exactly one `.section` is active at a time.

use crate::quiz::QuizEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Landing,
    Skills,
    Quiz,
    Apply,
    Submissions,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Landing,
        View::Skills,
        View::Quiz,
        View::Apply,
        View::Submissions,
    ];

    /// Element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Skills => "skills",
            View::Quiz => "quiz",
            View::Apply => "apply",
            View::Submissions => "submissions",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.id() == id)
    }
}

/// Result of a navigation: what to hide, what to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSwitch {
    pub hidden: Vec<View>,
    pub shown: View,
}

/// Tracks the visible section
#[derive(Debug, Default)]
pub struct ViewNavigator {
    current: View,
}

impl ViewNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Make `view` the only visible section. Entering the quiz starts a fresh run.
    pub fn show(&mut self, view: View, quiz: &mut QuizEngine) -> ViewSwitch {
        if view == View::Quiz {
            quiz.reset();
        }
        self.current = view;
        log::debug!("Showing section `{}`", view.id());
        ViewSwitch {
            hidden: View::ALL.into_iter().filter(|v| *v != view).collect(),
            shown: view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::TransitionQueue;

    #[test]
    fn test_show_hides_all_others() {
        let mut nav = ViewNavigator::new();
        let mut quiz = QuizEngine::new();
        let switch = nav.show(View::Skills, &mut quiz);
        assert_eq!(switch.shown, View::Skills);
        assert_eq!(switch.hidden.len(), View::ALL.len() - 1);
        assert!(!switch.hidden.contains(&View::Skills));
        assert_eq!(nav.current(), View::Skills);
    }

    #[test]
    fn test_entering_quiz_resets_engine() {
        let mut nav = ViewNavigator::new();
        let mut quiz = QuizEngine::new();
        let mut queue = TransitionQueue::new();
        quiz.answer(0, 10, &mut queue).unwrap();
        let run = quiz.run();

        nav.show(View::Quiz, &mut quiz);
        assert_eq!(quiz.score(), 0);
        assert!(quiz.answers().is_empty());
        assert_ne!(quiz.run(), run);
    }

    #[test]
    fn test_other_views_leave_quiz_alone() {
        let mut nav = ViewNavigator::new();
        let mut quiz = QuizEngine::new();
        let mut queue = TransitionQueue::new();
        quiz.answer(0, 10, &mut queue).unwrap();

        nav.show(View::Apply, &mut quiz);
        assert_eq!(quiz.score(), 10);
    }

    #[test]
    fn test_ids_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_id(view.id()), Some(view));
        }
        assert_eq!(View::from_id("contact"), None);
    }
}
