//! Hero title typing effect
//!
//! Types the plain text of the title. A title with inline markup (a
//! highlighted name, say) gets that markup back once typing is done.

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    /// Byte length of the revealed prefix
    revealed: usize,
    /// Markup to put back when done
    markup: Option<String>,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revealed: 0,
            markup: None,
        }
    }

    /// Restore `markup` after the last character; ignored when it is just the text
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        let markup = markup.into();
        if markup != self.text {
            self.markup = Some(markup);
        }
        self
    }

    /// Markup to restore, once everything has been typed
    pub fn final_markup(&self) -> Option<&str> {
        if self.is_done() {
            self.markup.as_deref()
        } else {
            None
        }
    }

    /// Text typed so far
    pub fn visible(&self) -> &str {
        &self.text[..self.revealed]
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.text.len()
    }

    /// Reveal one more character; false once everything is shown
    pub fn tick(&mut self) -> bool {
        match self.text[self.revealed..].chars().next() {
            Some(c) => {
                self.revealed += c.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Show the whole text at once (reduced motion)
    pub fn finish(&mut self) {
        self.revealed = self.text.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_per_tick() {
        let mut t = Typewriter::new("Hi!");
        assert_eq!(t.visible(), "");
        assert!(t.tick());
        assert_eq!(t.visible(), "H");
        assert!(t.tick());
        assert!(t.tick());
        assert_eq!(t.visible(), "Hi!");
        assert!(t.is_done());
        assert!(!t.tick());
    }

    #[test]
    fn test_multibyte_characters() {
        let mut t = Typewriter::new("né👋");
        let mut seen = Vec::new();
        while t.tick() {
            seen.push(t.visible().to_string());
        }
        assert_eq!(seen, ["n", "né", "né👋"]);
    }

    #[test]
    fn test_markup_restored_only_when_done() {
        let mut t = Typewriter::new("Hi Sam").with_markup("Hi <span class=\"highlight\">Sam</span>");
        while t.tick() {
            assert_eq!(t.final_markup(), None);
            assert!(!t.visible().contains('<'));
        }
        assert_eq!(t.visible(), "Hi Sam");
        assert_eq!(t.final_markup(), Some("Hi <span class=\"highlight\">Sam</span>"));
    }

    #[test]
    fn test_plain_title_has_no_markup_to_restore() {
        let mut t = Typewriter::new("Hello").with_markup("Hello");
        t.finish();
        assert_eq!(t.final_markup(), None);
    }

    #[test]
    fn test_finish() {
        let mut t = Typewriter::new("Hello");
        t.finish();
        assert_eq!(t.visible(), "Hello");
        assert!(!t.tick());
    }
}
