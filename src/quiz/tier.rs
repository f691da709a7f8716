//! Compatibility tiers
//!
//! The quiz result screen grades on four bands while the submission badges
//! only use three (anything under 60% is "poor" on a badge). Both share the
//! same thresholds; the badge simply has no mediocre band.

/// Lower bound (inclusive) of the excellent band
pub const EXCELLENT_THRESHOLD: u32 = 80;
/// Lower bound (inclusive) of the good band
pub const GOOD_THRESHOLD: u32 = 60;
/// Lower bound (inclusive) of the mediocre band (result screen only)
pub const MEDIOCRE_THRESHOLD: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Excellent,
    Good,
    Mediocre,
    Poor,
}

impl Tier {
    /// Tier shown on the quiz result screen (four bands)
    pub fn for_result(percentage: u32) -> Self {
        if percentage >= EXCELLENT_THRESHOLD {
            Tier::Excellent
        } else if percentage >= GOOD_THRESHOLD {
            Tier::Good
        } else if percentage >= MEDIOCRE_THRESHOLD {
            Tier::Mediocre
        } else {
            Tier::Poor
        }
    }

    /// Tier shown on a submission card badge (three bands)
    pub fn for_badge(percentage: u32) -> Self {
        match Self::for_result(percentage) {
            Tier::Mediocre => Tier::Poor,
            tier => tier,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Mediocre => "mediocre",
            Tier::Poor => "poor",
        }
    }

    /// CSS class of the score badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Tier::Excellent => "score-excellent",
            Tier::Good => "score-good",
            Tier::Mediocre => "score-mediocre",
            Tier::Poor => "score-poor",
        }
    }

    /// Message under the result circle
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Excellent => "🎉 Excellent! You seem like my kind of employer!",
            Tier::Good => "👍 Not bad! We might be able to work something out.",
            Tier::Mediocre => "😐 Hmm, you need some work on your employer game.",
            Tier::Poor => "😬 Yikes! Maybe reconsider your management style?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_boundaries() {
        assert_eq!(Tier::for_result(100), Tier::Excellent);
        assert_eq!(Tier::for_result(80), Tier::Excellent);
        assert_eq!(Tier::for_result(79), Tier::Good);
        assert_eq!(Tier::for_result(60), Tier::Good);
        assert_eq!(Tier::for_result(59), Tier::Mediocre);
        assert_eq!(Tier::for_result(40), Tier::Mediocre);
        assert_eq!(Tier::for_result(39), Tier::Poor);
        assert_eq!(Tier::for_result(0), Tier::Poor);
    }

    #[test]
    fn test_badge_boundaries() {
        assert_eq!(Tier::for_badge(80), Tier::Excellent);
        assert_eq!(Tier::for_badge(79), Tier::Good);
        assert_eq!(Tier::for_badge(60), Tier::Good);
        assert_eq!(Tier::for_badge(59), Tier::Poor);
        assert_eq!(Tier::for_badge(40), Tier::Poor);
    }

    #[test]
    fn test_result_and_badge_diverge_in_mediocre_band() {
        // 22 points -> 44%
        let pct = crate::score_percentage(22);
        assert_eq!(Tier::for_result(pct), Tier::Mediocre);
        assert_eq!(Tier::for_badge(pct), Tier::Poor);
    }

    #[test]
    fn test_names_and_badge_classes() {
        assert_eq!(Tier::Excellent.as_str(), "excellent");
        assert_eq!(Tier::Poor.badge_class(), "score-poor");
    }
}
