//! Skill card level bars and hover tilt

/// Transform applied while the pointer is over a skill card
pub const HOVER_TRANSFORM: &str = "translateY(-10px) rotateY(5deg)";
/// Transform restored when the pointer leaves
pub const REST_TRANSFORM: &str = "translateY(0) rotateY(0)";

/// CSS custom property the level bar animates to
pub const LEVEL_PROPERTY: &str = "--level";

/// `--level` value for a `data-level` attribute, or `None` if it is not a number
pub fn level_style(data_level: &str) -> Option<String> {
    let level: f64 = data_level.trim().parse().ok()?;
    if !level.is_finite() {
        return None;
    }
    let level = level.clamp(0.0, 100.0);
    Some(format!("{}%", level))
}

/// Card transform for a hover state
pub fn card_transform(hovered: bool) -> &'static str {
    if hovered { HOVER_TRANSFORM } else { REST_TRANSFORM }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_style() {
        assert_eq!(level_style("90").as_deref(), Some("90%"));
        assert_eq!(level_style(" 75 ").as_deref(), Some("75%"));
        assert_eq!(level_style("62.5").as_deref(), Some("62.5%"));
        assert_eq!(level_style("0").as_deref(), Some("0%"));
    }

    #[test]
    fn test_level_style_rejects_non_numbers() {
        assert_eq!(level_style(""), None);
        assert_eq!(level_style("high"), None);
        assert_eq!(level_style("80%"), None);
        assert_eq!(level_style("NaN"), None);
        assert_eq!(level_style("inf"), None);
    }

    #[test]
    fn test_level_style_clamped() {
        assert_eq!(level_style("150").as_deref(), Some("100%"));
        assert_eq!(level_style("-5").as_deref(), Some("0%"));
    }

    #[test]
    fn test_card_transform() {
        assert_eq!(card_transform(true), "translateY(-10px) rotateY(5deg)");
        assert_eq!(card_transform(false), "translateY(0) rotateY(0)");
    }
}
