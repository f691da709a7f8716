//! Confetti bursts
//!
//! Options object for the page's global `confetti()` function.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Origin {
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Confetti {
    pub particle_count: u32,
    pub spread: u32,
    pub origin: Origin,
    /// Library default palette when empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<&'static str>,
}

impl Confetti {
    /// Pitch submitted
    pub fn submitted() -> Self {
        Self {
            particle_count: 100,
            spread: 70,
            origin: Origin { y: 0.6 },
            colors: Vec::new(),
        }
    }

    /// Inbox cleared
    pub fn clean_slate() -> Self {
        Self {
            particle_count: 50,
            spread: 60,
            origin: Origin { y: 0.7 },
            colors: vec!["#ff6b6b", "#feca57"],
        }
    }

    /// Konami code entered
    pub fn easter_egg() -> Self {
        Self {
            particle_count: 200,
            spread: 120,
            origin: Origin { y: 0.6 },
            colors: vec!["#ff6b6b", "#feca57", "#667eea", "#764ba2"],
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_shape() {
        let json: serde_json::Value = serde_json::from_str(&Confetti::submitted().to_json()).unwrap();
        assert_eq!(json["particleCount"], 100);
        assert_eq!(json["spread"], 70);
        assert!(json.get("colors").is_none());

        let json: serde_json::Value = serde_json::from_str(&Confetti::easter_egg().to_json()).unwrap();
        assert_eq!(json["colors"].as_array().unwrap().len(), 4);
    }
}
