//! Konami code easter egg

use std::collections::VecDeque;

/// Up Up Down Down Left Right Left Right B A
pub const KONAMI_SEQUENCE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

pub const EASTER_EGG_MESSAGE: &str = "🎉 Konami Code activated! You're definitely hired! 🎉";

/// Rolling window over the last key codes
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    recent: VecDeque<u32>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a key code; true when it completes the sequence
    pub fn push(&mut self, key_code: u32) -> bool {
        self.recent.push_back(key_code);
        if self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }
        if self.recent.iter().eq(KONAMI_SEQUENCE.iter()) {
            self.recent.clear();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sequence_fires_once() {
        let mut k = KonamiDetector::new();
        let fired: Vec<bool> = KONAMI_SEQUENCE.iter().map(|&c| k.push(c)).collect();
        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(*fired.last().unwrap());
        // Window was cleared
        assert!(!k.push(65));
    }

    #[test]
    fn test_noise_before_sequence() {
        let mut k = KonamiDetector::new();
        for c in [13, 38, 90] {
            assert!(!k.push(c));
        }
        let last = KONAMI_SEQUENCE.iter().map(|&c| k.push(c)).last().unwrap();
        assert!(last);
    }

    #[test]
    fn test_partial_sequence_does_not_fire() {
        let mut k = KonamiDetector::new();
        for &c in &KONAMI_SEQUENCE[..9] {
            assert!(!k.push(c));
        }
        assert!(!k.push(66));
    }
}
