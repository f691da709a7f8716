//! Result circle count-up
//!
//! Every frame adds `COUNT_UP_STEP` to the shown percentage until it reaches
//! the target, then settles on exactly the target.

use crate::consts::COUNT_UP_STEP;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUpFrame {
    /// Percentage to print
    pub shown: u32,
    /// Filled sweep of the conic gradient (degrees)
    pub sweep_degrees: f32,
    pub done: bool,
}

impl CountUpFrame {
    pub fn text(&self) -> String {
        format!("{}%", self.shown)
    }

    /// CSS background for `.score-circle`
    pub fn circle_background(&self) -> String {
        format!(
            "conic-gradient(#667eea 0deg, #764ba2 {deg}deg, #e0e0e0 {deg}deg, #e0e0e0 360deg)",
            deg = self.sweep_degrees
        )
    }
}

#[derive(Debug, Clone)]
pub struct ScoreCountUp {
    target: u32,
    current: u32,
    done: bool,
}

impl ScoreCountUp {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            current: 0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Next frame, `None` once the target has been shown
    pub fn tick(&mut self) -> Option<CountUpFrame> {
        if self.done {
            return None;
        }
        self.current += COUNT_UP_STEP;
        let shown = if self.current >= self.target {
            self.done = true;
            self.target
        } else {
            self.current
        };
        Some(CountUpFrame {
            shown,
            sweep_degrees: shown as f32 / 100.0 * 360.0,
            done: self.done,
        })
    }
}
