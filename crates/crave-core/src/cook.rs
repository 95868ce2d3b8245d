//! Cook mode: one instruction step at a time, plus a kitchen timer.

use crate::recipe::Recipe;

/// Preset timer lengths offered in cook mode, in minutes
pub const DEFAULT_TIMER_PRESETS: [u64; 2] = [5, 10];

/// A countdown that loses one second per `tick`.
///
/// Nothing corrects for drift and nothing survives a restart; the UI calls
/// `tick` from a one-second interval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
    active: bool,
}

impl Countdown {
    pub fn start(&mut self, minutes: u64) {
        self.remaining = minutes.saturating_mul(60);
        self.active = self.remaining > 0;
    }

    /// Advance by one second. Returns true when this tick finished the timer.
    pub fn tick(&mut self) -> bool {
        if self.active && self.remaining > 0 {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.active = false;
                return true;
            }
        } else if self.remaining == 0 {
            self.active = false;
        }
        false
    }

    pub fn cancel(&mut self) {
        self.remaining = 0;
        self.active = false;
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    pub fn display(&self) -> String {
        format_time(self.remaining)
    }
}

/// `m:ss`
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone)]
pub struct CookSession {
    pub recipe_name: String,
    steps: Vec<String>,
    current: usize,
    pub timer: Countdown,
}

impl CookSession {
    pub fn new(recipe: &Recipe) -> Self {
        Self::from_steps(recipe.name.clone(), recipe.steps())
    }

    pub fn from_steps(recipe_name: String, steps: Vec<String>) -> Self {
        Self {
            recipe_name,
            steps,
            current: 0,
            timer: Countdown::default(),
        }
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> Option<&str> {
        self.steps.get(self.current).map(String::as_str)
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.steps.len() {
            self.current += 1;
        }
    }

    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    /// "Step 2 of 7", or `None` when there is nothing to paginate
    pub fn progress_label(&self) -> Option<String> {
        if self.steps.is_empty() {
            None
        } else {
            Some(format!("Step {} of {}", self.current + 1, self.steps.len()))
        }
    }
}
