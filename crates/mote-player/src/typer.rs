//! Typing-effect text rotator
//!
//! Types each phrase out, holds, deletes at double speed, and moves to the
//! next. Driven by the frame clock, so it pauses with the application and
//! stays deterministic under an injected clock.

/// Hold time once a phrase is fully typed, in seconds
const HOLD_FULL: f64 = 2.0;
/// Pause before the next phrase starts, in seconds
const HOLD_EMPTY: f64 = 0.5;

pub struct TypingEffect {
    texts: Vec<String>,
    text_index: usize,
    char_index: usize,
    deleting: bool,
    /// Time until the next step, in seconds
    timer: f64,
    /// Per-character delay while typing, in seconds
    char_delay: f64,
    visible: String,
}

impl TypingEffect {
    pub fn new(texts: Vec<String>) -> Self {
        Self {
            texts,
            text_index: 0,
            char_index: 0,
            deleting: false,
            timer: 0.0,
            char_delay: 0.1,
            visible: String::new(),
        }
    }

    pub fn with_char_delay(mut self, seconds: f64) -> Self {
        self.char_delay = seconds;
        self
    }

    /// The currently visible prefix
    pub fn current(&self) -> &str {
        &self.visible
    }

    /// Advance by `dt` seconds, stepping as many times as the delays allow
    pub fn update(&mut self, dt: f64) {
        if self.texts.is_empty() {
            return;
        }
        self.timer -= dt;
        while self.timer <= 0.0 {
            self.timer += self.step();
        }
    }

    /// One type/delete step; returns the delay until the next one
    fn step(&mut self) -> f64 {
        let text: Vec<char> = self.texts[self.text_index].chars().collect();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(text.len());
        }
        self.visible = text[..self.char_index].iter().collect();

        if !self.deleting && self.char_index == text.len() {
            self.deleting = true;
            return HOLD_FULL;
        }
        if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            return HOLD_EMPTY;
        }

        if self.deleting {
            self.char_delay / 2.0
        } else {
            self.char_delay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typer() -> TypingEffect {
        TypingEffect::new(vec!["AB".into(), "XYZ".into()]).with_char_delay(0.1)
    }

    #[test]
    fn types_one_character_per_delay() {
        let mut t = typer();
        t.update(0.05);
        assert_eq!(t.current(), "A");
        t.update(0.1);
        assert_eq!(t.current(), "AB");
    }

    #[test]
    fn holds_when_fully_typed() {
        let mut t = typer();
        t.update(0.2); // "AB" complete
        assert_eq!(t.current(), "AB");
        // Still holding well within the 2s pause
        t.update(1.0);
        assert_eq!(t.current(), "AB");
    }

    #[test]
    fn deletes_at_double_speed_then_cycles() {
        let mut t = typer();
        t.update(0.2); // fully typed, 1.9s of hold remaining
        t.update(1.93); // hold elapsed, first delete step fires
        assert_eq!(t.current(), "A");
        t.update(0.04); // half the typing delay per deleted char
        assert_eq!(t.current(), "");

        // After the empty pause the next phrase starts typing
        t.update(0.5);
        assert_eq!(t.current(), "X");
        t.update(0.3);
        assert_eq!(t.current(), "XYZ");
    }

    #[test]
    fn empty_text_list_is_inert() {
        let mut t = TypingEffect::new(Vec::new());
        t.update(10.0);
        assert_eq!(t.current(), "");
    }
}
