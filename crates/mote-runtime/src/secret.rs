//! Secret activation gestures for the hidden runner overlay.
//!
//! Two detectors: a rolling key-sequence matcher (the classic ten-key code)
//! and a timed multi-click counter. Both take explicit timestamps/keys so the
//! application layer decides what feeds them and tests stay deterministic.

use std::time::{Duration, Instant};
use winit::keyboard::KeyCode;

/// The classic ten-key reveal sequence
pub const KONAMI_SEQUENCE: [KeyCode; 10] = [
    KeyCode::ArrowUp,
    KeyCode::ArrowUp,
    KeyCode::ArrowDown,
    KeyCode::ArrowDown,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::KeyB,
    KeyCode::KeyA,
];

/// Matches a fixed key sequence against a rolling window of recent presses
pub struct KeySequenceDetector {
    sequence: Vec<KeyCode>,
    buffer: Vec<KeyCode>,
}

impl KeySequenceDetector {
    pub fn new(sequence: &[KeyCode]) -> Self {
        Self {
            sequence: sequence.to_vec(),
            buffer: Vec::with_capacity(sequence.len()),
        }
    }

    /// Feed one key press. Returns true when the tail of the press history
    /// matches the sequence; the buffer resets on a match.
    pub fn push(&mut self, key: KeyCode) -> bool {
        self.buffer.push(key);
        let len = self.sequence.len();
        if self.buffer.len() > len {
            self.buffer.drain(..self.buffer.len() - len);
        }
        if self.buffer == self.sequence {
            self.buffer.clear();
            true
        } else {
            false
        }
    }
}

/// Counts clicks on a hotspot; fires when `required` land within `window`
/// of the first click in the run.
pub struct MultiClickDetector {
    required: u32,
    window: Duration,
    count: u32,
    run_start: Option<Instant>,
}

impl MultiClickDetector {
    pub fn new(required: u32, window: Duration) -> Self {
        Self {
            required,
            window,
            count: 0,
            run_start: None,
        }
    }

    /// Register a click at `now`. Returns true when the gesture completes;
    /// the counter resets on completion or when the window lapses.
    pub fn register(&mut self, now: Instant) -> bool {
        match self.run_start {
            Some(start) if now.duration_since(start) <= self.window => {
                self.count += 1;
            }
            _ => {
                self.run_start = Some(now);
                self.count = 1;
            }
        }

        if self.count >= self.required {
            self.count = 0;
            self.run_start = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_detects_exact_match() {
        let mut detector = KeySequenceDetector::new(&KONAMI_SEQUENCE);
        for key in &KONAMI_SEQUENCE[..9] {
            assert!(!detector.push(*key));
        }
        assert!(detector.push(KeyCode::KeyA));
    }

    #[test]
    fn sequence_survives_leading_noise() {
        let mut detector = KeySequenceDetector::new(&KONAMI_SEQUENCE);
        detector.push(KeyCode::KeyQ);
        detector.push(KeyCode::KeyW);
        for key in &KONAMI_SEQUENCE[..9] {
            assert!(!detector.push(*key));
        }
        assert!(detector.push(KeyCode::KeyA));
    }

    #[test]
    fn sequence_resets_after_match() {
        let mut detector = KeySequenceDetector::new(&KONAMI_SEQUENCE);
        for key in &KONAMI_SEQUENCE {
            detector.push(*key);
        }
        // A single trailing A must not re-trigger
        assert!(!detector.push(KeyCode::KeyA));
    }

    #[test]
    fn wrong_key_breaks_the_run() {
        let mut detector = KeySequenceDetector::new(&KONAMI_SEQUENCE);
        for key in &KONAMI_SEQUENCE[..8] {
            detector.push(*key);
        }
        detector.push(KeyCode::KeyX);
        assert!(!detector.push(KeyCode::KeyB));
        assert!(!detector.push(KeyCode::KeyA));
    }

    #[test]
    fn triple_click_within_window() {
        let mut detector = MultiClickDetector::new(3, Duration::from_millis(500));
        let t0 = Instant::now();
        assert!(!detector.register(t0));
        assert!(!detector.register(t0 + Duration::from_millis(100)));
        assert!(detector.register(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn lapsed_window_restarts_the_count() {
        let mut detector = MultiClickDetector::new(3, Duration::from_millis(500));
        let t0 = Instant::now();
        assert!(!detector.register(t0));
        assert!(!detector.register(t0 + Duration::from_millis(100)));
        // Too late — this click starts a fresh run
        assert!(!detector.register(t0 + Duration::from_millis(800)));
        assert!(!detector.register(t0 + Duration::from_millis(900)));
        assert!(detector.register(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn detector_rearms_after_firing() {
        let mut detector = MultiClickDetector::new(3, Duration::from_millis(500));
        let t0 = Instant::now();
        detector.register(t0);
        detector.register(t0 + Duration::from_millis(50));
        assert!(detector.register(t0 + Duration::from_millis(100)));

        // Next gesture needs three clicks again
        assert!(!detector.register(t0 + Duration::from_millis(150)));
        assert!(!detector.register(t0 + Duration::from_millis(200)));
        assert!(detector.register(t0 + Duration::from_millis(250)));
    }
}
