//! Animation state selection and frame playback

/// Discrete animation states, selected from velocity magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Walk,
    Run,
}

/// Frame count and playback rate for one state
#[derive(Debug, Clone, Copy)]
pub struct FrameSpec {
    pub frames: u32,
    pub fps: f64,
}

/// Speed below which the character idles (units: pixels per frame)
const IDLE_THRESHOLD: f32 = 0.5;
/// Speed below which the character walks; at or above it runs
const WALK_THRESHOLD: f32 = 4.0;

impl MotionState {
    /// Select a state from velocity magnitude via the fixed thresholds
    pub fn select(speed: f32) -> Self {
        if speed < IDLE_THRESHOLD {
            MotionState::Idle
        } else if speed < WALK_THRESHOLD {
            MotionState::Walk
        } else {
            MotionState::Run
        }
    }

    /// Per-state frame table
    pub const fn spec(&self) -> FrameSpec {
        match self {
            MotionState::Idle => FrameSpec {
                frames: 4,
                fps: 4.0,
            },
            MotionState::Walk => FrameSpec {
                frames: 6,
                fps: 8.0,
            },
            MotionState::Run => FrameSpec {
                frames: 6,
                fps: 12.0,
            },
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            MotionState::Idle => "IDLE",
            MotionState::Walk => "WALK",
            MotionState::Run => "RUN",
        }
    }
}

/// Advances sprite frames for the current state; transitions reset playback
#[derive(Debug, Default)]
pub struct FramePlayer {
    state: MotionState,
    frame: u32,
    frame_time: f64,
}

impl FramePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Switch state. A change restarts playback from frame 0 with a fresh
    /// frame timer; re-setting the current state is a no-op.
    pub fn set_state(&mut self, state: MotionState) {
        if state != self.state {
            self.state = state;
            self.frame = 0;
            self.frame_time = 0.0;
        }
    }

    /// Accumulate `dt` seconds and advance the frame at the state's rate
    pub fn advance(&mut self, dt: f64) {
        let spec = self.state.spec();
        self.frame_time += dt;
        if self.frame_time >= 1.0 / spec.fps {
            self.frame = (self.frame + 1) % spec.frames;
            self.frame_time = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_thresholds() {
        assert_eq!(MotionState::select(0.3), MotionState::Idle);
        assert_eq!(MotionState::select(2.0), MotionState::Walk);
        assert_eq!(MotionState::select(10.0), MotionState::Run);
    }

    #[test]
    fn selector_boundary_values() {
        assert_eq!(MotionState::select(0.0), MotionState::Idle);
        assert_eq!(MotionState::select(0.5), MotionState::Walk);
        assert_eq!(MotionState::select(4.0), MotionState::Run);
    }

    #[test]
    fn transition_resets_playback() {
        let mut player = FramePlayer::new();
        player.advance(0.3); // past the idle frame interval
        assert_eq!(player.frame(), 1);

        player.set_state(MotionState::Run);
        assert_eq!(player.frame(), 0);
        assert_eq!(player.state(), MotionState::Run);
    }

    #[test]
    fn same_state_keeps_playback() {
        let mut player = FramePlayer::new();
        player.advance(0.3);
        let frame = player.frame();
        player.set_state(MotionState::Idle);
        assert_eq!(player.frame(), frame);
    }

    #[test]
    fn frames_advance_at_state_rate() {
        let mut player = FramePlayer::new();
        player.set_state(MotionState::Run); // 12 fps
        player.advance(1.0 / 24.0);
        assert_eq!(player.frame(), 0);
        player.advance(1.0 / 24.0);
        assert_eq!(player.frame(), 1);
    }

    #[test]
    fn frames_wrap_around() {
        let mut player = FramePlayer::new();
        player.set_state(MotionState::Walk); // 6 frames @ 8 fps
        for _ in 0..6 {
            player.advance(1.0 / 8.0);
        }
        assert_eq!(player.frame(), 0);
    }
}
