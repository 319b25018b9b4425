use crate::Params;

/// Logical keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    P1Left,
    P1Right,
    P2Left,
    P2Right,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::P1Left, Key::P1Right, Key::P2Left, Key::P2Right];

    fn index(self) -> usize {
        match self {
            Key::P1Left => 0,
            Key::P1Right => 1,
            Key::P2Left => 2,
            Key::P2Right => 3,
        }
    }
}

/// Anything that can answer "is this key held right now"
pub trait InputSource {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Held-key snapshot, updated by the host from press/release events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        self.held[key.index()] = pressed;
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    pub fn clear(&mut self) {
        self.held = [false; 4];
    }
}

impl InputSource for InputState {
    fn is_pressed(&self, key: Key) -> bool {
        self.held[key.index()]
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Turns wall-clock time into whole simulation ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct TickClock {
    accumulator: f32,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed` seconds and return how many fixed ticks are now due
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        // Clamp dt to prevent large jumps
        self.accumulator += elapsed.clamp(0.0, Params::MAX_DT);

        let mut ticks = 0;
        while self.accumulator >= Params::FIXED_DT {
            self.accumulator -= Params::FIXED_DT;
            ticks += 1;
        }
        ticks
    }

    /// Fraction of the next tick already accumulated
    pub fn alpha(&self) -> f32 {
        self.accumulator / Params::FIXED_DT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_press_release() {
        let mut input = InputState::new();
        assert!(!input.is_pressed(Key::P1Left));

        input.press(Key::P1Left);
        input.press(Key::P2Right);
        assert!(input.is_pressed(Key::P1Left));
        assert!(input.is_pressed(Key::P2Right));
        assert!(!input.is_pressed(Key::P1Right));

        input.release(Key::P1Left);
        assert!(!input.is_pressed(Key::P1Left));
    }

    #[test]
    fn test_input_state_clear() {
        let mut input = InputState::new();
        for key in Key::ALL {
            input.press(key);
        }
        input.clear();
        for key in Key::ALL {
            assert!(!input.is_pressed(key), "{:?} should be released", key);
        }
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_tick_clock_accumulates_partial_frames() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(0.010), 0, "Not a full tick yet");
        assert_eq!(clock.advance(0.010), 1, "Two partial frames make one tick");
        assert!(clock.alpha() > 0.0 && clock.alpha() < 1.0);
    }

    #[test]
    fn test_tick_clock_runs_multiple_ticks() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(0.034), 2);
    }

    #[test]
    fn test_tick_clock_clamps_large_jumps() {
        let mut clock = TickClock::new();
        let ticks = clock.advance(5.0);
        assert!(
            (5..=6).contains(&ticks),
            "A long stall should only catch up MAX_DT worth of ticks, got {}",
            ticks
        );
    }

    #[test]
    fn test_tick_clock_ignores_negative_time() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }
}
