//! Simulation clock, a child of the external game clock.
//!
//! Owns its own time scale and pause state so the water can slow down or
//! freeze independently of frame rate; the caller supplies the raw frame
//! delta every tick.

/// Pausable, scalable accumulation of simulation time
#[derive(Debug, Clone)]
pub struct SimulationClock {
    time_scale: f32,
    paused: bool,
    elapsed_s: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            paused: false,
            elapsed_s: 0.0,
        }
    }
}

impl SimulationClock {
    /// Advance by an external frame delta (seconds)
    pub fn advance(&mut self, frame_dt_s: f32) {
        if !self.paused {
            self.elapsed_s += frame_dt_s * self.time_scale;
        }
    }

    /// Accumulated simulation time in seconds
    pub fn elapsed_s(&self) -> f32 {
        self.elapsed_s
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip the pause state, returning the new state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }
}
