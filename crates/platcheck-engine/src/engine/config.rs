use crate::core::{CANVAS_WIDTH, CELL_SIZE};

/// Physics and timing constants for the whole batch.
///
/// Constructed once and referenced by every episode; resetting an episode
/// never touches this. The jump-arc polynomial and its offsets are tuned
/// together with the corner-containment collision test — changing either
/// side alone changes agent behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Simulated frames per second.
    pub fps: f64,
    /// Horizontal speed in cells per second.
    pub run_speed_cells: f64,
    /// Total flight time of one full jump arc, in seconds.
    pub jump_secs: f64,
    /// Quadratic coefficients of the arc polynomial.
    pub arc_a: f64,
    pub arc_b: f64,
    pub arc_c: f64,
    /// Horizontal and vertical shifts of the polynomial.
    pub arc_t_offset: f64,
    pub arc_y_offset: f64,
    /// Scale from polynomial output to canvas units.
    pub arc_scale: f64,
    /// Arc parameter used when entering a fall; past the apex so height
    /// strictly decreases.
    pub fall_entry_t: f64,
    /// Extra steps granted below the nominal arc floor, letting the tail of
    /// the arc overshoot before a landing is forced.
    pub arc_tail_slack: f64,
    /// Downward probe distance for the ground check.
    pub ground_probe: f64,
    /// Forward and downward probe distance for the trap sensor.
    pub trap_probe: f64,
    /// Displacement below which the stuck sensor fires.
    pub stuck_epsilon: f64,
    /// Distance kept from the right canvas edge when declaring success.
    pub goal_margin: f64,
    /// Episode time budget in simulated seconds.
    pub time_budget_secs: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fps: 100.0,
            run_speed_cells: 6.7,
            jump_secs: 0.9742,
            arc_a: -16.72,
            arc_b: 173.7,
            arc_c: -446.2,
            arc_t_offset: 4.707,
            arc_y_offset: -0.97,
            arc_scale: 30.0,
            fall_entry_t: 1.1,
            arc_tail_slack: 100.0,
            ground_probe: 20.0,
            trap_probe: 10.0,
            stuck_epsilon: 0.01,
            goal_margin: 10.0,
            time_budget_secs: 15.0,
        }
    }
}

impl SimConfig {
    /// Horizontal displacement per frame.
    #[must_use]
    pub fn step_velocity(&self) -> f64 {
        self.run_speed_cells * CELL_SIZE / self.fps
    }

    /// Number of frames in one full jump arc.
    #[must_use]
    pub fn total_jump_frames(&self) -> f64 {
        self.jump_secs * self.fps
    }

    /// Arc parameter advance per accepted jump step.
    #[must_use]
    pub fn jump_step(&self) -> f64 {
        self.jump_secs / self.total_jump_frames()
    }

    /// Initial value of the remaining-steps counter when grounded.
    #[must_use]
    pub fn initial_jump_steps(&self) -> f64 {
        self.total_jump_frames() / 2.0
    }

    /// Counter floor below which a jump step is always rejected.
    #[must_use]
    pub fn jump_step_floor(&self) -> f64 {
        -self.total_jump_frames() / 2.0 - self.arc_tail_slack
    }

    /// Height offset above the launch height at arc parameter `t`.
    ///
    /// Positive while ascending, negative and unbounded past the apex; the
    /// fall branch enters at [`Self::fall_entry_t`] to reuse the descending
    /// side as plain gravity.
    #[must_use]
    pub fn arc_height(&self, t: f64) -> f64 {
        let s = t + self.arc_t_offset;
        self.arc_scale * (self.arc_a * s * s + self.arc_b * s + self.arc_c - self.arc_y_offset)
    }

    /// X-coordinate past which the agent has reached the far edge.
    #[must_use]
    pub fn goal_line(&self) -> f64 {
        CANVAS_WIDTH - CELL_SIZE - self.goal_margin
    }

    /// Time budget expressed in simulated frames.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn frame_budget(&self) -> u64 {
        (self.time_budget_secs * self.fps) as u64
    }
}
