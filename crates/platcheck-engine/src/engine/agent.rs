use crate::{
    core::{CANVAS_WIDTH, CELL_SIZE, Rect, overlaps_any},
    engine::config::SimConfig,
};

/// Manual override signals for one frame, ORed with the agent's own policy.
///
/// The scripted agent always runs right and jumps when a sensor raised the
/// pending flag; a rendering surface may OR in keyboard input on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub move_right: bool,
    pub jump: bool,
}

impl FrameInput {
    /// The scripted policy on its own: run right, no manual jump.
    #[must_use]
    pub const fn autonomous() -> Self {
        Self {
            move_right: true,
            jump: false,
        }
    }

    /// Combines two input sources; a signal is active if either side set it.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self {
            move_right: self.move_right || other.move_right,
            jump: self.jump || other.jump,
        }
    }
}

/// Jump-arc state. A fall is a jump entered past the apex.
#[derive(Debug, Clone, Copy, PartialEq)]
struct JumpState {
    active: bool,
    /// Arc parameter, advanced by one step per accepted frame.
    t: f64,
    /// Remaining-steps counter; rejection is forced at the floor.
    steps_left: f64,
    /// Agent height at launch; arc offsets apply relative to this.
    launch_height: f64,
}

impl JumpState {
    fn grounded(config: &SimConfig) -> Self {
        Self {
            active: false,
            t: 0.0,
            steps_left: config.initial_jump_steps(),
            launch_height: 0.0,
        }
    }
}

/// The reactive agent: one mutable rectangle plus jump state and sensors.
///
/// All movement is collision-gated through the corner-containment test; the
/// agent never resolves penetration because rejected moves are simply not
/// committed.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    rect: Rect,
    jump: JumpState,
    pending_jump: bool,
    /// X-coordinate recorded by the previous frame's stuck sensor.
    last_x: f64,
}

impl Agent {
    #[must_use]
    pub fn new(start: Rect, config: &SimConfig) -> Self {
        Self {
            rect: start,
            jump: JumpState::grounded(config),
            pending_jump: false,
            last_x: 0.0,
        }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// True while on the jump arc, whether ascending or falling.
    #[must_use]
    pub fn is_airborne(&self) -> bool {
        self.jump.active
    }

    /// True when a sensor has requested a jump for the next frame.
    #[must_use]
    pub fn pending_jump(&self) -> bool {
        self.pending_jump
    }

    /// Advances the agent by one frame.
    ///
    /// Stage order is load-bearing: jump before run means a jump launched
    /// this frame takes its first arc step next frame, and the sensors run
    /// last so their flag is consumed one frame later.
    pub fn step(&mut self, config: &SimConfig, solids: &[Rect], input: FrameInput) {
        self.apply_jump(config, solids, input.jump);
        self.apply_run(config, solids, input.move_right);
        self.apply_gravity(config, solids);
        self.sense_stuck(config);
        self.sense_trap(config, solids);
    }

    fn apply_jump(&mut self, config: &SimConfig, solids: &[Rect], manual_jump: bool) {
        if !self.jump.active {
            if manual_jump || self.pending_jump {
                self.jump.active = true;
                self.jump.launch_height = self.rect.y;
                self.pending_jump = false;
            }
            return;
        }

        // A jump request raised mid-air is dropped, not queued.
        self.pending_jump = false;

        let mut candidate = self.rect;
        candidate.y = self.jump.launch_height - config.arc_height(self.jump.t);
        if self.jump.steps_left >= config.jump_step_floor() && !overlaps_any(&candidate, solids) {
            self.rect = candidate;
            self.jump.steps_left -= 1.0;
            self.jump.t += config.jump_step();
        } else {
            // Landing: either the next height overlaps a solid or the arc
            // ran out of steps.
            self.jump = JumpState::grounded(config);
        }
    }

    fn apply_run(&mut self, config: &SimConfig, solids: &[Rect], move_right: bool) {
        if !move_right {
            return;
        }
        let candidate = self.rect.translated(config.step_velocity(), 0.0);
        if candidate.x + CELL_SIZE < CANVAS_WIDTH && !overlaps_any(&candidate, solids) {
            self.rect = candidate;
        }
    }

    /// Enters the descending half of the arc when nothing is underfoot.
    fn apply_gravity(&mut self, config: &SimConfig, solids: &[Rect]) {
        if self.jump.active {
            return;
        }
        let probe = self.rect.translated(0.0, config.ground_probe);
        if !overlaps_any(&probe, solids) {
            self.jump = JumpState {
                active: true,
                t: config.fall_entry_t,
                steps_left: 0.0,
                launch_height: self.rect.y,
            };
        }
    }

    /// No forward progress since the last frame: request a jump.
    fn sense_stuck(&mut self, config: &SimConfig) {
        if self.rect.x - self.last_x < config.stuck_epsilon {
            self.pending_jump = true;
        }
        self.last_x = self.rect.x;
    }

    /// A probe ahead and below finds no ground: a gap or edge is coming up.
    fn sense_trap(&mut self, config: &SimConfig, solids: &[Rect]) {
        let probe = self.rect.translated(config.trap_probe, config.trap_probe);
        if !self.jump.active && !overlaps_any(&probe, solids) {
            self.pending_jump = true;
        }
    }
}
