//! Tuning constants for the game core.
//!
//! Plain numeric constants with no runtime dependency. Both the engine
//! crate and the native simtest use these.

/// Player and NPC avatar bounding boxes, in room units.
pub mod avatar {
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 56.0;
    pub const NPC_WIDTH: f32 = 40.0;
    pub const NPC_HEIGHT: f32 = 56.0;

    /// Distance covered by one discrete movement command.
    pub const MOVE_STEP: f32 = 16.0;
}

/// Interaction zone sizing.
pub mod interaction {
    /// How far beyond the player's own box an object/NPC is reachable.
    pub const RADIUS: f32 = 24.0;
}

/// NPC behavior loop tuning.
pub mod npc {
    /// Fixed simulation tick for the behavior loop.
    pub const TICK_MS: u64 = 50;
    /// Distance an NPC walks per tick.
    pub const SPEED: f32 = 4.0;
    /// Work duration range (uniform), in ms.
    pub const WORK_MIN_MS: u64 = 2000;
    pub const WORK_MAX_MS: u64 = 5000;
    /// Minimum gap between player-collision shouts from one NPC.
    pub const SHOUT_COOLDOWN_MS: u64 = 3000;
    /// Vertical gap between a station's bottom edge and the walk target.
    pub const STATION_GAP: f32 = 5.0;
}

/// Deadlines for the timed UI sub-states.
pub mod timing {
    /// Directional kick animation before a task modal opens.
    pub const KICK_MS: u64 = 400;
    /// Modal slide-in flag self-clears after this long.
    pub const MODAL_SLIDE_MS: u64 = 500;
    /// Default notification auto-dismiss.
    pub const NOTIFICATION_MS: u64 = 3000;
    /// Room-transition banner dismissal.
    pub const BANNER_MS: u64 = 2000;
}
