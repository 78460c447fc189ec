/// Normalized per-tick input intents
/// The windowing shell translates raw device events into this struct; the
/// core never sees keycodes or mouse state. Held intents persist across
/// ticks, discrete triggers fire for exactly one tick.
#[derive(Clone, Debug, Default)]
pub struct InputIntents {
    /// Forward/backward component, -1..1
    pub move_forward: f32,
    /// Strafe component, -1..1
    pub move_strafe: f32,
    /// Look delta applied this tick (radians)
    pub look_yaw: f32,
    pub look_pitch: f32,
    /// Jump (survival) / ascend (creative) held
    pub jump_held: bool,
    /// Descend (creative) held
    pub down_held: bool,
    /// Break / ignite trigger
    pub primary: bool,
    /// Place trigger
    pub secondary: bool,
    /// Direct hotbar slot selection, 0..9
    pub slot_select: Option<usize>,
    pub toggle_pause: bool,
    pub toggle_inventory: bool,
}

impl InputIntents {
    /// Clear one-tick triggers after the session consumed them.
    /// Held state (movement, jump/down) is left alone.
    pub fn clear_triggers(&mut self) {
        self.look_yaw = 0.0;
        self.look_pitch = 0.0;
        self.primary = false;
        self.secondary = false;
        self.slot_select = None;
        self.toggle_pause = false;
        self.toggle_inventory = false;
    }
}
