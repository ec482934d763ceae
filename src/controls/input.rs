use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Pointer buttons currently held.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PointerButtons: u8 {
        const PRIMARY   = 1 << 0;
        const SECONDARY = 1 << 1;
        const MIDDLE    = 1 << 2;
    }
}

/// Device-agnostic input for one frame.
///
/// Whatever polls the mouse, keyboard or joystick writes into this; the
/// camera rigs only ever read it. Per-frame deltas are cleared by
/// [`end_frame`](Self::end_frame), held state (buttons, axes) persists.
#[derive(Default, Debug, Clone)]
pub struct RigInput {
    /// Current pointer position in window pixels
    pub cursor_position: Vec2,
    /// Pointer motion since the last frame
    pub cursor_delta: Vec2,
    /// Scroll amount this frame (positive `y` zooms in)
    pub scroll_delta: Vec2,
    /// Window size in pixels
    pub screen_size: Vec2,
    pub buttons: PointerButtons,
    /// Keyboard movement axis: `x` strafes right, `y` moves forward. Each in `[-1, 1]`.
    pub move_axis: Vec2,
    /// Joystick axis, same convention as `move_axis`.
    pub joystick_axis: Vec2,
}

impl RigInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears per-frame deltas so the camera stops once input stops.
    pub fn end_frame(&mut self) {
        self.cursor_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    pub fn handle_cursor_move(&mut self, x: f32, y: f32) {
        let new_pos = Vec2::new(x, y);
        // The first reported position only seeds the cursor.
        if self.cursor_position != Vec2::ZERO {
            self.cursor_delta += new_pos - self.cursor_position;
        }
        self.cursor_position = new_pos;
    }

    pub fn set_button(&mut self, button: PointerButtons, pressed: bool) {
        self.buttons.set(button, pressed);
    }

    pub fn handle_scroll(&mut self, x: f32, y: f32) {
        self.scroll_delta += Vec2::new(x, y);
    }

    pub fn set_move_axis(&mut self, axis: Vec2) {
        self.move_axis = axis.clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    pub fn set_joystick_axis(&mut self, axis: Vec2) {
        self.joystick_axis = axis.clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    #[inline]
    #[must_use]
    pub fn is_pressed(&self, button: PointerButtons) -> bool {
        self.buttons.contains(button)
    }
}
