//! Input events consumed by the simulation

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move forward
    W,
    /// Strafe left
    A,
    /// Move backward
    S,
    /// Strafe right
    D,
    /// Jump
    Space,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` such as `"KeyW"` or `"Space"`.
    /// Keys the game ignores map to `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Self::W),
            "KeyA" => Some(Self::A),
            "KeyS" => Some(Self::S),
            "KeyD" => Some(Self::D),
            "Space" => Some(Self::Space),
            _ => None,
        }
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button, fires the gun
    Left,
    /// Wheel button
    Middle,
    /// Secondary button
    Right,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` index
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }
}

/// One input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key pressed. Also captures input if it is not captured yet.
    KeyDown(Key),
    /// Key released
    KeyUp(Key),
    /// Mouse button pressed. Also captures input if it is not captured yet.
    MouseDown(MouseButton),
    /// Relative mouse movement; only turns the view while captured
    MouseMove {
        /// Horizontal movement, positive to the right
        dx: f32,
        /// Vertical movement, positive downward
        dy: f32,
    },
    /// Input capture released (the player pressed Escape)
    Release,
}
