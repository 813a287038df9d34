//! Game action definitions

/// Directional actions the player cube responds to
///
/// Keyboard: arrow keys. Gamepad: d-pad or left stick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    /// Away from the camera (-Z)
    MoveForward,
    /// Toward the camera (+Z)
    MoveBackward,
}
