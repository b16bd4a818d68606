//! Input events delivered to the panel by the host view framework.

use crate::navigation::Direction;

/// Physical keys the panel can react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputKey {
    /// D-pad up
    Up,
    /// D-pad down
    Down,
    /// D-pad left
    Left,
    /// D-pad right
    Right,
    /// Centre / confirm
    Ok,
    /// Back. Never handled by the panel; left to the host.
    Back,
}

impl InputKey {
    /// Navigation direction for the four d-pad keys.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            InputKey::Up => Some(Direction::Up),
            InputKey::Down => Some(Direction::Down),
            InputKey::Left => Some(Direction::Left),
            InputKey::Right => Some(Direction::Right),
            InputKey::Ok | InputKey::Back => None,
        }
    }
}

/// Phase of a key interaction as reported by the input service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputType {
    /// Key went down
    Press,
    /// Key went up
    Release,
    /// Press and release within the short-press window
    Short,
    /// Key held past the long-press threshold
    Long,
    /// Auto-repeat while held
    Repeat,
}

impl InputType {
    /// Press kind for the two event types the panel acts on.
    #[must_use]
    pub const fn press_kind(self) -> Option<PressKind> {
        match self {
            InputType::Short => Some(PressKind::Short),
            InputType::Long => Some(PressKind::Long),
            InputType::Press | InputType::Release | InputType::Repeat => None,
        }
    }
}

/// Press kind passed to button activation handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    /// Short press
    Short,
    /// Long press
    Long,
}

impl PressKind {
    /// Stable name for log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PressKind::Short => "short",
            PressKind::Long => "long",
        }
    }
}

/// One discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    /// Key involved
    pub key: InputKey,
    /// Interaction phase
    pub kind: InputType,
}

impl InputEvent {
    /// Create an event
    #[must_use]
    pub const fn new(key: InputKey, kind: InputType) -> Self {
        Self { key, kind }
    }

    /// Short press of `key`
    #[must_use]
    pub const fn short(key: InputKey) -> Self {
        Self::new(key, InputType::Short)
    }

    /// Long press of `key`
    #[must_use]
    pub const fn long(key: InputKey) -> Self {
        Self::new(key, InputType::Long)
    }
}
