// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer identity and buttons.

/// Identifier of an active pointer (mouse, pen, or one touch contact).
///
/// Hosts should use the platform's pointer id, for example DOM
/// `PointerEvent.pointerId` or a winit device/finger id folded into a `u64`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// The button that triggered a pointer-down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Left mouse button, pen contact, or touch contact.
    #[default]
    Primary,
    /// Middle mouse button or wheel press.
    Auxiliary,
    /// Right mouse button or pen barrel button.
    Secondary,
    /// Any other button, by DOM button index.
    Other(u16),
}

impl PointerButton {
    /// Maps a DOM `MouseEvent.button` value.
    ///
    /// Negative values (`-1`, "no button changed") map to [`PointerButton::Primary`],
    /// since pointer-move events on touch and pen report it that way.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            i16::MIN..=0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other.unsigned_abs()),
        }
    }

    /// Returns `true` for the button that starts pans and drags.
    #[must_use]
    pub fn is_primary(self) -> bool {
        self == Self::Primary
    }
}
