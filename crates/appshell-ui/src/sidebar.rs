//! Slide-out sidebar gesture management.
//!
//! On small windows the app navigation lives in a drawer opened by a
//! drag gesture. Apps may temporarily forbid the gesture (a map view
//! that pans, say); a forbidden enable is remembered and replayed once
//! the gesture is allowed again.

use crate::menu::MOBILE_BREAKPOINT_PX;

/// What the host should do with its drawer widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureCommand {
    /// Enable the drag gesture.
    Enable,
    /// Close the drawer and disable the gesture, ending any drag.
    Disable,
}

/// State machine deciding when the sidebar drag gesture is live.
#[derive(Debug)]
pub struct SidebarGesture {
    enabled: bool,
    allowed: bool,
    enable_pending: bool,
}

impl Default for SidebarGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarGesture {
    /// Gesture starts disabled but allowed; the first resize decides.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: false,
            allowed: true,
            enable_pending: false,
        }
    }

    /// Whether the drag gesture is currently live.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// React to a window resize.
    pub fn on_resize(&mut self, window_width: f64) -> Option<GestureCommand> {
        if window_width > MOBILE_BREAKPOINT_PX {
            self.enabled = false;
            self.enable_pending = false;
            Some(GestureCommand::Disable)
        } else if self.allowed {
            self.enabled = true;
            self.enable_pending = false;
            Some(GestureCommand::Enable)
        } else {
            self.enable_pending = true;
            None
        }
    }

    /// Allow the gesture again, replaying a deferred enable if one is
    /// pending.
    pub fn allow(&mut self) -> Option<GestureCommand> {
        self.allowed = true;
        if self.enable_pending {
            self.enabled = true;
            self.enable_pending = false;
            return Some(GestureCommand::Enable);
        }
        None
    }

    /// Forbid the gesture. A live gesture is torn down and remembered
    /// as pending so a later [`Self::allow`] restores it.
    pub fn disallow(&mut self) -> Option<GestureCommand> {
        self.allowed = false;
        if self.enabled {
            self.enabled = false;
            self.enable_pending = true;
            return Some(GestureCommand::Disable);
        }
        None
    }
}
