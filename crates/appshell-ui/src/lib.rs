//! Menu fitting and layout logic for the application shell.
//!
//! Provides:
//! - `fit_menu` - Partition menu items into inline and overflow sets
//! - `SidebarGesture` - State machine for the mobile slide-out sidebar
//! - Relative timestamp formatting and refresh cadence
//!
//! Nothing here touches a widget tree; the host measures widths, owns
//! the event sources and applies the computed results.

pub mod menu;
pub mod sidebar;
pub mod timestamps;

pub use menu::{MenuItem, MenuLayout, ViewportState, fit_menu, fit_menu_for_viewport};
pub use sidebar::{GestureCommand, SidebarGesture};
pub use timestamps::relative_modified_date;
