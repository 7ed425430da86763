//! Responsive app-menu fitting.
//!
//! Given the measured horizontal space and an ordered list of menu
//! items, decide how many stay inline and which move into the
//! collapsed overflow menu. Pure recomputation: the host calls this on
//! every resize and on initial layout.

use serde::{Deserialize, Serialize};

/// Window widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Share of the available width the inline menu may occupy on desktop.
const APP_MENU_WIDTH_SHARE: f64 = 0.33;

/// Floor applied to the width reserved next to the menu.
const MIN_RESERVED_WIDTH_PX: f64 = 210.0;

/// One entry of the app menu, in display order.
///
/// The first item has the highest priority to remain visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable identifier of the app/section.
    pub id: String,
    /// Whether this entry is the currently open app.
    #[serde(default)]
    pub is_active: bool,
}

impl MenuItem {
    /// Create an inactive item.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_active: false,
        }
    }

    /// Create the active item.
    #[must_use]
    pub fn active(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_active: true,
        }
    }
}

/// Measured header geometry, recomputed by the host on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// Full width of the header bar in pixels.
    pub total_header_width: f64,
    /// Width already taken by the logo and right-hand controls.
    pub reserved_width: f64,
    /// Whether the window is below the mobile breakpoint.
    pub is_mobile: bool,
}

impl ViewportState {
    /// Build a viewport state from measured widths.
    #[must_use]
    pub fn new(total_header_width: f64, reserved_width: f64, window_width: f64) -> Self {
        Self {
            total_header_width,
            reserved_width,
            is_mobile: window_width < MOBILE_BREAKPOINT_PX,
        }
    }

    /// Width left for the inline menu.
    ///
    /// The reserved width never counts for less than 210px so a narrow
    /// set of controls does not let the menu crowd the header edge.
    #[must_use]
    pub fn available_width(&self) -> f64 {
        self.total_header_width - self.reserved_width.max(MIN_RESERVED_WIDTH_PX)
    }
}

/// Result of a menu fit: item ids partitioned into the inline menu and
/// the collapsed overflow menu, both in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLayout {
    pub visible: Vec<String>,
    pub overflow: Vec<String>,
}

impl MenuLayout {
    /// Whether the overflow-menu affordance should be shown at all.
    #[must_use]
    pub fn shows_overflow_affordance(&self) -> bool {
        !self.overflow.is_empty()
    }
}

/// Partition `items` into inline and overflow sets.
///
/// All items share `item_width` (measured by the host). On desktop the
/// inline menu may only use a third of `available_width` and never
/// shows fewer than `min_apps_desktop` items; on mobile it may use all
/// of it but never shows more than `min_apps_desktop`. One slot is kept
/// free for the overflow affordance whenever at least two items would
/// overflow. The active item always stays inline by trading places with
/// the last visible item, unless nothing is visible at all.
///
/// Numeric inputs are best-effort; degenerate values produce a
/// degenerate partition rather than an error.
#[must_use]
pub fn fit_menu(
    items: &[MenuItem],
    item_width: f64,
    available_width: f64,
    is_mobile: bool,
    min_apps_desktop: usize,
) -> MenuLayout {
    let effective_width = if is_mobile {
        available_width
    } else {
        available_width * APP_MENU_WIDTH_SHARE
    };

    // saturating cast keeps zero/huge widths well-defined
    let mut count = (effective_width / item_width).floor() as i64;
    let min_apps = min_apps_desktop as i64;
    if is_mobile && count > min_apps {
        count = min_apps;
    }
    if !is_mobile && count < min_apps {
        count = min_apps;
    }

    // keep a slot free for the overflow affordance when at least two
    // items would overflow
    if items.len() as i64 - 1 - count >= 1 {
        count -= 1;
    }

    let visible_count = usize::try_from(count).unwrap_or(0).min(items.len());

    let mut visible: Vec<usize> = (0..visible_count).collect();
    let mut overflow: Vec<usize> = (visible_count..items.len()).collect();

    // the active item takes the last inline slot, displacing whatever
    // was there; with no inline slots it overflows like everything else
    if visible_count > 0 {
        if let Some(pos) = overflow.iter().position(|&idx| items[idx].is_active) {
            let active_idx = overflow[pos];
            overflow[pos] = visible[visible_count - 1];
            visible[visible_count - 1] = active_idx;
            overflow.sort_unstable();
        }
    }

    let ids = |indices: Vec<usize>| {
        indices
            .into_iter()
            .map(|idx| items[idx].id.clone())
            .collect()
    };
    MenuLayout {
        visible: ids(visible),
        overflow: ids(overflow),
    }
}

/// [`fit_menu`] with the widths taken from a measured [`ViewportState`].
#[must_use]
pub fn fit_menu_for_viewport(
    items: &[MenuItem],
    item_width: f64,
    viewport: &ViewportState,
    min_apps_desktop: usize,
) -> MenuLayout {
    fit_menu(
        items,
        item_width,
        viewport.available_width(),
        viewport.is_mobile,
        min_apps_desktop,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize, active: Option<usize>) -> Vec<MenuItem> {
        (0..count)
            .map(|i| MenuItem {
                id: format!("app-{i}"),
                is_active: active == Some(i),
            })
            .collect()
    }

    #[test]
    fn wide_desktop_shows_everything() {
        // effective width 660, raw count 13, capped by item count
        let layout = fit_menu(&items(10, None), 50.0, 2000.0, false, 8);
        assert_eq!(layout.visible.len(), 10);
        assert!(layout.overflow.is_empty());
        assert!(!layout.shows_overflow_affordance());
    }

    #[test]
    fn narrow_mobile_reserves_the_affordance_slot() {
        // raw count 6, three items would overflow, so one more slot is
        // given up for the affordance
        let layout = fit_menu(&items(10, None), 50.0, 300.0, true, 8);
        assert_eq!(layout.visible.len(), 5);
        assert_eq!(layout.overflow.len(), 5);
        assert!(layout.shows_overflow_affordance());
        assert_eq!(layout.visible[0], "app-0");
        assert_eq!(layout.overflow[0], "app-5");
    }

    #[test]
    fn mobile_never_shows_more_than_the_cap() {
        let layout = fit_menu(&items(10, None), 10.0, 1000.0, true, 8);
        // raw count 100 capped at 8, then one slot for the affordance
        assert_eq!(layout.visible.len(), 7);
        assert_eq!(layout.overflow.len(), 3);
    }

    #[test]
    fn tight_desktop_still_shows_the_minimum() {
        // effective width 33, raw count 0, floored at 8
        let layout = fit_menu(&items(10, None), 50.0, 100.0, false, 8);
        assert_eq!(layout.visible.len(), 7);
        assert_eq!(layout.overflow.len(), 3);
    }

    #[test]
    fn active_item_swaps_into_the_last_visible_slot() {
        let layout = fit_menu(&items(10, Some(7)), 50.0, 300.0, true, 8);
        assert_eq!(
            layout.visible,
            vec!["app-0", "app-1", "app-2", "app-3", "app-7"]
        );
        assert_eq!(
            layout.overflow,
            vec!["app-4", "app-5", "app-6", "app-8", "app-9"]
        );
    }

    #[test]
    fn visible_active_item_stays_put() {
        let layout = fit_menu(&items(10, Some(2)), 50.0, 300.0, true, 8);
        assert_eq!(
            layout.visible,
            vec!["app-0", "app-1", "app-2", "app-3", "app-4"]
        );
    }

    #[test]
    fn zero_slots_overflows_the_active_item_too() {
        let layout = fit_menu(&items(4, Some(2)), 50.0, 0.0, true, 8);
        assert!(layout.visible.is_empty());
        assert_eq!(layout.overflow.len(), 4);
    }

    #[test]
    fn degenerate_item_width_shows_everything() {
        let layout = fit_menu(&items(5, None), 0.0, 300.0, true, 8);
        assert_eq!(layout.visible.len(), 5);
        assert!(layout.overflow.is_empty());
    }

    #[test]
    fn refit_with_identical_inputs_is_identical() {
        let entries = items(10, Some(7));
        let first = fit_menu(&entries, 50.0, 300.0, true, 8);
        let second = fit_menu(&entries, 50.0, 300.0, true, 8);
        assert_eq!(first, second);
    }

    #[test]
    fn viewport_reserved_width_has_a_floor() {
        let narrow_controls = ViewportState::new(1000.0, 50.0, 1024.0);
        let wide_controls = ViewportState::new(1000.0, 300.0, 1024.0);
        assert!(!narrow_controls.is_mobile);
        assert!((narrow_controls.available_width() - 790.0).abs() < f64::EPSILON);
        assert!((wide_controls.available_width() - 700.0).abs() < f64::EPSILON);

        let mobile = ViewportState::new(400.0, 50.0, 600.0);
        assert!(mobile.is_mobile);
    }

    #[test]
    fn viewport_fit_matches_plain_fit() {
        let entries = items(10, None);
        let viewport = ViewportState::new(510.0, 210.0, 600.0);
        let via_viewport = fit_menu_for_viewport(&entries, 50.0, &viewport, 8);
        let direct = fit_menu(&entries, 50.0, 300.0, true, 8);
        assert_eq!(via_viewport, direct);
    }
}
