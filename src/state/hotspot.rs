//! Hover/tap expansion state for room hotspots.
//!
//! On pointer devices a hotspot follows the mouse. On touch devices a tap
//! expands it and locks it until the auto-collapse timer fires, so repeated
//! taps during that window do nothing.

#[cfg(test)]
#[path = "hotspot_test.rs"]
mod hotspot_test;

/// Width of a collapsed hotspot (the icon only).
pub const COLLAPSED_WIDTH_PX: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotspotMode {
    Hover,
    Touch,
}

impl HotspotMode {
    /// Touch when the device reports touch points or supports touch events.
    pub fn detect(max_touch_points: i32, has_touch_event: bool) -> Self {
        if max_touch_points > 0 || has_touch_event {
            Self::Touch
        } else {
            Self::Hover
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HotspotState {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// The hotspot expanded; schedule the auto-collapse.
    Expanded,
    Ignored,
}

/// Inline style values for the hotspot and its label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HotspotStyle {
    pub width_px: f64,
    pub label_opacity: f64,
}

impl HotspotStyle {
    pub fn width_css(&self) -> String {
        format!("{}px", self.width_px)
    }

    pub fn opacity_css(&self) -> String {
        format!("{}", self.label_opacity)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hotspot {
    pub mode: HotspotMode,
    pub state: HotspotState,
    pub expanded_width: f64,
    pub tap_locked: bool,
}

impl Hotspot {
    /// `label_width` is the rendered label width measured at init.
    pub fn new(mode: HotspotMode, label_width: f64) -> Self {
        Self {
            mode,
            state: HotspotState::Collapsed,
            expanded_width: label_width.max(0.0) + COLLAPSED_WIDTH_PX,
            tap_locked: false,
        }
    }

    /// Returns whether the state changed.
    pub fn pointer_enter(&mut self) -> bool {
        if self.mode != HotspotMode::Hover || self.state == HotspotState::Expanded {
            return false;
        }
        self.state = HotspotState::Expanded;
        true
    }

    /// Returns whether the state changed.
    pub fn pointer_leave(&mut self) -> bool {
        if self.mode != HotspotMode::Hover || self.state == HotspotState::Collapsed {
            return false;
        }
        self.state = HotspotState::Collapsed;
        true
    }

    pub fn tap(&mut self) -> TapOutcome {
        if self.mode != HotspotMode::Touch || self.tap_locked {
            return TapOutcome::Ignored;
        }
        self.state = HotspotState::Expanded;
        self.tap_locked = true;
        TapOutcome::Expanded
    }

    pub fn auto_collapse(&mut self) {
        self.state = HotspotState::Collapsed;
        self.tap_locked = false;
    }

    pub fn style(&self) -> HotspotStyle {
        match self.state {
            HotspotState::Expanded => HotspotStyle {
                width_px: self.expanded_width,
                label_opacity: 1.0,
            },
            HotspotState::Collapsed => HotspotStyle {
                width_px: COLLAPSED_WIDTH_PX,
                label_opacity: 0.0,
            },
        }
    }
}
