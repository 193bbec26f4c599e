//! Room geometry: size from the viewport, centering, wheel remap, title.
//!
//! DESIGN
//! ======
//! The room is a wide scene inside a horizontally scrolling wrapper. Desktop
//! keeps a 1.6 aspect ratio and mobile a 1.5 ratio; in both cases the room
//! must cover the viewport, so the constrained side is stretched and the
//! other side follows the ratio.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use crate::config::MOBILE_BREAKPOINT_PX;

pub const DESKTOP_ASPECT: f64 = 1.6;
pub const MOBILE_ASPECT: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(viewport_width: f64) -> Self {
        if viewport_width < MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// The new breakpoint when `viewport_width` lands on the other side.
    pub fn crossed(self, viewport_width: f64) -> Option<Self> {
        let next = Self::from_width(viewport_width);
        (next != self).then_some(next)
    }
}

/// Title width cached across scroll events.
///
/// Responsive styles resize the title only when the layout breakpoint
/// changes, so the measured width stays valid until then.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleMeasure {
    breakpoint: Breakpoint,
    width: Option<f64>,
}

impl TitleMeasure {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            breakpoint: Breakpoint::from_width(viewport_width),
            width: None,
        }
    }

    /// Track a new viewport width. Returns `true` when the title has to be
    /// measured again before it is positioned.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        if let Some(next) = self.breakpoint.crossed(viewport_width) {
            log::debug!("room: breakpoint {:?} -> {next:?}", self.breakpoint);
            self.breakpoint = next;
            self.width = None;
        }
        self.width.is_none()
    }

    pub fn record(&mut self, title_width: f64) {
        self.width = Some(title_width);
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomSize {
    pub width: f64,
    pub height: f64,
}

/// Room size that covers a `viewport_width × viewport_height` viewport.
pub fn room_size(viewport_width: f64, viewport_height: f64) -> RoomSize {
    match Breakpoint::from_width(viewport_width) {
        Breakpoint::Desktop => {
            let mut size = RoomSize {
                width: viewport_height * DESKTOP_ASPECT,
                height: viewport_height,
            };
            if size.width < viewport_width {
                size.width = viewport_width;
                size.height = viewport_width / DESKTOP_ASPECT;
            }
            size
        }
        Breakpoint::Mobile => {
            let mut size = RoomSize {
                width: viewport_width,
                height: viewport_width / MOBILE_ASPECT,
            };
            if size.height < viewport_height {
                size.height = viewport_height;
                size.width = viewport_height * MOBILE_ASPECT;
            }
            size
        }
    }
}

/// Scroll offset that centers the room, if it overflows the viewport.
pub fn center_scroll_left(room_width: f64, viewport_width: f64) -> Option<f64> {
    (room_width > viewport_width).then(|| (room_width - viewport_width) / 2.0)
}

/// New `scroll_left` for a vertical wheel gesture, clamped to the scroll
/// range.
///
/// `None` when the wrapper is already at the edge the gesture points to, or
/// there is nothing to scroll; the event should then propagate.
pub fn wheel_to_horizontal(
    scroll_left: f64,
    scroll_width: f64,
    client_width: f64,
    delta_y: f64,
) -> Option<f64> {
    let max_left = (scroll_width - client_width).max(0.0);
    if delta_y == 0.0 || max_left <= 0.0 {
        return None;
    }
    if delta_y < 0.0 && scroll_left <= 0.0 {
        return None;
    }
    if delta_y > 0.0 && scroll_left >= max_left {
        return None;
    }
    Some((scroll_left + delta_y).clamp(0.0, max_left))
}

/// Left offset that keeps the title centered over the visible part of the
/// room.
pub fn title_left(scroll_left: f64, viewport_width: f64, title_width: f64) -> f64 {
    scroll_left + (viewport_width - title_width) / 2.0
}
