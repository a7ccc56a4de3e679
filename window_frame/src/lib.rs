//! # Window Frame
//!
//! Per-window geometry and gesture state machine: drag, corner resize,
//! maximize/restore, and the input-shielding overlay rule.
//!
//! ## Philosophy
//!
//! - **Frame-local motion**: intermediate drag positions never leave the
//!   frame; only the endpoint committed at drag end becomes the window's
//!   geometry, so the session is not re-rendered per pointer move
//! - **Total gestures**: a gesture that is illegal in the current state
//!   (resizing while maximized, moving without a grab) is a no-op
//! - **Effects, not calls**: the frame never reaches into the session; it
//!   reports [`FrameEffect::RequestFocus`] and the shell routes it
//!
//! ## Non-Goals
//!
//! This is NOT hit testing or rendering. The frame assumes the caller
//! already attributed the pointer event to this window.

use serde::{Deserialize, Serialize};

/// Smallest width a frame can be resized to.
pub const MIN_WIDTH: u32 = 320;
/// Smallest height a frame can be resized to.
pub const MIN_HEIGHT: u32 = 240;

/// A point on the desktop surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Frame dimensions, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_WIDTH),
            height: self.height.max(MIN_HEIGHT),
        }
    }
}

/// Floating geometry of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }
}

/// Whether the frame floats at its own geometry or fills the work area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameMode {
    Floating,
    Maximized,
}

/// Side effect a gesture asks the shell to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEffect {
    None,
    /// Bring this window to the front (dragging always focuses)
    RequestFocus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct DragState {
    /// Pointer offset from the frame origin at grab time
    grab: Point,
    /// Live origin while the pointer moves; committed at drag end
    pending: Point,
}

/// Geometry/gesture controller for one window.
///
/// `rect` always holds the floating geometry: while maximized it is the
/// remembered rect that restore reapplies exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowFrame {
    mode: FrameMode,
    rect: Rect,
    drag: Option<DragState>,
}

impl WindowFrame {
    /// Creates a floating frame at the given geometry
    pub fn new(rect: Rect) -> Self {
        Self {
            mode: FrameMode::Floating,
            rect: Rect::new(rect.origin, rect.size.clamped()),
            drag: None,
        }
    }

    pub fn mode(&self) -> FrameMode {
        self.mode
    }

    pub fn is_maximized(&self) -> bool {
        self.mode == FrameMode::Maximized
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The committed floating geometry
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The origin to render at: the live drag position while a drag is in
    /// progress, the committed origin otherwise.
    pub fn position(&self) -> Point {
        match &self.drag {
            Some(drag) => drag.pending,
            None => self.rect.origin,
        }
    }

    /// Starts a drag at the given pointer position.
    ///
    /// Permitted only while floating and not already dragging. Starting a
    /// drag always requests focus for the window.
    pub fn begin_drag(&mut self, pointer: Point) -> FrameEffect {
        if self.mode != FrameMode::Floating || self.drag.is_some() {
            return FrameEffect::None;
        }
        self.drag = Some(DragState {
            grab: Point::new(pointer.x - self.rect.origin.x, pointer.y - self.rect.origin.y),
            pending: self.rect.origin,
        });
        FrameEffect::RequestFocus
    }

    /// Moves an in-progress drag; no-op without a grab.
    pub fn drag_to(&mut self, pointer: Point) {
        if let Some(drag) = &mut self.drag {
            drag.pending = Point::new(pointer.x - drag.grab.x, pointer.y - drag.grab.y);
        }
    }

    /// Ends the drag, committing the final position as the frame origin.
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.rect.origin = drag.pending;
        }
    }

    /// Resizes the frame, clamped to the minimum size.
    ///
    /// Permitted only while floating and not mid-drag.
    pub fn resize_to(&mut self, size: Size) {
        if self.mode != FrameMode::Floating || self.drag.is_some() {
            return;
        }
        self.rect.size = size.clamped();
    }

    /// Fills the work area, remembering the current floating geometry.
    pub fn maximize(&mut self) {
        if self.mode != FrameMode::Floating || self.drag.is_some() {
            return;
        }
        self.mode = FrameMode::Maximized;
    }

    /// Returns to the floating geometry remembered at maximize time.
    pub fn restore(&mut self) {
        if self.mode == FrameMode::Maximized {
            self.mode = FrameMode::Floating;
        }
    }

    /// The title-bar maximize button: floating ⇄ maximized.
    pub fn toggle_maximize(&mut self) {
        match self.mode {
            FrameMode::Floating => self.maximize(),
            FrameMode::Maximized => self.restore(),
        }
    }

    /// True when a capturing layer must sit above the window's content.
    ///
    /// Inactive windows and windows mid-drag shield their embedded content
    /// so a click reaches the shell (and becomes a focus request) instead
    /// of an iframe or video control.
    pub fn needs_input_overlay(&self, is_active: bool) -> bool {
        !is_active || self.drag.is_some()
    }
}
