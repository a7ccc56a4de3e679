//! # Window Manager Service
//!
//! This crate implements the desktop session's window state machine.
//!
//! ## Philosophy
//!
//! - **One mutation surface**: `open`, `close`, `focus` and
//!   `toggle_minimize` are the entire API; chrome and frames call these
//!   four operations and nothing else
//! - **Total operations**: acting on an id that is not in the session is a
//!   recorded no-op, never an error — callbacks from already-unmounted
//!   children must not be able to crash the shell
//! - **Serialized stacking**: every z-index comes from a single counter
//!   behind one mutable borrow; values are never reused and never decrease
//! - **Auditable**: every transition is logged as a structured event
//!
//! ## Non-Goals
//!
//! This is NOT a compositor. The manager is agnostic to what a window's
//! content renders; geometry and gestures live in the frame layer.

use core_types::WindowId;
use icon_resolver::IconRef;
use serde::{Deserialize, Serialize};

/// Value of the z-order counter before the first window opens.
pub const INITIAL_Z: u64 = 100;

/// A live window in the session.
///
/// `content` is an opaque handle produced by the dispatcher; the manager
/// never inspects it. `title` and `icon` are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window<C> {
    pub id: WindowId,
    pub title: String,
    pub icon: IconRef,
    pub content: C,
    pub is_minimized: bool,
    pub z_index: u64,
}

/// Operations that can be ignored when aimed at an unknown id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOp {
    Close,
    Focus,
    ToggleMinimize,
}

/// Structured record of a session transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    Opened { id: WindowId, z_index: u64 },
    Focused { id: WindowId, z_index: u64 },
    Minimized { id: WindowId },
    Restored { id: WindowId },
    Closed { id: WindowId },
    /// Operation aimed at an id not present in the session
    IgnoredUnknown { id: WindowId, op: SessionOp },
}

/// The session's window collection, active pointer and z-order counter.
///
/// Windows are kept in insertion order; stacking is defined purely by
/// `z_index` ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowManager<C> {
    windows: Vec<Window<C>>,
    active: Option<WindowId>,
    z_counter: u64,
    events: Vec<SessionEvent>,
}

impl<C> WindowManager<C> {
    /// Creates an empty session
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            z_counter: INITIAL_Z,
            events: Vec::new(),
        }
    }

    /// Opens a window, or focuses it if the id is already present.
    ///
    /// A second `open` with the same id never duplicates the window and
    /// leaves the first call's title, icon and content in place; only the
    /// stacking position and active pointer change.
    pub fn open(&mut self, id: WindowId, title: impl Into<String>, icon: IconRef, content: C) {
        if self.contains(&id) {
            self.focus(&id);
            return;
        }

        let z_index = self.next_z();
        self.windows.push(Window {
            id: id.clone(),
            title: title.into(),
            icon,
            content,
            is_minimized: false,
            z_index,
        });
        self.active = Some(id.clone());
        self.events.push(SessionEvent::Opened { id, z_index });
    }

    /// Removes a window from the session entirely.
    ///
    /// The entry is not retained; re-opening the same id later creates a
    /// brand-new window. Unknown ids are ignored.
    pub fn close(&mut self, id: &WindowId) {
        let Some(index) = self.index_of(id) else {
            self.ignore(id, SessionOp::Close);
            return;
        };

        self.windows.remove(index);
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        self.events.push(SessionEvent::Closed { id: id.clone() });
    }

    /// Brings a window to the front and makes it active.
    ///
    /// Restores the window if it was minimized. Every call consumes a
    /// fresh z-index, including re-focusing the already-active window.
    /// Unknown ids are ignored.
    pub fn focus(&mut self, id: &WindowId) {
        let Some(index) = self.index_of(id) else {
            self.ignore(id, SessionOp::Focus);
            return;
        };

        let z_index = self.next_z();
        let window = &mut self.windows[index];
        if window.is_minimized {
            window.is_minimized = false;
            self.events.push(SessionEvent::Restored { id: id.clone() });
        }
        window.z_index = z_index;
        self.active = Some(id.clone());
        self.events.push(SessionEvent::Focused {
            id: id.clone(),
            z_index,
        });
    }

    /// Flips a window between visible and minimized.
    ///
    /// Minimizing the active window clears the active pointer; restoring
    /// through this operation does NOT make the window active — that takes
    /// an explicit `focus` or `open`. Unknown ids are ignored.
    pub fn toggle_minimize(&mut self, id: &WindowId) {
        let Some(index) = self.index_of(id) else {
            self.ignore(id, SessionOp::ToggleMinimize);
            return;
        };

        let window = &mut self.windows[index];
        if window.is_minimized {
            window.is_minimized = false;
            self.events.push(SessionEvent::Restored { id: id.clone() });
        } else {
            window.is_minimized = true;
            if self.active.as_ref() == Some(id) {
                self.active = None;
            }
            self.events.push(SessionEvent::Minimized { id: id.clone() });
        }
    }

    /// Gets a window by id
    pub fn get(&self, id: &WindowId) -> Option<&Window<C>> {
        self.windows.iter().find(|w| &w.id == id)
    }

    /// Checks whether a window with the given id is in the session
    pub fn contains(&self, id: &WindowId) -> bool {
        self.index_of(id).is_some()
    }

    /// Windows in insertion order (iteration/rendering order)
    pub fn windows(&self) -> &[Window<C>] {
        &self.windows
    }

    /// Windows sorted by z-index ascending; the last element is topmost
    pub fn stacking_order(&self) -> Vec<&Window<C>> {
        let mut stacked: Vec<&Window<C>> = self.windows.iter().collect();
        stacked.sort_by_key(|w| w.z_index);
        stacked
    }

    /// The topmost window, if any
    pub fn top(&self) -> Option<&Window<C>> {
        self.windows.iter().max_by_key(|w| w.z_index)
    }

    /// Id of the active window, if one is active
    pub fn active_id(&self) -> Option<&WindowId> {
        self.active.as_ref()
    }

    /// The active window, if one is active
    pub fn active_window(&self) -> Option<&Window<C>> {
        self.active.as_ref().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// The transition audit trail
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Clears the audit trail (for testing)
    #[cfg(test)]
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn index_of(&self, id: &WindowId) -> Option<usize> {
        self.windows.iter().position(|w| &w.id == id)
    }

    fn next_z(&mut self) -> u64 {
        self.z_counter += 1;
        self.z_counter
    }

    fn ignore(&mut self, id: &WindowId, op: SessionOp) {
        self.events.push(SessionEvent::IgnoredUnknown {
            id: id.clone(),
            op,
        });
    }
}

impl<C> Default for WindowManager<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> WindowManager<&'static str> {
        WindowManager::new()
    }

    fn open(wm: &mut WindowManager<&'static str>, id: &str, content: &'static str) {
        wm.open(
            WindowId::new(id),
            id.to_string(),
            IconRef::symbolic("folder"),
            content,
        );
    }

    #[test]
    fn test_empty_session() {
        let wm = manager();
        assert!(wm.is_empty());
        assert!(wm.active_id().is_none());
        assert!(wm.top().is_none());
    }

    #[test]
    fn test_open_creates_visible_active_window() {
        let mut wm = manager();
        open(&mut wm, "terminal-1", "term");

        let window = wm.get(&WindowId::new("terminal-1")).unwrap();
        assert!(!window.is_minimized);
        assert_eq!(window.z_index, INITIAL_Z + 1);
        assert_eq!(wm.active_id(), Some(&WindowId::new("terminal-1")));
    }

    #[test]
    fn test_open_is_idempotent_per_id() {
        let mut wm = manager();
        open(&mut wm, "x", "first");

        // Second open with the same id: no duplicate, first content kept,
        // window brought to front.
        wm.open(
            WindowId::new("x"),
            "other title",
            IconRef::symbolic("terminal"),
            "second",
        );

        assert_eq!(wm.len(), 1);
        let window = wm.get(&WindowId::new("x")).unwrap();
        assert_eq!(window.content, "first");
        assert_eq!(window.title, "x");
        assert_eq!(window.icon, IconRef::symbolic("folder"));
        assert_eq!(window.z_index, INITIAL_Z + 2);
    }

    #[test]
    fn test_z_indices_strictly_increase() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        open(&mut wm, "b", "");
        open(&mut wm, "c", "");
        wm.focus(&WindowId::new("a"));
        wm.focus(&WindowId::new("b"));

        let assigned: Vec<u64> = wm
            .events()
            .iter()
            .filter_map(|e| match e {
                SessionEvent::Opened { z_index, .. } | SessionEvent::Focused { z_index, .. } => {
                    Some(*z_index)
                }
                _ => None,
            })
            .collect();

        assert_eq!(assigned.len(), 5);
        assert!(
            assigned.windows(2).all(|pair| pair[0] < pair[1]),
            "z assignments must be strictly increasing in call order"
        );
    }

    #[test]
    fn test_no_two_windows_share_a_z_index() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        open(&mut wm, "b", "");
        wm.focus(&WindowId::new("a"));

        let stacked = wm.stacking_order();
        assert!(stacked[0].z_index < stacked[1].z_index);
    }

    #[test]
    fn test_refocusing_active_window_consumes_counter() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        let z_before = wm.get(&WindowId::new("a")).unwrap().z_index;

        wm.focus(&WindowId::new("a"));
        let z_after = wm.get(&WindowId::new("a")).unwrap().z_index;
        assert!(z_after > z_before);
    }

    #[test]
    fn test_focus_brings_to_top() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        open(&mut wm, "b", "");
        assert_eq!(wm.top().unwrap().id, WindowId::new("b"));

        wm.focus(&WindowId::new("a"));
        assert_eq!(wm.top().unwrap().id, WindowId::new("a"));
        assert_eq!(wm.active_id(), Some(&WindowId::new("a")));
    }

    #[test]
    fn test_close_removes_entirely() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        wm.close(&WindowId::new("a"));

        assert!(wm.is_empty());
        assert!(wm.active_id().is_none());
    }

    #[test]
    fn test_close_nonactive_leaves_active_pointer() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        open(&mut wm, "b", "");
        wm.close(&WindowId::new("a"));

        assert_eq!(wm.active_id(), Some(&WindowId::new("b")));
    }

    #[test]
    fn test_reopen_after_close_is_a_fresh_window() {
        let mut wm = manager();
        open(&mut wm, "a", "old");
        let z_old = wm.get(&WindowId::new("a")).unwrap().z_index;
        wm.close(&WindowId::new("a"));

        open(&mut wm, "a", "new");
        let window = wm.get(&WindowId::new("a")).unwrap();
        assert_eq!(window.content, "new");
        assert!(window.z_index > z_old);
    }

    #[test]
    fn test_minimize_active_clears_active_pointer() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        wm.toggle_minimize(&WindowId::new("a"));

        assert!(wm.get(&WindowId::new("a")).unwrap().is_minimized);
        assert!(wm.active_id().is_none());
    }

    #[test]
    fn test_minimize_nonactive_keeps_active_pointer() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        open(&mut wm, "b", "");
        wm.toggle_minimize(&WindowId::new("a"));

        assert_eq!(wm.active_id(), Some(&WindowId::new("b")));
    }

    #[test]
    fn test_minimize_round_trip_does_not_autofocus() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        wm.toggle_minimize(&WindowId::new("a"));
        wm.toggle_minimize(&WindowId::new("a"));

        let window = wm.get(&WindowId::new("a")).unwrap();
        assert!(!window.is_minimized);
        // Restoring through toggle does not reinstate the active pointer.
        assert!(wm.active_id().is_none());
    }

    #[test]
    fn test_open_on_minimized_restores_and_focuses() {
        let mut wm = manager();
        open(&mut wm, "a", "payload");
        wm.toggle_minimize(&WindowId::new("a"));
        let z_before = wm.get(&WindowId::new("a")).unwrap().z_index;

        open(&mut wm, "a", "ignored");
        let window = wm.get(&WindowId::new("a")).unwrap();
        assert!(!window.is_minimized);
        assert_eq!(window.content, "payload");
        assert!(window.z_index > z_before);
        assert_eq!(wm.active_id(), Some(&WindowId::new("a")));
    }

    #[test]
    fn test_focus_restores_minimized_window() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        wm.toggle_minimize(&WindowId::new("a"));

        wm.focus(&WindowId::new("a"));
        assert!(!wm.get(&WindowId::new("a")).unwrap().is_minimized);
        assert_eq!(wm.active_id(), Some(&WindowId::new("a")));
    }

    #[test]
    fn test_operations_on_unknown_ids_are_noops() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        wm.clear_events();

        wm.close(&WindowId::new("ghost"));
        wm.focus(&WindowId::new("ghost"));
        wm.toggle_minimize(&WindowId::new("ghost"));

        assert_eq!(wm.len(), 1);
        assert_eq!(wm.active_id(), Some(&WindowId::new("a")));
        assert_eq!(
            wm.events(),
            &[
                SessionEvent::IgnoredUnknown {
                    id: WindowId::new("ghost"),
                    op: SessionOp::Close
                },
                SessionEvent::IgnoredUnknown {
                    id: WindowId::new("ghost"),
                    op: SessionOp::Focus
                },
                SessionEvent::IgnoredUnknown {
                    id: WindowId::new("ghost"),
                    op: SessionOp::ToggleMinimize
                },
            ]
        );
    }

    #[test]
    fn test_stacking_order_is_by_z_not_insertion() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        open(&mut wm, "b", "");
        open(&mut wm, "c", "");
        wm.focus(&WindowId::new("a"));

        let ids: Vec<&str> = wm.stacking_order().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);

        // Insertion order is unchanged.
        let insertion: Vec<&str> = wm.windows().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(insertion, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_event_trail_records_transitions() {
        let mut wm = manager();
        open(&mut wm, "a", "");
        wm.toggle_minimize(&WindowId::new("a"));
        wm.focus(&WindowId::new("a"));
        wm.close(&WindowId::new("a"));

        let kinds: Vec<&str> = wm
            .events()
            .iter()
            .map(|e| match e {
                SessionEvent::Opened { .. } => "opened",
                SessionEvent::Focused { .. } => "focused",
                SessionEvent::Minimized { .. } => "minimized",
                SessionEvent::Restored { .. } => "restored",
                SessionEvent::Closed { .. } => "closed",
                SessionEvent::IgnoredUnknown { .. } => "ignored",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["opened", "minimized", "restored", "focused", "closed"]
        );
    }

    #[test]
    fn test_session_event_serialization() {
        let event = SessionEvent::Opened {
            id: WindowId::new("a"),
            z_index: 101,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }

    #[test]
    fn test_window_serialization() {
        let mut wm: WindowManager<String> = WindowManager::new();
        wm.open(
            WindowId::new("a"),
            "Title",
            IconRef::symbolic("folder"),
            "payload".to_string(),
        );
        let json = serde_json::to_string(wm.windows()).unwrap();
        let windows: Vec<Window<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(windows, wm.windows());
    }
}
