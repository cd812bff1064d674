//! Horizontally scrollable menu strip: auto-follow of the active section and
//! mouse drag-panning.
//!
//! Both behaviours write the same scroll offset. Neither takes priority:
//! an auto-follow issued mid-drag still animates, and a drag move during an
//! auto-follow animation aborts it (a direct offset assignment always wins
//! over an in-flight smooth scroll). Both overlaps are counted and logged.

use tracing::debug;

use super::smooth::SmoothOffset;
use crate::app::types::{Extent, SectionId};

/// Default multiplier applied to pointer travel while drag-panning.
pub const DEFAULT_DRAG_GAIN: i32 = 2;

/// Transient state of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// Pointer column at pointer-down.
    pub start_x: i32,
    /// Strip scroll offset at pointer-down.
    pub start_scroll: i32,
    /// Whether the pointer moved since pointer-down.
    pub moved: bool,
}

/// How a drag gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    /// The pointer never moved: treat the gesture as a click at `x`.
    Click { x: i32 },
    /// The strip was panned.
    Panned,
}

#[derive(Debug, Clone)]
pub struct MenuStrip {
    offset: SmoothOffset,
    viewport_width: i32,
    entries: Vec<(SectionId, Extent)>,
    drag: Option<DragState>,
    gain: i32,
    contended: u32,
}

impl MenuStrip {
    pub fn new(
        entries: Vec<(SectionId, Extent)>,
        viewport_width: i32,
        gain: i32,
        speed: f64,
    ) -> Self {
        let mut strip = MenuStrip {
            offset: SmoothOffset::new(speed),
            viewport_width: 0,
            entries: Vec::new(),
            drag: None,
            gain,
            contended: 0,
        };
        strip.set_layout(entries, viewport_width);
        strip
    }

    /// Replace the entry handles and the visible width (after a relayout).
    pub fn set_layout(&mut self, entries: Vec<(SectionId, Extent)>, viewport_width: i32) {
        let content = entries.last().map(|(_, e)| e.end()).unwrap_or(0);
        self.entries = entries;
        self.viewport_width = viewport_width.max(0);
        self.offset.set_max(content - self.viewport_width);
    }

    pub fn scroll_left(&self) -> i32 {
        self.offset.current()
    }

    pub fn destination(&self) -> i32 {
        self.offset.destination()
    }

    pub fn max_scroll(&self) -> i32 {
        self.offset.max()
    }

    pub fn viewport_width(&self) -> i32 {
        self.viewport_width
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Number of times auto-follow and drag-panning overlapped.
    pub fn contended_adjustments(&self) -> u32 {
        self.contended
    }

    pub fn entry(&self, id: SectionId) -> Option<Extent> {
        self.entries
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, e)| *e)
    }

    /// Section whose entry covers strip-content column `x`.
    pub fn entry_at(&self, x: i32) -> Option<SectionId> {
        self.entries
            .iter()
            .find(|(_, e)| e.contains(x))
            .map(|(id, _)| *id)
    }

    fn visible_at(&self, offset: i32) -> Extent {
        Extent::new(offset, self.viewport_width)
    }

    /// Bring `entry` fully into view with smooth motion.
    ///
    /// When the entry sticks out on either side the strip scrolls by exactly
    /// `entry.start - visible.start`. Visibility is judged against the
    /// destination of any in-flight animation, so repeating the call for the
    /// same entry is a no-op. Returns the scheduled signed adjustment.
    pub fn follow(&mut self, entry: Extent) -> Option<i32> {
        let from = self.offset.destination();
        if self.visible_at(from).covers(&entry) {
            return None;
        }
        let delta = entry.start - from;
        let to = self.offset.clamp(from + delta);
        if to == from {
            return None;
        }
        if self.drag.is_some() {
            self.contended += 1;
            debug!(from, to, "auto-follow issued while drag-panning the menu strip");
        }
        self.offset.animate_to(to);
        Some(to - from)
    }

    /// Auto-follow the entry belonging to `id`.
    pub fn follow_section(&mut self, id: SectionId) -> Option<i32> {
        let entry = self.entry(id)?;
        self.follow(entry)
    }

    /// Pointer pressed inside the strip: Idle -> Dragging.
    pub fn pointer_down(&mut self, x: i32) {
        self.drag = Some(DragState {
            start_x: x,
            start_scroll: self.offset.current(),
            moved: false,
        });
    }

    /// Pointer moved while pressed. Returns true when the offset changed.
    pub fn pointer_move(&mut self, x: i32) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        if x == drag.start_x && !drag.moved {
            return false;
        }
        drag.moved = true;
        let target = drag.start_scroll - (x - drag.start_x) * self.gain;
        if self.offset.is_animating() {
            self.contended += 1;
            debug!(target, "drag-panning aborted an in-flight auto-follow");
        }
        self.offset.jump_to(target)
    }

    /// Pointer released: Dragging -> Idle.
    pub fn pointer_up(&mut self) -> Option<DragEnd> {
        let drag = self.drag.take()?;
        Some(if drag.moved {
            DragEnd::Panned
        } else {
            DragEnd::Click { x: drag.start_x }
        })
    }

    /// Pointer left the strip: Dragging -> Idle, never a click.
    pub fn pointer_leave(&mut self) {
        self.drag = None;
    }

    /// Pan by `delta` columns immediately (mouse wheel over the strip).
    pub fn pan_by(&mut self, delta: i32) -> bool {
        let current = self.offset.current();
        self.offset.jump_to(current + delta)
    }

    pub fn tick(&mut self) -> bool {
        self.offset.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(viewport: i32) -> MenuStrip {
        // Ten entries of width 10 with a gap of 2: content width 118.
        let entries = (0..10)
            .map(|i| (SectionId::new("x"), Extent::new(i * 12, 10)))
            .collect();
        MenuStrip::new(entries, viewport, DEFAULT_DRAG_GAIN, 0.35)
    }

    #[test]
    fn follow_visible_entry_is_noop() {
        let mut s = strip(40);
        assert_eq!(s.follow(Extent::new(12, 10)), None);
        assert!(!s.offset.is_animating());
    }

    #[test]
    fn follow_scrolls_by_leading_edge_offset() {
        let mut s = strip(40);
        assert_eq!(s.follow(Extent::new(60, 10)), Some(60));
        assert_eq!(s.destination(), 60);
        // Entry left of the view scrolls back by a negative amount.
        while s.tick() {}
        assert_eq!(s.follow(Extent::new(24, 10)), Some(-36));
    }

    #[test]
    fn follow_clamps_to_max_scroll() {
        let mut s = strip(40);
        assert_eq!(s.max_scroll(), 118 - 40);
        assert_eq!(s.follow(Extent::new(108, 10)), Some(78));
    }

    #[test]
    fn click_without_movement() {
        let mut s = strip(40);
        s.pointer_down(7);
        assert!(!s.pointer_move(7));
        assert_eq!(s.pointer_up(), Some(DragEnd::Click { x: 7 }));
        assert_eq!(s.pointer_up(), None);
    }

    #[test]
    fn pointer_move_without_drag_is_ignored() {
        let mut s = strip(40);
        assert!(!s.pointer_move(30));
        assert_eq!(s.scroll_left(), 0);
    }
}
