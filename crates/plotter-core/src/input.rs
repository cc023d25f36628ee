// File: crates/plotter-core/src/input.rs
// Summary: Pointer and touch events as delivered to the plot manager, in device coordinates.

use crate::types::Pair;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Mouse or pen event. `primary` is set when the event comes from the
/// primary button; `primary_held` when the primary button is currently down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Pair,
    pub primary: bool,
    pub primary_held: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: Pair) -> Self {
        Self { kind, position, primary: true, primary_held: false }
    }

    pub fn down(position: Pair) -> Self {
        Self::new(PointerKind::Down, position)
    }

    pub fn moved(position: Pair) -> Self {
        Self::new(PointerKind::Move, position)
    }

    pub fn up(position: Pair) -> Self {
        Self::new(PointerKind::Up, position)
    }

    #[must_use]
    pub fn with_buttons(mut self, primary: bool, primary_held: bool) -> Self {
        self.primary = primary;
        self.primary_held = primary_held;
        self
    }

    /// Down and move events only count for the primary button (or while it
    /// is held); releases always count.
    pub fn is_relevant(&self) -> bool {
        match self.kind {
            PointerKind::Up => true,
            PointerKind::Down | PointerKind::Move => self.primary || self.primary_held,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// Touch event: the touches that changed in this event plus every touch
/// still on the screen afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub changed: Vec<Pair>,
    pub active: Vec<Pair>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, changed: Vec<Pair>, active: Vec<Pair>) -> Self {
        Self { phase, changed, active }
    }

    /// A single finger dragging; the host should suppress scrolling.
    pub fn is_single_drag(&self) -> bool {
        self.phase == TouchPhase::Move && self.active.len() == 1
    }
}
