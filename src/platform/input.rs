//! Input flags written by an event source and read once per tick
//!
//! Key handlers may run on another thread. Move flags are level-triggered and
//! read as-is; launch is latched and consumed by the next snapshot.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::sim::TickInput;

/// Thread-safe input cell shared between an event source and the tick driver
#[derive(Debug, Default)]
pub struct SharedInput {
    move_right: AtomicBool,
    move_left: AtomicBool,
    launch: AtomicBool,
    idle_mode: AtomicBool,
}

impl SharedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Right key pressed or released
    pub fn set_move_right(&self, held: bool) {
        self.move_right.store(held, Ordering::Release);
    }

    /// Left key pressed or released
    pub fn set_move_left(&self, held: bool) {
        self.move_left.store(held, Ordering::Release);
    }

    /// Launch key pressed; stays latched until the next snapshot
    pub fn press_launch(&self) {
        self.launch.store(true, Ordering::Release);
    }

    pub fn set_idle_mode(&self, on: bool) {
        self.idle_mode.store(on, Ordering::Release);
    }

    /// Consistent view for one tick; clears the launch latch
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            move_right: self.move_right.load(Ordering::Acquire),
            move_left: self.move_left.load(Ordering::Acquire),
            launch: self.launch.swap(false, Ordering::AcqRel),
            idle_mode: self.idle_mode.load(Ordering::Acquire),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_launch_is_edge_triggered() {
        let input = SharedInput::new();
        input.press_launch();
        assert!(input.snapshot().launch);
        assert!(!input.snapshot().launch);
    }

    #[test]
    fn test_move_flags_are_level_triggered() {
        let input = SharedInput::new();
        input.set_move_right(true);
        assert!(input.snapshot().move_right);
        assert!(input.snapshot().move_right);
        input.set_move_right(false);
        input.set_move_left(true);
        let snap = input.snapshot();
        assert!(!snap.move_right);
        assert!(snap.move_left);
    }

    #[test]
    fn test_written_from_another_thread() {
        let input = Arc::new(SharedInput::new());
        let writer = Arc::clone(&input);
        std::thread::spawn(move || {
            writer.set_move_left(true);
            writer.press_launch();
        })
        .join()
        .unwrap();

        let snap = input.snapshot();
        assert!(snap.move_left);
        assert!(snap.launch);
        assert!(!snap.idle_mode);
    }
}
