//! Non-blocking message loop.
//!
//! Frames are paced by message availability: whenever the queue is empty the
//! loop advances the animation and asks the platform for a repaint.


use std::cell::RefCell;
use std::time::Instant;

use crate::state::AppState;

/// Result of one non-blocking look at the message queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpStatus {
    /// A message was translated and dispatched.
    Dispatched,
    /// No message was pending.
    Idle,
    /// The quit signal arrived, carrying the process exit code.
    Quit(i32),
}

/// Platform message queue driven by [`run_loop`].
pub trait MessagePump {
    /// Removes at most one pending message and dispatches it.
    fn pump(&mut self) -> PumpStatus;

    /// Marks the whole client area as needing repaint.
    fn request_repaint(&mut self);
}

/// Counters collected over one run of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub dispatched: u64,
    pub idle: u64,
    pub repaints: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOutcome {
    pub exit_code: i32,
    pub stats: LoopStats,
}

/// Runs until the quit signal and returns its exit code.
pub fn run_loop<P: MessagePump>(pump: &mut P, state: &RefCell<AppState>) -> i32 {
    run_loop_with_stats(pump, state).exit_code
}

pub fn run_loop_with_stats<P: MessagePump>(pump: &mut P, state: &RefCell<AppState>) -> LoopOutcome {
    let mut stats = LoopStats::default();
    let mut last_tick = Instant::now();

    loop {
        match pump.pump() {
            PumpStatus::Dispatched => stats.dispatched += 1,
            PumpStatus::Quit(exit_code) => {
                log::debug!(
                    "quit with code {exit_code} after {} idle iterations, {} messages",
                    stats.idle,
                    stats.dispatched
                );
                return LoopOutcome { exit_code, stats };
            }
            PumpStatus::Idle => {
                let now = Instant::now();
                let position = state.borrow_mut().advance(now - last_tick);
                last_tick = now;
                stats.idle += 1;

                log::trace!("idle: position {position}");
                pump.request_repaint();
                stats.repaints += 1;
            }
        }
    }
}
