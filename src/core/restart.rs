//! Debounced restart button latch.
//!
//! [`RestartTrigger::on_edge`] is meant to be called from an interrupt or
//! signal context. It never allocates, locks or fails, and touches nothing
//! but the atomics below. The request handler observes the latch with
//! [`RestartTrigger::consume`].

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use super::config::DEBOUNCE_QUIET_US;

/// Source of monotonic timestamps for stamping button edges.
pub trait Clock {
    fn now_micros(&self) -> u64;
}

/// Edge-triggered, debounced restart request shared between the button
/// handler and the game controller.
///
/// Edge times are kept as the low 32 bits of the clock so the trigger only
/// needs 32-bit atomics. Elapsed time is computed modulo 2^32, which stays
/// correct across the counter wrapping (about every 71 minutes).
#[derive(Debug)]
pub struct RestartTrigger {
    quiet_us: u32,
    last_edge_us: AtomicU32,
    accepted: AtomicU32,
    armed: AtomicBool,
}

impl RestartTrigger {
    /// Idle trigger ignoring edges closer than `quiet_us` to the last
    /// accepted one.
    pub const fn new(quiet_us: u32) -> Self {
        Self {
            quiet_us,
            last_edge_us: AtomicU32::new(0),
            accepted: AtomicU32::new(0),
            armed: AtomicBool::new(false),
        }
    }

    /// Record a falling edge seen at `now_us`. Returns whether the edge
    /// passed the debounce filter.
    ///
    /// Accepted edges alternate direction; only odd-numbered ones arm the
    /// latch. Even ones leave it as it is.
    pub fn on_edge(&self, now_us: u64) -> bool {
        let now = now_us as u32;
        let seen = self.accepted.load(Ordering::Relaxed);
        let last = self.last_edge_us.load(Ordering::Relaxed);
        if seen != 0 && now.wrapping_sub(last) < self.quiet_us {
            return false;
        }
        self.last_edge_us.store(now, Ordering::Relaxed);
        let count = self.accepted.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        if count & 1 == 1 {
            self.armed.store(true, Ordering::Release);
        }
        true
    }

    /// Stamp an edge with `clock`.
    pub fn press<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        self.on_edge(clock.now_micros())
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    /// Take the pending restart, if any. Returns `false` when idle.
    pub fn consume(&self) -> bool {
        self.armed.swap(false, Ordering::AcqRel)
    }

    /// Number of edges that passed the debounce filter so far.
    pub fn accepted_edges(&self) -> u32 {
        self.accepted.load(Ordering::Relaxed)
    }

    pub fn quiet_us(&self) -> u32 {
        self.quiet_us
    }
}

impl Default for RestartTrigger {
    fn default() -> Self {
        Self::new(DEBOUNCE_QUIET_US)
    }
}
