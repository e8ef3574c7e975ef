// SPDX-License-Identifier: MPL-2.0
//! Per-toast animation state machine.
//!
//! A toast moves through `Created → Entering → Visible → Leaving → Removed`.
//! Time is never read from the system clock here: every method takes the
//! current `Instant`, so tests can step through transitions deterministically.
//!
//! The horizontal offset is a fraction of the hidden distance: `1.0` means fully
//! off-screen, `0.0` means at rest.

use crate::config::{ENTRY_DELAY_MS, SLIDE_MS};
use std::time::{Duration, Instant};

const ENTRY_DELAY: Duration = Duration::from_millis(ENTRY_DELAY_MS);
const SLIDE: Duration = Duration::from_millis(SLIDE_MS);

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    Entering,
    Visible,
    Leaving,
    Removed,
}

/// Edge events produced while advancing a [`Lifecycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The entry slide started.
    SlideIn,
    /// The entry slide finished.
    Settled,
    /// The exit slide finished.
    Removed,
}

#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
    created_at: Instant,
    slide_in_at: Option<Instant>,
    leaving_at: Option<Instant>,
    /// Offset at the moment leaving started, so an interrupted entry exits smoothly.
    leave_from: f32,
}

impl Lifecycle {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            phase: Phase::Created,
            created_at: now,
            slide_in_at: None,
            leaving_at: None,
            leave_from: 1.0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Marks the toast as inserted in its container.
    pub fn insert(&mut self) {
        if self.phase == Phase::Created {
            self.phase = Phase::Entering;
        }
    }

    /// Applies the next due transition, if any. Call repeatedly until it
    /// returns `None` to catch up after a long gap between ticks.
    pub fn advance(&mut self, now: Instant) -> Option<Transition> {
        match self.phase {
            Phase::Entering => match self.slide_in_at {
                None => {
                    let start = self.created_at + ENTRY_DELAY;
                    (now >= start).then(|| {
                        self.slide_in_at = Some(start);
                        Transition::SlideIn
                    })
                }
                Some(start) => (now >= start + SLIDE).then(|| {
                    self.phase = Phase::Visible;
                    Transition::Settled
                }),
            },
            Phase::Leaving => {
                let start = self.leaving_at?;
                (now >= start + SLIDE).then(|| {
                    self.phase = Phase::Removed;
                    Transition::Removed
                })
            }
            Phase::Created | Phase::Visible | Phase::Removed => None,
        }
    }

    /// Starts the exit slide. Returns `false` if the toast is already leaving
    /// or gone.
    pub fn leave(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Created | Phase::Entering | Phase::Visible => {
                self.leave_from = self.offset(now);
                self.leaving_at = Some(now);
                self.phase = Phase::Leaving;
                true
            }
            Phase::Leaving | Phase::Removed => false,
        }
    }

    #[must_use]
    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, Phase::Leaving | Phase::Removed)
    }

    /// Current offset: `1.0` hidden, `0.0` at rest.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Created | Phase::Removed => 1.0,
            Phase::Visible => 0.0,
            Phase::Entering => match self.slide_in_at {
                None => 1.0,
                Some(start) => 1.0 - ease_out(progress(start, now)),
            },
            Phase::Leaving => {
                let Some(start) = self.leaving_at else {
                    return 1.0;
                };
                let from = self.leave_from;
                from + (1.0 - from) * ease_out(progress(start, now))
            }
        }
    }
}

fn progress(start: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / SLIDE.as_secs_f32()).clamp(0.0, 1.0)
}

/// Quadratic ease-out.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn entered(start: Instant) -> Lifecycle {
        let mut lifecycle = Lifecycle::new(start);
        lifecycle.insert();
        lifecycle
    }

    #[test]
    fn insert_moves_created_to_entering() {
        let start = Instant::now();
        let mut lifecycle = Lifecycle::new(start);
        assert_eq!(lifecycle.phase(), Phase::Created);
        lifecycle.insert();
        assert_eq!(lifecycle.phase(), Phase::Entering);
    }

    #[test]
    fn slide_starts_after_entry_delay() {
        let start = Instant::now();
        let mut lifecycle = entered(start);

        assert_eq!(lifecycle.advance(start + ms(5)), None);
        assert_eq!(lifecycle.offset(start + ms(5)), 1.0);
        assert_eq!(lifecycle.advance(start + ms(10)), Some(Transition::SlideIn));
        assert_eq!(lifecycle.advance(start + ms(10)), None);
    }

    #[test]
    fn settles_one_slide_after_slide_in() {
        let start = Instant::now();
        let mut lifecycle = entered(start);
        lifecycle.advance(start + ms(10));

        assert_eq!(lifecycle.advance(start + ms(309)), None);
        assert_eq!(lifecycle.advance(start + ms(310)), Some(Transition::Settled));
        assert_eq!(lifecycle.phase(), Phase::Visible);
        assert_eq!(lifecycle.offset(start + ms(400)), 0.0);
    }

    #[test]
    fn late_tick_catches_up_in_order() {
        let start = Instant::now();
        let mut lifecycle = entered(start);
        let late = start + ms(1000);

        let transitions: Vec<_> = std::iter::from_fn(|| lifecycle.advance(late)).collect();
        assert_eq!(transitions, vec![Transition::SlideIn, Transition::Settled]);
    }

    #[test]
    fn offset_decreases_during_entry() {
        let start = Instant::now();
        let mut lifecycle = entered(start);
        lifecycle.advance(start + ms(10));

        let early = lifecycle.offset(start + ms(60));
        let late = lifecycle.offset(start + ms(260));
        assert!(early < 1.0);
        assert!(late < early);
        assert!(late > 0.0);
    }

    #[test]
    fn leave_is_accepted_once() {
        let start = Instant::now();
        let mut lifecycle = entered(start);

        assert!(lifecycle.leave(start + ms(500)));
        assert!(!lifecycle.leave(start + ms(510)));
        assert_eq!(lifecycle.phase(), Phase::Leaving);
    }

    #[test]
    fn removed_one_slide_after_leaving() {
        let start = Instant::now();
        let mut lifecycle = entered(start);
        std::iter::from_fn(|| lifecycle.advance(start + ms(400))).for_each(drop);

        lifecycle.leave(start + ms(1000));
        assert_eq!(lifecycle.advance(start + ms(1299)), None);
        assert_eq!(lifecycle.advance(start + ms(1300)), Some(Transition::Removed));
        assert_eq!(lifecycle.phase(), Phase::Removed);
        assert!(!lifecycle.leave(start + ms(1400)));
    }

    #[test]
    fn interrupted_entry_exits_from_current_offset() {
        let start = Instant::now();
        let mut lifecycle = entered(start);
        lifecycle.advance(start + ms(10));

        let at_leave = lifecycle.offset(start + ms(100));
        lifecycle.leave(start + ms(100));

        assert_eq!(lifecycle.offset(start + ms(100)), at_leave);
        assert!(lifecycle.offset(start + ms(250)) > at_leave);
        assert!((lifecycle.offset(start + ms(400)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ease_out_is_monotonic_between_bounds() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}
