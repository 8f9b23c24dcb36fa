use std::time::Duration;

use super::{EasingFunction, FoldParameter};

/// Walks the fold parameter from one value to another over a fixed
/// duration.
///
/// Time only advances through [`advance`](Self::advance), so replaying the
/// same ticks always yields the same sequence of fold states.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldAnimator {
    start: FoldParameter,
    target: FoldParameter,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFunction,
}

impl FoldAnimator {
    /// Animate from `start` to `target` over `duration`.
    #[must_use]
    pub fn new(
        start: FoldParameter,
        target: FoldParameter,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start,
            target,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Raw progress in `[0, 1]`. A zero duration is complete immediately.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the target has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Fold value the animation is heading to.
    #[must_use]
    pub fn target(&self) -> FoldParameter {
        self.target
    }

    /// Current fold state.
    #[must_use]
    pub fn current(&self) -> FoldParameter {
        let eased = self.easing.evaluate(self.progress());
        let (a, b) = (self.start.t(), self.target.t());
        FoldParameter::new(a + (b - a) * eased)
    }

    /// Advance the clock by `dt` and return the new fold state.
    pub fn advance(&mut self, dt: Duration) -> FoldParameter {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.current()
    }
}
