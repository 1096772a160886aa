//! Timed transitions
//!
//! A [`Timing`] moves a value from a start point to a target over a fixed
//! duration along an [`Easing`] curve. Retargeting restarts the clock from
//! the value currently displayed, so an interrupted transition never jumps.

use crate::easing::Easing;
use crate::values::Interpolate;

/// Configuration for a timed transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingConfig {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Curve applied to linear progress
    pub easing: Easing,
    /// Time to hold the start value before moving (ms)
    pub delay_ms: u32,
}

impl TimingConfig {
    /// Duration of the floating label transitions
    pub const STANDARD_DURATION_MS: u32 = 230;

    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            easing: Easing::default(),
            delay_ms: 0,
        }
    }

    /// 230ms ease-in-out, used by the field's label and holder transitions
    pub fn standard() -> Self {
        Self::new(Self::STANDARD_DURATION_MS)
    }

    /// A transition that completes on registration
    pub fn instant() -> Self {
        Self::new(0)
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    fn total_ms(&self) -> f32 {
        self.delay_ms as f32 + self.duration_ms as f32
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// A single timed transition between two values
#[derive(Clone, Debug)]
pub struct Timing<T: Interpolate = f32> {
    from: T,
    to: T,
    config: TimingConfig,
    elapsed_ms: f32,
    playing: bool,
}

impl<T: Interpolate> Timing<T> {
    /// Create a transition that starts playing immediately
    pub fn new(from: T, to: T, config: TimingConfig) -> Self {
        let mut timing = Self {
            from,
            to,
            config,
            elapsed_ms: 0.0,
            playing: true,
        };
        timing.settle_if_done();
        timing
    }

    /// Redirect toward `to`, starting from the value shown right now
    ///
    /// Any remaining part of the previous transition is discarded.
    pub fn retarget(&mut self, to: T, config: TimingConfig) {
        self.from = self.value();
        self.to = to;
        self.config = config;
        self.elapsed_ms = 0.0;
        self.playing = true;
        self.settle_if_done();
    }

    /// Advance by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        self.settle_if_done();
    }

    fn settle_if_done(&mut self) {
        let total = self.config.total_ms();
        if self.elapsed_ms >= total {
            self.elapsed_ms = total;
            self.playing = false;
        }
    }

    /// Linear progress through the moving phase (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        let moving = self.elapsed_ms - self.config.delay_ms as f32;
        if moving <= 0.0 && self.playing {
            return 0.0;
        }
        if self.config.duration_ms == 0 {
            return 1.0;
        }
        (moving / self.config.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated value
    pub fn value(&self) -> T {
        if !self.playing {
            return self.to.clone();
        }
        let eased = self.config.easing.apply(self.progress());
        self.from.lerp(&self.to, eased)
    }

    pub fn target(&self) -> &T {
        &self.to
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatlabel_core::Color;

    #[test]
    fn test_linear_timing() {
        let mut timing = Timing::new(9.0_f32, 5.0, TimingConfig::new(200).easing(Easing::Linear));
        assert!(timing.is_playing());
        assert!((timing.value() - 9.0).abs() < 1e-6);

        timing.tick(100.0);
        assert!((timing.value() - 7.0).abs() < 1e-4);

        timing.tick(100.0);
        assert!(!timing.is_playing());
        assert_eq!(timing.value(), 5.0);
    }

    #[test]
    fn test_long_config_does_not_overflow() {
        let config = TimingConfig::new(u32::MAX).delay(u32::MAX);
        let mut timing = Timing::new(0.0_f32, 1.0, config);

        timing.tick(1000.0);
        assert!(timing.is_playing());
        assert!(timing.value() < 1.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let timing = Timing::new(0.0_f32, 30.0, TimingConfig::instant());
        assert!(!timing.is_playing());
        assert_eq!(timing.value(), 30.0);
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut timing = Timing::new(0.0_f32, 1.0, TimingConfig::new(100).easing(Easing::Linear));
        timing.tick(50.0);
        assert!((timing.value() - 0.5).abs() < 1e-4);

        timing.retarget(0.0, TimingConfig::new(100).easing(Easing::Linear));
        assert!((timing.value() - 0.5).abs() < 1e-4);

        timing.tick(50.0);
        assert!((timing.value() - 0.25).abs() < 1e-4);

        timing.tick(50.0);
        assert_eq!(timing.value(), 0.0);
    }

    #[test]
    fn test_delay_holds_start_value() {
        let mut timing = Timing::new(
            0.0_f32,
            10.0,
            TimingConfig::new(100).easing(Easing::Linear).delay(50),
        );
        timing.tick(40.0);
        assert_eq!(timing.value(), 0.0);
        timing.tick(60.0);
        assert!((timing.value() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_color_timing() {
        let dim = Color::from_hex(0xB1B1B1);
        let focused = Color::from_hex(0x1482FE);
        let mut timing = Timing::new(dim, focused, TimingConfig::standard());

        timing.tick(TimingConfig::STANDARD_DURATION_MS as f32);
        assert_eq!(timing.value(), focused);
    }
}
