//! floatlabel Animation System
//!
//! Timed transitions and the scheduler that drives them.
//!
//! # Features
//!
//! - **Timed Transitions**: Fixed-duration moves between two values
//! - **Easing Curves**: Linear, cubic and bezier curves
//! - **Retargeting**: A new target supersedes the running transition,
//!   continuing from the value on screen
//! - **Scheduler**: A single frame-driven clock for every animated value

pub mod easing;
pub mod scheduler;
pub mod timing;
pub mod values;

pub use easing::Easing;
pub use scheduler::{AnimatedValue, AnimationScheduler, SchedulerHandle, TimingId};
pub use timing::{Timing, TimingConfig};
pub use values::Interpolate;
