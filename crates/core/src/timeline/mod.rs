//! Scroll-driven flip-card timeline.

mod engine;
mod phase;
mod tilt;

pub use engine::{FrameOutput, ScrollGeometry, TimelineEngine};
pub use phase::{PhaseLayout, PhaseSample};
pub use tilt::Tilt;
