//! Hooks for watching what the frame update does to the physics.

use crate::physics::{Bounds, PhysicsState};
use crate::telemetry::TelemetrySample;

/// Called by [`Simulation::frame_observed`](crate::Simulation::frame_observed)
/// right after the matching core operation. All methods default to no-ops.
pub trait SimObserver {
    /// After a free integration step.
    fn on_step(&mut self, _state: &PhysicsState) {}

    /// After the position was resolved against `bounds`.
    fn on_resolve_bounds(&mut self, _state: &PhysicsState, _bounds: Bounds) {}

    /// After a sample was appended to the telemetry buffer.
    fn on_sample(&mut self, _sample: TelemetrySample) {}
}

pub struct NoOpObserver;

impl SimObserver for NoOpObserver {}
