use crate::config::SimConfig;
use crate::error::SimResult;
use crate::input::{DragOutcome, DragState, PointerState};
use crate::observer::{NoOpObserver, SimObserver};
use crate::physics::{Bounds, PhysicsState, SpringParams};
use crate::session::{Session, SessionEvent, SessionMode};
use crate::telemetry::{TelemetryBuffer, TelemetrySample};
use crate::view::{startup_banner_alpha, FrameView, Rgba};
use glam::Vec2;
use smallvec::SmallVec;

/// Everything the windowing layer reports for one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame. Not clamped.
    pub dt: f32,
    pub pointer: PointerState,
    /// Mode events in the order they happened this frame.
    pub events: SmallVec<[SessionEvent; 2]>,
    /// Position range for this frame; `None` uses the spring layout's range.
    pub bounds: Option<Bounds>,
}

impl FrameInput {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ..Default::default()
        }
    }

    pub fn with_pointer(mut self, pointer: PointerState) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn with_event(mut self, event: SessionEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Exit,
}

/// Single owner of all per-session state, driven once per frame.
///
/// Physics is the only source of truth for the mass position; the render view
/// is recomputed from it every tick. The drag controller is the one other
/// writer, and only while a drag is active.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimConfig,
    physics: PhysicsState,
    drag: DragState,
    session: Session,
    telemetry: TelemetryBuffer,
    theme: Rgba,
    /// Simulated seconds; only advances while `Running`.
    elapsed: f32,
}

impl Default for Simulation {
    fn default() -> Self {
        let config = SimConfig::default();
        Self {
            physics: PhysicsState::new(config.initial_position, config.params),
            drag: DragState::Idle,
            session: Session::new(),
            telemetry: TelemetryBuffer::new(),
            theme: config.theme,
            elapsed: 0.0,
            config,
        }
    }
}

impl Simulation {
    pub fn new(config: SimConfig) -> SimResult<Self> {
        let params = config.params.validated()?;
        let telemetry = TelemetryBuffer::with_capacity(config.telemetry_capacity)?;
        Ok(Self {
            physics: PhysicsState::new(config.initial_position, params),
            drag: DragState::Idle,
            session: Session::new(),
            telemetry,
            theme: config.theme,
            elapsed: 0.0,
            config,
        })
    }

    pub fn frame(&mut self, input: &FrameInput) -> FrameOutcome {
        self.frame_observed(input, &mut NoOpObserver)
    }

    /// Run one tick: mode events first, then, only in `Running`, the drag or
    /// free step, bounds resolution and a telemetry sample.
    pub fn frame_observed<O: SimObserver>(
        &mut self,
        input: &FrameInput,
        observer: &mut O,
    ) -> FrameOutcome {
        for event in &input.events {
            self.session.handle(*event);
        }
        if self.session.is_terminated() {
            return FrameOutcome::Exit;
        }
        if !self.session.mode().simulates() {
            return FrameOutcome::Continue;
        }

        let dt = input.dt;
        self.elapsed += dt;

        if self.drag.update(&mut self.physics, &input.pointer) == DragOutcome::Free {
            self.physics.step(dt);
            observer.on_step(&self.physics);
        }

        let bounds = match input.bounds {
            Some(b) if b.is_valid() => b,
            Some(b) => {
                log::warn!(
                    "[frame] invalid bounds min={} max={}, using layout",
                    b.min,
                    b.max
                );
                self.config.layout.bounds()
            }
            None => self.config.layout.bounds(),
        };
        self.physics.resolve_within(bounds);
        observer.on_resolve_bounds(&self.physics, bounds);

        let sample = TelemetrySample {
            time: self.elapsed,
            displacement: self.physics.displacement(),
        };
        self.telemetry.append(sample.time, sample.displacement);
        observer.on_sample(sample);

        FrameOutcome::Continue
    }

    /// Restart: default physics from the config, no drag, empty graph, `Running`.
    pub fn reset(&mut self) {
        self.physics = PhysicsState::new(self.config.initial_position, self.physics.params);
        self.drag = DragState::Idle;
        self.session.reset();
        self.telemetry.reset();
        self.elapsed = 0.0;
        log::info!("[session] reset");
    }

    /// Apply slider values, clamped to their ranges.
    pub fn set_params(&mut self, params: SpringParams) {
        self.physics.params = params.clamped();
    }

    pub fn set_theme_color(&mut self, color: Rgba) {
        self.theme = color;
    }

    /// Whether `point` lies on the mass as currently drawn.
    pub fn hit_test(&self, point: Vec2) -> bool {
        self.config.layout.mass_rect(self.physics.position).contains(point)
    }

    pub fn view(&self) -> FrameView {
        let layout = &self.config.layout;
        let position = self.physics.position;
        FrameView {
            mode: self.session.mode(),
            position,
            displacement: self.physics.displacement(),
            damping: self.physics.damping_kind(),
            mass_rect: layout.mass_rect(position),
            spring_anchor: layout.anchor,
            spring_attach: layout.attach_point(position),
            theme: self.theme,
            elapsed: self.elapsed,
            banner_alpha: startup_banner_alpha(self.elapsed),
            dragging: self.drag.is_dragging(),
        }
    }

    /// Samples inside the configured graph window, oldest first.
    pub fn graph_samples(&self) -> impl Iterator<Item = &TelemetrySample> + '_ {
        self.telemetry.window(self.elapsed, self.config.graph_window)
    }

    pub fn physics(&self) -> &PhysicsState {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut PhysicsState {
        &mut self.physics
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn mode(&self) -> SessionMode {
        self.session.mode()
    }

    pub fn is_running(&self) -> bool {
        !self.session.is_terminated()
    }

    pub fn telemetry(&self) -> &TelemetryBuffer {
        &self.telemetry
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn theme(&self) -> Rgba {
        self.theme
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
