use glam::Vec2;
use spring_sim::*;

const DT: f32 = 1.0 / 120.0;

#[derive(Default)]
struct CountingObserver {
    steps: usize,
    resolves: usize,
    samples: usize,
}

impl CountingObserver {
    fn total(&self) -> usize {
        self.steps + self.resolves + self.samples
    }
}

impl SimObserver for CountingObserver {
    fn on_step(&mut self, _state: &PhysicsState) {
        self.steps += 1;
    }

    fn on_resolve_bounds(&mut self, state: &PhysicsState, bounds: Bounds) {
        assert!(bounds.contains(state.position), "escaped bounds: {}", state.position);
        self.resolves += 1;
    }

    fn on_sample(&mut self, _sample: TelemetrySample) {
        self.samples += 1;
    }
}

fn tick(sim: &mut Simulation) -> FrameOutcome {
    sim.frame(&FrameInput::new(DT))
}

fn send(sim: &mut Simulation, event: SessionEvent) -> FrameOutcome {
    sim.frame(&FrameInput::new(DT).with_event(event))
}

fn displaced_sim(x: f32) -> Simulation {
    let mut sim = Simulation::default();
    sim.physics_mut().position = x;
    sim
}

#[test]
fn running_frame_steps_resolves_and_samples_once() {
    let mut sim = displaced_sim(300.0);
    let mut obs = CountingObserver::default();
    let out = sim.frame_observed(&FrameInput::new(DT), &mut obs);
    assert_eq!(out, FrameOutcome::Continue);
    assert_eq!((obs.steps, obs.resolves, obs.samples), (1, 1, 1));
    assert_eq!(sim.telemetry().len(), 1);
    assert!(sim.physics().velocity < 0.0, "spring should pull back");
}

#[test]
fn no_physics_outside_running() {
    let mut sim = displaced_sim(300.0);

    // Pausing frame itself already skips physics.
    let mut obs = CountingObserver::default();
    sim.frame_observed(&FrameInput::new(DT).with_event(SessionEvent::EscapePressed), &mut obs);
    assert_eq!(sim.mode(), SessionMode::Paused);
    assert_eq!(obs.total(), 0);

    let routes: [(&[SessionEvent], SessionMode); 4] = [
        (&[], SessionMode::Paused),
        (&[SessionEvent::Dialog(DialogChoice::OpenSettings)], SessionMode::Settings),
        (&[SessionEvent::Dialog(DialogChoice::ChangeTheme)], SessionMode::ThemeEdit),
        (
            &[
                SessionEvent::Dialog(DialogChoice::Back),
                SessionEvent::Dialog(DialogChoice::EditParameters),
            ],
            SessionMode::ParamEdit,
        ),
    ];
    for (events, expected) in routes {
        let mut input = FrameInput::new(DT);
        input.events.extend(events.iter().copied());
        sim.frame(&input);
        assert_eq!(sim.mode(), expected);

        let mut obs = CountingObserver::default();
        for _ in 0..10 {
            let pointer = PointerState::press(Vec2::new(350.0, 430.0), true);
            sim.frame_observed(&FrameInput::new(DT).with_pointer(pointer), &mut obs);
        }
        assert_eq!(obs.total(), 0, "physics ran in {expected}");
    }

    assert_eq!(sim.physics().position, 300.0);
    assert_eq!(sim.elapsed(), 0.0);
    assert!(sim.telemetry().is_empty());
    assert!(!sim.drag_state().is_dragging());
}

#[test]
fn elapsed_time_only_advances_while_running() {
    let mut sim = Simulation::default();
    for _ in 0..60 {
        tick(&mut sim);
    }
    let before = sim.elapsed();
    assert!((before - 0.5).abs() < 1e-4, "elapsed {before}");

    send(&mut sim, SessionEvent::EscapePressed);
    for _ in 0..60 {
        tick(&mut sim);
    }
    assert_eq!(sim.elapsed(), before);

    send(&mut sim, SessionEvent::EscapePressed);
    assert_eq!(sim.mode(), SessionMode::Running);
    assert!(sim.elapsed() > before);
    assert_eq!(sim.telemetry().latest().unwrap().time, sim.elapsed());
}

#[test]
fn dragging_overrides_integration() {
    let mut sim = displaced_sim(300.0);
    let grab = sim.view().mass_rect.center();
    assert!(sim.hit_test(grab));

    let mut obs = CountingObserver::default();
    sim.frame_observed(&FrameInput::new(DT).with_pointer(PointerState::press(grab, true)), &mut obs);
    assert!(sim.drag_state().is_dragging());

    for _ in 0..50 {
        sim.frame_observed(&FrameInput::new(DT).with_pointer(PointerState::hold(grab)), &mut obs);
        assert_eq!(sim.physics().position, 300.0);
        assert_eq!(sim.physics().velocity, 0.0);
    }
    assert_eq!(obs.steps, 0);
    assert_eq!(obs.resolves, 51);
    assert_eq!(obs.samples, 51);

    sim.frame_observed(&FrameInput::new(DT).with_pointer(PointerState::release(grab)), &mut obs);
    assert!(!sim.drag_state().is_dragging());
    assert_eq!(sim.physics().velocity, 0.0);
    assert_eq!(obs.steps, 0);

    tick(&mut sim);
    assert!(sim.physics().position < 300.0, "free motion resumes after release");
}

#[test]
fn dragged_mass_is_held_inside_bounds() {
    let mut sim = Simulation::default();
    let grab = sim.view().mass_rect.center();
    sim.frame(&FrameInput::new(DT).with_pointer(PointerState::press(grab, true)));
    sim.frame(&FrameInput::new(DT).with_pointer(PointerState::hold(Vec2::new(2000.0, grab.y))));
    let max = sim.config().layout.bounds().max;
    assert_eq!(sim.physics().position, max);

    sim.frame(&FrameInput::new(DT).with_pointer(PointerState::hold(Vec2::new(-2000.0, grab.y))));
    assert_eq!(sim.physics().position, sim.config().layout.bounds().min);
}

#[test]
fn press_without_hit_does_not_drag() {
    let mut sim = Simulation::default();
    let miss = Vec2::new(800.0, 100.0);
    assert!(!sim.hit_test(miss));
    sim.frame(&FrameInput::new(DT).with_pointer(PointerState::press(miss, false)));
    assert!(!sim.drag_state().is_dragging());
}

#[test]
fn frame_bounds_override_layout() {
    let mut sim = displaced_sim(300.0);
    let bounds = Bounds::new(100.0, 200.0).unwrap();
    sim.frame(&FrameInput::new(DT).with_bounds(bounds));
    assert_eq!(sim.physics().position, 200.0);
}

#[test]
fn mass_settles_between_walls() {
    let mut sim = displaced_sim(440.0);
    let bounds = sim.config().layout.bounds();
    for _ in 0..(120 * 60) {
        tick(&mut sim);
        assert!(bounds.contains(sim.physics().position));
    }
    assert!(sim.physics().displacement().abs() < 1.0);
}

#[test]
fn exit_from_pause_dialog_ends_session() {
    let mut sim = Simulation::default();
    send(&mut sim, SessionEvent::EscapePressed);
    let out = send(&mut sim, SessionEvent::Dialog(DialogChoice::from_pause_code(3)));
    assert_eq!(out, FrameOutcome::Exit);
    assert!(!sim.is_running());
    assert_eq!(tick(&mut sim), FrameOutcome::Exit);
}

#[test]
fn close_request_ends_session_from_dialogs() {
    let mut sim = Simulation::default();
    send(&mut sim, SessionEvent::EscapePressed);
    send(&mut sim, SessionEvent::Dialog(DialogChoice::OpenSettings));
    send(&mut sim, SessionEvent::Dialog(DialogChoice::ChangeTheme));
    assert_eq!(sim.mode(), SessionMode::ThemeEdit);
    assert_eq!(send(&mut sim, SessionEvent::CloseRequested), FrameOutcome::Exit);
}

#[test]
fn unknown_dialog_codes_change_nothing() {
    let mut sim = Simulation::default();
    send(&mut sim, SessionEvent::EscapePressed);
    send(&mut sim, SessionEvent::Dialog(DialogChoice::from_pause_code(-1)));
    send(&mut sim, SessionEvent::Dialog(DialogChoice::from_pause_code(9)));
    assert_eq!(sim.mode(), SessionMode::Paused);
    assert!(sim.is_running());
}

#[test]
fn reset_restarts_session() {
    let mut sim = displaced_sim(300.0);
    for _ in 0..30 {
        tick(&mut sim);
    }
    sim.set_params(SpringParams::default().with_damping(10.0));
    send(&mut sim, SessionEvent::EscapePressed);

    sim.reset();
    assert_eq!(sim.mode(), SessionMode::Running);
    assert_eq!(sim.elapsed(), 0.0);
    assert!(sim.telemetry().is_empty());
    assert_eq!(sim.physics().position, DEFAULT_POSITION);
    assert_eq!(sim.physics().velocity, 0.0);
    assert_eq!(sim.physics().params.damping, 10.0);
}

#[test]
fn set_params_clamps_slider_values() {
    let mut sim = Simulation::default();
    sim.set_params(SpringParams::default().with_spring_constant(900.0).with_mass(0.0));
    assert_eq!(sim.physics().params.spring_constant, 500.0);
    assert_eq!(sim.physics().params.mass, 0.1);
}

#[test]
fn theme_color_flows_to_view() {
    let mut sim = Simulation::default();
    assert_eq!(sim.view().theme, Rgba::default());
    let red = Rgba::new(230, 41, 55, 255);
    sim.set_theme_color(red);
    assert_eq!(sim.view().theme, red);
}

#[test]
fn view_projects_physics_state() {
    let sim = displaced_sim(250.0);
    let view = sim.view();
    assert_eq!(view.mode, SessionMode::Running);
    assert_eq!(view.position, 250.0);
    assert_eq!(view.displacement, 100.0);
    assert_eq!(view.damping, DampingKind::Underdamped);
    assert_eq!(view.mass_rect.origin.x, 250.0);
    assert_eq!(view.spring_attach.x, 250.0);
    assert_eq!(view.banner_alpha, 1.0);
    assert!(!view.dragging);
}

#[test]
fn graph_samples_follow_configured_window() {
    let config = SimConfig::new().with_graph_window(1.0);
    let mut sim = Simulation::new(config).unwrap();
    for _ in 0..240 {
        tick(&mut sim);
    }
    let start = sim.elapsed() - 1.0;
    let samples: Vec<_> = sim.graph_samples().collect();
    assert!(!samples.is_empty());
    assert!(samples.len() < 240);
    assert!(samples.iter().skip(1).all(|s| s.time >= start));
    assert!(samples[0].time < start + DT, "leading sample reaches the left edge");
}

#[test]
fn invalid_frame_bounds_fall_back_to_layout() {
    let mut sim = Simulation::default();
    let layout = SimConfig::default().layout.bounds();
    sim.physics_mut().position = f32::NAN;
    let input = FrameInput::new(DT).with_bounds(Bounds {
        min: f32::NAN,
        max: 450.0,
    });
    let mut obs = CountingObserver::default();
    assert_eq!(sim.frame_observed(&input, &mut obs), FrameOutcome::Continue);
    assert_eq!(obs.resolves, 1);
    let x = sim.physics().position;
    assert!(x.is_finite(), "position repaired, got {}", x);
    assert!(layout.contains(x), "{} outside layout bounds", x);
}

#[test]
fn invalid_config_is_rejected() {
    assert_eq!(
        Simulation::new(SimConfig::new().with_telemetry_capacity(0)).unwrap_err(),
        SimError::ZeroCapacity
    );
    assert!(matches!(
        Simulation::new(SimConfig::new().with_params(SpringParams::default().with_mass(-1.0))),
        Err(SimError::InvalidMass(_))
    ));
}
