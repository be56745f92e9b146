use std::thread;
use std::time::Duration;

use anyhow::Context;
use glam::Vec2;
use instant::Instant;
use rand::prelude::*;

use spring_sim::{
    DialogChoice, FrameInput, FrameOutcome, PointerState, SessionEvent, SimConfig, Simulation,
    SpringParams, TARGET_FPS,
};

// Scripted session: drag the mass right, let go, pause, open settings,
// raise damping, resume, then exit through the pause dialog.
const DRAG_START_FRAME: u64 = 120;
const DRAG_END_FRAME: u64 = 240;
const DRAG_DISTANCE_PX: f32 = 200.0;
const PAUSE_FRAME: u64 = 900;
const SETTINGS_FRAME: u64 = 960;
const PARAMS_FRAME: u64 = 990;
const RESUME_FRAME: u64 = 1080;
const EXIT_PAUSE_FRAME: u64 = 2400;
const EXIT_FRAME: u64 = 2460;

// Occasional simulated OS stall to exercise unclamped dt.
const STALL_PROBABILITY: f64 = 0.002;
const STALL_DT_SEC: f32 = 0.25;

const LOG_EVERY_FRAMES: u64 = 120;

struct ScriptedInput {
    rng: StdRng,
    grab_point: Vec2,
}

impl ScriptedInput {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            grab_point: Vec2::ZERO,
        }
    }

    fn frame_input(&mut self, frame: u64, measured_dt: f32, sim: &mut Simulation) -> FrameInput {
        let dt = if self.rng.gen_bool(STALL_PROBABILITY) {
            log::warn!("[driver] simulated stall at frame {frame}");
            STALL_DT_SEC
        } else {
            measured_dt
        };
        let mut input = FrameInput::new(dt);

        match frame {
            DRAG_START_FRAME => {
                self.grab_point = sim.view().mass_rect.center();
                let over = sim.hit_test(self.grab_point);
                input = input.with_pointer(PointerState::press(self.grab_point, over));
            }
            f if f > DRAG_START_FRAME && f < DRAG_END_FRAME => {
                let t = (f - DRAG_START_FRAME) as f32 / (DRAG_END_FRAME - DRAG_START_FRAME) as f32;
                let p = self.grab_point + Vec2::new(DRAG_DISTANCE_PX * t, 0.0);
                input = input.with_pointer(PointerState::hold(p));
            }
            DRAG_END_FRAME => {
                let p = self.grab_point + Vec2::new(DRAG_DISTANCE_PX, 0.0);
                input = input.with_pointer(PointerState::release(p));
            }
            PAUSE_FRAME | EXIT_PAUSE_FRAME => {
                input = input.with_event(SessionEvent::EscapePressed);
            }
            SETTINGS_FRAME => {
                input = input.with_event(SessionEvent::Dialog(DialogChoice::from_pause_code(2)));
            }
            PARAMS_FRAME => {
                input =
                    input.with_event(SessionEvent::Dialog(DialogChoice::from_settings_code(1)));
                // Slider edit made while the parameter dialog is open.
                sim.set_params(sim.physics().params.with_damping(25.0));
            }
            RESUME_FRAME => {
                input = input
                    .with_event(SessionEvent::Dialog(DialogChoice::Back))
                    .with_event(SessionEvent::Dialog(DialogChoice::Back))
                    .with_event(SessionEvent::Dialog(DialogChoice::from_pause_code(1)));
            }
            EXIT_FRAME => {
                input = input.with_event(SessionEvent::Dialog(DialogChoice::from_pause_code(3)));
            }
            _ => {}
        }
        input
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::new().with_params(SpringParams::default());
    let mut sim = Simulation::new(config).context("invalid simulation config")?;
    let mut script = ScriptedInput::new(42);

    let frame_budget = Duration::from_secs_f64(1.0 / TARGET_FPS as f64);
    let mut last = Instant::now();
    let mut frame: u64 = 0;

    log::info!(
        "[driver] start x={} bounds={:?}",
        sim.physics().position,
        sim.config().layout.bounds()
    );

    while sim.is_running() {
        let frame_start = Instant::now();
        let dt = (frame_start - last).as_secs_f32();
        last = frame_start;

        let input = script.frame_input(frame, dt, &mut sim);
        if sim.frame(&input) == FrameOutcome::Exit {
            break;
        }

        if frame % LOG_EVERY_FRAMES == 0 {
            let view = sim.view();
            log::info!(
                "[frame {frame}] mode={} t={:.2}s x={:.1} disp={:+.2} {} samples={}",
                view.mode,
                view.elapsed,
                view.position,
                view.displacement,
                view.damping.label(),
                sim.graph_samples().count()
            );
        }

        frame += 1;
        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    let telemetry = sim.telemetry();
    log::info!(
        "[driver] exit after {frame} frames, {:.2}s simulated, displacement range [{:.2}, {:.2}]",
        sim.elapsed(),
        telemetry.min_displacement(),
        telemetry.max_displacement()
    );
    Ok(())
}
