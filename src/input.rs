use crate::physics::PhysicsState;
use glam::Vec2;

/// Pointer snapshot for one frame, as reported by the windowing layer.
///
/// `pressed` and `released` are edge flags for this frame only; `down` is the
/// held state. `over_mass` is the renderer's hit test of the press location
/// against the mass rectangle.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub position: Vec2,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    pub over_mass: bool,
}

impl PointerState {
    pub fn idle_at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn press(position: Vec2, over_mass: bool) -> Self {
        Self {
            position,
            pressed: true,
            down: true,
            released: false,
            over_mass,
        }
    }

    pub fn hold(position: Vec2) -> Self {
        Self {
            position,
            down: true,
            ..Default::default()
        }
    }

    pub fn release(position: Vec2) -> Self {
        Self {
            position,
            released: true,
            ..Default::default()
        }
    }
}

/// Who drives the mass position this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// No drag: the physics step integrates freely.
    Free,
    /// The pointer owns the position; the physics step is skipped.
    Held,
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer x minus mass x, captured at grab time.
        grab_offset: f32,
    },
}

impl DragState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn grab_offset(&self) -> Option<f32> {
        match *self {
            DragState::Dragging { grab_offset } => Some(grab_offset),
            DragState::Idle => None,
        }
    }

    /// Reconcile pointer input with the mass for one tick.
    ///
    /// A dragged mass follows the pointer with zero velocity, so a release
    /// leaves it at rest rather than flinging it.
    pub fn update(&mut self, physics: &mut PhysicsState, pointer: &PointerState) -> DragOutcome {
        let px = pointer.position.x;

        let grab_offset = match *self {
            DragState::Dragging { grab_offset } => grab_offset,
            DragState::Idle => {
                if !(pointer.pressed && pointer.over_mass) {
                    return DragOutcome::Free;
                }
                let grab_offset = px - physics.position;
                *self = DragState::Dragging { grab_offset };
                log::debug!("[drag] begin at x={} offset={}", physics.position, grab_offset);
                grab_offset
            }
        };

        if pointer.released {
            *self = DragState::Idle;
            physics.velocity = 0.0;
            log::debug!("[drag] end at x={}", physics.position);
            return DragOutcome::Held;
        }
        if pointer.down {
            physics.position = px - grab_offset;
            physics.velocity = 0.0;
            return DragOutcome::Held;
        }

        // Button neither held nor released: the release event was lost.
        log::warn!("[drag] lost pointer state while dragging, dropping drag");
        *self = DragState::Idle;
        DragOutcome::Free
    }
}
