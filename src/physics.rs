//! One-dimensional spring-mass-damper physics.
//!
//! A single point mass moves along x, pulled back towards `equilibrium` by a
//! Hookean spring and slowed by linear viscous damping. Walls at the ends of
//! the legal range reflect the mass with a coefficient of restitution.

use crate::constants::{
    CRITICAL_DAMPING_BAND, DAMPING_RANGE, DEFAULT_DAMPING, DEFAULT_MASS, DEFAULT_POSITION,
    DEFAULT_RESTITUTION, DEFAULT_SPRING_CONSTANT, MASS_RANGE, RESTITUTION_RANGE,
    SPRING_CONSTANT_RANGE,
};
use crate::error::{SimError, SimResult};

/// Tunable coefficients of the system, as edited by the parameter sliders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub spring_constant: f32,
    pub mass: f32,
    pub damping: f32,
    pub restitution: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            spring_constant: DEFAULT_SPRING_CONSTANT,
            mass: DEFAULT_MASS,
            damping: DEFAULT_DAMPING,
            restitution: DEFAULT_RESTITUTION,
        }
    }
}

impl SpringParams {
    pub fn with_spring_constant(mut self, k: f32) -> Self {
        self.spring_constant = k;
        self
    }

    pub fn with_mass(mut self, m: f32) -> Self {
        self.mass = m;
        self
    }

    pub fn with_damping(mut self, c: f32) -> Self {
        self.damping = c;
        self
    }

    pub fn with_restitution(mut self, e: f32) -> Self {
        self.restitution = e;
        self
    }

    /// Clamp every coefficient into its slider range. Non-finite values fall
    /// back to the default for that coefficient.
    pub fn clamped(self) -> Self {
        let defaults = Self::default();
        let fit = |v: f32, fallback: f32, (lo, hi): (f32, f32)| {
            if v.is_finite() {
                v.clamp(lo, hi)
            } else {
                fallback
            }
        };
        Self {
            spring_constant: fit(
                self.spring_constant,
                defaults.spring_constant,
                SPRING_CONSTANT_RANGE,
            ),
            mass: fit(self.mass, defaults.mass, MASS_RANGE),
            damping: fit(self.damping, defaults.damping, DAMPING_RANGE),
            restitution: fit(self.restitution, defaults.restitution, RESTITUTION_RANGE),
        }
    }

    /// Strict check against the physical preconditions (not the slider ranges):
    /// `k >= 0`, `m > 0`, `c >= 0`, `0 <= e <= 1`, all finite.
    pub fn validated(self) -> SimResult<Self> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SimError::InvalidMass(self.mass));
        }
        check_range("spring_constant", self.spring_constant, 0.0, f32::MAX)?;
        check_range("damping", self.damping, 0.0, f32::MAX)?;
        check_range("restitution", self.restitution, 0.0, 1.0)?;
        Ok(self)
    }
}

fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> SimResult<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(SimError::ParameterOutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

/// Inclusive legal range for the mass position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub fn new(min: f32, max: f32) -> SimResult<Self> {
        let bounds = Self { min, max };
        if bounds.is_valid() {
            Ok(bounds)
        } else {
            Err(SimError::InvalidBounds { min, max })
        }
    }

    pub fn contains(&self, x: f32) -> bool {
        x >= self.min && x <= self.max
    }

    /// Both ends finite and ordered, as `Bounds::new` requires.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Physical state of the spring-mass system.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsState {
    pub position: f32,
    pub velocity: f32,
    pub params: SpringParams,
    pub equilibrium: f32,
}

impl Default for PhysicsState {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION, SpringParams::default())
    }
}

impl PhysicsState {
    /// Mass at rest at `position`, which also becomes the equilibrium point.
    pub fn new(position: f32, params: SpringParams) -> Self {
        Self {
            position,
            velocity: 0.0,
            params,
            equilibrium: position,
        }
    }

    /// Signed offset from the rest position.
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.position - self.equilibrium
    }

    /// Advance by `dt` with semi-implicit Euler: velocity first, then position
    /// from the updated velocity.
    pub fn step(&mut self, dt: f32) {
        let p = &self.params;
        debug_assert!(p.mass != 0.0, "spring-mass step with zero mass");
        let a = accel(
            self.displacement(),
            self.velocity,
            p.spring_constant,
            p.mass,
            p.damping,
        );
        self.velocity += a * dt;
        self.position += self.velocity * dt;
    }

    /// Clamp into `[x_min, x_max]`, reflecting velocity that points into a wall.
    ///
    /// Both walls are checked independently. An inverted pair is swapped, and a
    /// non-finite state is reset to a finite one so nothing downstream sees NaN.
    pub fn resolve_bounds(&mut self, x_min: f32, x_max: f32) {
        // A non-finite bound leaves that side open.
        let x_min = if x_min.is_finite() {
            x_min
        } else {
            log::warn!("[physics] non-finite min bound {}, leaving side open", x_min);
            f32::NEG_INFINITY
        };
        let x_max = if x_max.is_finite() {
            x_max
        } else {
            log::warn!("[physics] non-finite max bound {}, leaving side open", x_max);
            f32::INFINITY
        };
        let (x_min, x_max) = if x_min > x_max {
            log::warn!("[physics] inverted bounds min={} max={}, swapping", x_min, x_max);
            (x_max, x_min)
        } else {
            (x_min, x_max)
        };

        if !self.position.is_finite() {
            log::warn!("[physics] non-finite position {}, resetting", self.position);
            let rest = if self.equilibrium.is_finite() {
                self.equilibrium
            } else {
                0.0
            };
            self.position = rest.max(x_min).min(x_max);
            self.velocity = 0.0;
        }
        if !self.velocity.is_finite() {
            log::warn!("[physics] non-finite velocity {}, zeroing", self.velocity);
            self.velocity = 0.0;
        }

        let e = self.params.restitution;
        if self.position < x_min {
            self.position = x_min;
            if self.velocity < 0.0 {
                self.velocity = -e * self.velocity;
            }
        }
        if self.position > x_max {
            self.position = x_max;
            if self.velocity > 0.0 {
                self.velocity = -e * self.velocity;
            }
        }
    }

    pub fn resolve_within(&mut self, bounds: Bounds) {
        self.resolve_bounds(bounds.min, bounds.max);
    }

    pub fn damping_kind(&self) -> DampingKind {
        classify_damping(
            self.params.damping,
            self.params.spring_constant,
            self.params.mass,
        )
    }
}

/// Hooke's law plus linear viscous damping: `-(k/m)x - (c/m)v`.
///
/// `m` must be non-zero.
#[inline]
pub fn accel(displacement: f32, velocity: f32, k: f32, m: f32, c: f32) -> f32 {
    -(k / m) * displacement - (c / m) * velocity
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DampingKind {
    Underdamped,
    CriticallyDamped,
    Overdamped,
}

impl DampingKind {
    pub fn label(self) -> &'static str {
        match self {
            DampingKind::Underdamped => "Underdamped",
            DampingKind::CriticallyDamped => "Critically damped",
            DampingKind::Overdamped => "Overdamped",
        }
    }
}

/// Critical damping coefficient `2 * sqrt(k * m)`.
#[inline]
pub fn critical_damping(k: f32, m: f32) -> f32 {
    2.0 * (k * m).sqrt()
}

/// Damping ratio `zeta = c / c_crit`.
#[inline]
pub fn damping_ratio(c: f32, k: f32, m: f32) -> f32 {
    c / critical_damping(k, m)
}

/// Classify by damping ratio, treating `|zeta - 1| <= 0.05` as critical since
/// slider values rarely land on 1.0 exactly.
pub fn classify_damping(c: f32, k: f32, m: f32) -> DampingKind {
    let zeta = damping_ratio(c, k, m);
    // Ordered so a NaN ratio (c = k = 0) fails both tests and lands on critical.
    if zeta < 1.0 - CRITICAL_DAMPING_BAND {
        DampingKind::Underdamped
    } else if zeta > 1.0 + CRITICAL_DAMPING_BAND {
        DampingKind::Overdamped
    } else {
        DampingKind::CriticallyDamped
    }
}
