//! Start-up configuration for a simulation session.

use crate::constants::{DEFAULT_POSITION, GRAPH_TIME_WINDOW_SEC, TELEMETRY_CAPACITY};
use crate::physics::SpringParams;
use crate::view::{Rgba, SpringLayout};

/// Initial values for a [`Simulation`](crate::Simulation).
///
/// ```
/// use spring_sim::{SimConfig, SpringParams};
///
/// let config = SimConfig::new()
///     .with_params(SpringParams::default().with_damping(20.0))
///     .with_initial_position(200.0)
///     .with_telemetry_capacity(500);
/// assert_eq!(config.telemetry_capacity, 500);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub params: SpringParams,
    /// Starting x, which is also the equilibrium.
    pub initial_position: f32,
    pub layout: SpringLayout,
    pub telemetry_capacity: usize,
    /// Seconds of history the graph shows.
    pub graph_window: f32,
    pub theme: Rgba,
}

impl SimConfig {
    pub fn new() -> Self {
        Self {
            params: SpringParams::default(),
            initial_position: DEFAULT_POSITION,
            layout: SpringLayout::default(),
            telemetry_capacity: TELEMETRY_CAPACITY,
            graph_window: GRAPH_TIME_WINDOW_SEC,
            theme: Rgba::default(),
        }
    }

    pub fn with_params(mut self, params: SpringParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_initial_position(mut self, x: f32) -> Self {
        self.initial_position = x;
        self
    }

    pub fn with_layout(mut self, layout: SpringLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_telemetry_capacity(mut self, capacity: usize) -> Self {
        self.telemetry_capacity = capacity;
        self
    }

    pub fn with_graph_window(mut self, seconds: f32) -> Self {
        self.graph_window = seconds;
        self
    }

    pub fn with_theme(mut self, theme: Rgba) -> Self {
        self.theme = theme;
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
