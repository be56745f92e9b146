use glam::Vec2;

// Shared tuning constants for the spring-mass simulation and its frame driver.

// Default physical state
pub const DEFAULT_POSITION: f32 = 150.0; // initial x, also the equilibrium
pub const DEFAULT_SPRING_CONSTANT: f32 = 100.0; // k
pub const DEFAULT_MASS: f32 = 5.0; // m
pub const DEFAULT_DAMPING: f32 = 4.0; // c
pub const DEFAULT_RESTITUTION: f32 = 0.1; // e

// Slider ranges, inclusive
pub const SPRING_CONSTANT_RANGE: (f32, f32) = (0.0, 500.0);
pub const MASS_RANGE: (f32, f32) = (0.1, 500.0);
pub const DAMPING_RANGE: (f32, f32) = (0.0, 50.0);
pub const RESTITUTION_RANGE: (f32, f32) = (0.0, 1.0);

// Damping classification band around zeta = 1
pub const CRITICAL_DAMPING_BAND: f32 = 0.05;

// Scene layout (screen pixels)
pub const SCREEN_WIDTH: f32 = 900.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const FLOOR_HEIGHT: f32 = SCREEN_HEIGHT * 0.8; // y of the floor line
pub const RECT_SIZE: f32 = 100.0; // side of the mass square

// Spring geometry; bounds are derived from its visual length budget
pub const SPRING_SEGMENTS: u32 = 20;
pub const SPRING_SEGMENT_LENGTH: f32 = RECT_SIZE / 4.0;
pub const SPRING_STOP_MARGIN: f32 = 50.0; // keeps the coil from fully closing or opening
pub const SPRING_ANCHOR: Vec2 = Vec2::new(0.0, FLOOR_HEIGHT - RECT_SIZE / 2.0);

// Telemetry
pub const TELEMETRY_CAPACITY: usize = 2000;
pub const GRAPH_TIME_WINDOW_SEC: f32 = 15.0;
pub const GRAPH_MIN_DISPLACEMENT_RANGE: f32 = 0.1; // avoids a zero-height y axis

// Startup banner (simulated seconds)
pub const STARTUP_TEXT_PERSIST_SEC: f32 = 8.0;
pub const STARTUP_TEXT_FADE_SEC: f32 = 7.0;

// Theme
pub const DEFAULT_THEME_RGBA: [u8; 4] = [102, 191, 255, 255]; // sky blue
pub const EQUILIBRIUM_LINE_LIGHTEN: f32 = 0.5;

// Frame driver
pub const TARGET_FPS: u32 = 120;
