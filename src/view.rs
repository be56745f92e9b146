//! Render-facing types derived from the simulation each tick.
//!
//! Nothing here feeds back into the physics. The renderer reads a
//! [`FrameView`] and draws; the frame driver uses [`MassRect::contains`] to
//! produce the hit test the drag controller needs.

use crate::constants::{
    DEFAULT_THEME_RGBA, FLOOR_HEIGHT, RECT_SIZE, SPRING_ANCHOR, SPRING_SEGMENTS,
    SPRING_SEGMENT_LENGTH, SPRING_STOP_MARGIN, STARTUP_TEXT_FADE_SEC, STARTUP_TEXT_PERSIST_SEC,
};
use crate::physics::{Bounds, DampingKind};
use crate::session::SessionMode;
use glam::Vec2;

/// Geometry of the spring and the mass it drags along the floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringLayout {
    pub anchor: Vec2,
    pub segments: u32,
    pub segment_length: f32,
    pub stop_margin: f32,
    pub rect_size: f32,
    pub floor_y: f32,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self {
            anchor: SPRING_ANCHOR,
            segments: SPRING_SEGMENTS,
            segment_length: SPRING_SEGMENT_LENGTH,
            stop_margin: SPRING_STOP_MARGIN,
            rect_size: RECT_SIZE,
            floor_y: FLOOR_HEIGHT,
        }
    }
}

impl SpringLayout {
    /// Full extension of the coil.
    #[inline]
    pub fn spring_length(&self) -> f32 {
        self.segments as f32 * self.segment_length
    }

    /// Legal position range: the coil may neither close up nor stretch past
    /// its length, each with `stop_margin` to spare. A margin too large for
    /// the coil collapses the range onto its midpoint.
    pub fn bounds(&self) -> Bounds {
        let lo = self.anchor.x + self.stop_margin;
        let hi = self.anchor.x + self.spring_length() - self.stop_margin;
        if lo <= hi {
            Bounds { min: lo, max: hi }
        } else {
            let mid = self.anchor.x + self.spring_length() * 0.5;
            Bounds { min: mid, max: mid }
        }
    }

    /// Mass square resting on the floor with its left edge at `position`.
    pub fn mass_rect(&self, position: f32) -> MassRect {
        MassRect {
            origin: Vec2::new(position, self.floor_y - self.rect_size),
            size: Vec2::splat(self.rect_size),
        }
    }

    /// Point where the coil meets the mass: its left edge, at anchor height.
    pub fn attach_point(&self, position: f32) -> Vec2 {
        Vec2::new(position, self.anchor.y)
    }
}

/// Axis-aligned rectangle in screen space (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MassRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl MassRect {
    /// Inclusive on all edges.
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.origin + self.size;
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Rgba {
    fn default() -> Self {
        let [r, g, b, a] = DEFAULT_THEME_RGBA;
        Self { r, g, b, a }
    }
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Blend each colour channel towards white by `amount` in [0, 1]; alpha is kept.
    pub fn lighten(self, amount: f32) -> Self {
        let t = amount.clamp(0.0, 1.0);
        let mix = |c: u8| (c as f32 + (255.0 - c as f32) * t) as u8;
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
            a: self.a,
        }
    }

    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Opacity of the startup hint at simulated time `elapsed`.
pub fn startup_banner_alpha(elapsed: f32) -> f32 {
    if elapsed <= STARTUP_TEXT_PERSIST_SEC {
        1.0
    } else {
        let t = (elapsed - STARTUP_TEXT_PERSIST_SEC) / STARTUP_TEXT_FADE_SEC;
        (1.0 - t).clamp(0.0, 1.0)
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameView {
    pub mode: SessionMode,
    pub position: f32,
    pub displacement: f32,
    pub damping: DampingKind,
    pub mass_rect: MassRect,
    pub spring_anchor: Vec2,
    pub spring_attach: Vec2,
    pub theme: Rgba,
    pub elapsed: f32,
    pub banner_alpha: f32,
    pub dragging: bool,
}
