//! Interactive 1-D spring-mass-damper simulation core.
//!
//! One draggable mass on a spring, bouncing between walls, with a bounded
//! displacement history for a live graph. Rendering, widgets and windowing are
//! left to the caller, which feeds a [`FrameInput`] per frame and draws the
//! returned [`FrameView`].

pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod input;
pub mod observer;
pub mod physics;
pub mod session;
pub mod telemetry;
pub mod view;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use input::*;
pub use observer::*;
pub use physics::*;
pub use session::*;
pub use telemetry::*;
pub use view::*;
