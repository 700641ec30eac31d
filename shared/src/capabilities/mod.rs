//! Shell-facing capabilities.
//!
//! The page only ever asks the shell to re-render: notifications travel in the
//! view model and submission stays local, so `Render` is the whole surface.
pub use crux_core::render::Render;

use crate::event::Event;
use crate::App;

#[derive(crux_macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
}
