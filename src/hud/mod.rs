//! The item bar heads-up display.
//!
//! `slot_bar` is the model (slot contents and selection), everything else
//! here is view and glue: layout math, marker components, spawn functions,
//! and the systems that bind input, apply game-logic requests, and keep the
//! visuals in step with the model.

pub mod components;
pub mod events;
pub mod layout;
pub mod plugin;
pub mod slot_bar;
pub mod spawn;
pub mod systems;

pub use components::*;
pub use events::*;
pub use layout::*;
pub use plugin::*;
pub use slot_bar::*;
pub use spawn::*;
pub use systems::*;
