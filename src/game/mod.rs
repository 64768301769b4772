//! The gameplay layer: the player, world pickups, and the inputs that
//! feed the item bar.

pub mod components;
pub mod plugin;
pub mod resources;
pub mod systems;

pub use components::*;
pub use plugin::*;
pub use resources::*;
pub use systems::*;
