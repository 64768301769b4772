pub use bevy::prelude::*;
pub use crate::states::*;

// Re-export the item bar model and its messages
pub use crate::hud::events::*;
pub use crate::hud::slot_bar::*;
pub use crate::item::*;

// Re-export components
pub use crate::game::components::*;
pub use crate::hud::components::*;
pub use crate::menu::components::*;
