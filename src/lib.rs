pub mod game;
pub mod hud;
pub mod item;
pub mod menu;
pub mod prelude;
pub mod states;

pub use game::plugin as game_plugin;
pub use hud::plugin as hud_plugin;
pub use menu::plugin as menu_plugin;
