//! Item identifiers for things the player can carry in the item bar.

/// Every item the game can place in an item bar slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Coin,
    Seed,
    Berry,
    Stone,
}

impl ItemKind {
    /// Human readable name, used in log lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemKind::Coin => "Coin",
            ItemKind::Seed => "Seed",
            ItemKind::Berry => "Berry",
            ItemKind::Stone => "Stone",
        }
    }

    /// Two letter label shown in a slot when the item has no icon texture.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            ItemKind::Coin => "Co",
            ItemKind::Seed => "Se",
            ItemKind::Berry => "Be",
            ItemKind::Stone => "St",
        }
    }

    /// Asset path of the item's icon, if it has one. Items without an icon
    /// render as their abbreviation instead.
    pub fn icon_path(&self) -> Option<&'static str> {
        match self {
            ItemKind::Coin => Some("textures/items/coin.png"),
            ItemKind::Seed => Some("textures/items/seed.png"),
            ItemKind::Berry => Some("textures/items/berry.png"),
            ItemKind::Stone => None,
        }
    }

    /// Sprite color used for the item's world pickup and as an icon fallback tint.
    pub fn pickup_color(&self) -> bevy::prelude::Color {
        use bevy::prelude::Color;
        match self {
            ItemKind::Coin => Color::srgb(0.9, 0.8, 0.2),
            ItemKind::Seed => Color::srgb(0.5, 0.35, 0.2),
            ItemKind::Berry => Color::srgb(0.8, 0.2, 0.4),
            ItemKind::Stone => Color::srgb(0.55, 0.55, 0.6),
        }
    }
}
