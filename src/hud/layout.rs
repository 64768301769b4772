//! Layout math for the item bar.
//!
//! Pure functions so placement is testable without a window. The bar is
//! centered on its root entity; the root itself is anchored near the bottom
//! of the viewport by `bar_anchor`.

use bevy::prelude::*;

/// Width and height of one slot background in pixels.
pub const SLOT_SIZE: f32 = 48.0;

/// Gap between adjacent slots in pixels.
pub const SLOT_SPACING: f32 = 6.0;

/// Distance of the bar's center above the bottom edge of the viewport.
pub const BOTTOM_MARGIN: f32 = 60.0;

/// Edge length of item icon sprites inside a slot.
pub const ICON_SIZE: f32 = 32.0;

/// Vertical offset of the slot number label above the slot center.
pub const NUMBER_LABEL_OFFSET: f32 = 20.0;

/// Offset of the count label from the slot center toward the lower right corner.
pub const COUNT_LABEL_OFFSET: f32 = 14.0;

/// Z layer of the bar root. Keeps the HUD above world sprites.
pub const BAR_Z: f32 = 10.0;

/// Anchor height used before the primary window has reported a size.
/// The first resize message corrects the position.
pub const FALLBACK_VIEWPORT_HEIGHT: f32 = 720.0;

/// Total width of `slot_count` slots including the gaps between them.
pub fn total_width(slot_count: usize) -> f32 {
    slot_count as f32 * (SLOT_SIZE + SLOT_SPACING) - SLOT_SPACING
}

/// Horizontal center of slot `index` relative to the bar root.
///
/// The run of slots is centered on the root, so the first and last slots
/// mirror each other around x = 0.
pub fn slot_x(index: usize, slot_count: usize) -> f32 {
    let start_x = -total_width(slot_count) / 2.0 + SLOT_SIZE / 2.0;
    start_x + index as f32 * (SLOT_SIZE + SLOT_SPACING)
}

/// World-space anchor of the bar root for a centered 2D camera: centered
/// horizontally, `BOTTOM_MARGIN` above the bottom edge of the viewport.
pub fn bar_anchor(viewport_height: f32) -> Vec3 {
    Vec3::new(0.0, -viewport_height / 2.0 + BOTTOM_MARGIN, BAR_Z)
}
