use egui::{Pos2, pos2};

/// Grid cell size in canvas-space units.
pub const GRID_PITCH: f32 = 20.0;

/// Grid backdrop and snapping configuration.
///
/// `enabled` only controls the dot backdrop; `snap_enabled` is what decides
/// whether pointer coordinates get quantized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub enabled: bool,
    pub snap_enabled: bool,
    pub pitch: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            snap_enabled: true,
            pitch: GRID_PITCH,
        }
    }
}

/// Quantize one axis to the nearest multiple of `pitch`.
///
/// Ties round half away from zero (`f32::round`), matching rounding toward
/// the next grid line on the positive canvas domain.
fn snap_axis(value: f32, pitch: f32) -> f32 {
    (value / pitch).round() * pitch
}

/// Resolve a raw pointer coordinate (relative to the canvas top-left) into a
/// canvas-space coordinate.
///
/// With snapping enabled each axis is quantized independently; disabled, the
/// raw coordinate passes through unchanged so sub-pitch placement stays
/// possible. Pure and side-effect-free; snapping an already snapped point is
/// a no-op.
pub fn snap_point(pos: Pos2, grid: &GridConfig) -> Pos2 {
    if !grid.snap_enabled {
        return pos;
    }
    pos2(snap_axis(pos.x, grid.pitch), snap_axis(pos.y, grid.pitch))
}
