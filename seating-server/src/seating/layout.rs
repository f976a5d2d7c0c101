//! Circle layout for auto-arrangement

use std::f64::consts::PI;

use shared::models::CanvasSize;

/// Fraction of the shorter canvas side used as the circle radius
const RADIUS_FACTOR: f64 = 0.35;

/// Positions for `count` tables: one table sits at the center, more are
/// spread evenly around a circle starting at angle 0.
pub fn circle_positions(count: usize, canvas: CanvasSize) -> Vec<(f64, f64)> {
    let center_x = canvas.width / 2.0;
    let center_y = canvas.height / 2.0;

    match count {
        0 => Vec::new(),
        1 => vec![(center_x, center_y)],
        n => {
            let radius = canvas.width.min(canvas.height) * RADIUS_FACTOR;
            (0..n)
                .map(|index| {
                    let angle = index as f64 * 2.0 * PI / n as f64;
                    (
                        center_x + radius * angle.cos(),
                        center_y + radius * angle.sin(),
                    )
                })
                .collect()
        }
    }
}
