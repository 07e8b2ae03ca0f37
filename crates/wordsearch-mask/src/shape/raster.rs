//! Scan conversion shared by the primitive shapes.
//!
//! Coordinates are `(x, y)` pairs in cell units, with `x` growing to the right
//! and `y` growing downwards. Cell `(x, y)` is centered on the integer point.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]

use std::f64::consts::TAU;

use crate::Mask;

/// A point in cell units.
pub(super) type Point = (f64, f64);

/// Converts a cell count to a coordinate.
pub(super) fn coord(n: usize) -> f64 {
    n as f64
}

/// Returns the center coordinate of a grid of side `size`.
pub(super) fn grid_center(size: usize) -> f64 {
    (coord(size) - 1.0) / 2.0
}

/// Returns the cell containing `point`.
pub(super) fn cell_of((x, y): Point) -> (i64, i64) {
    (x.round() as i64, y.round() as i64)
}

/// Returns `count` points evenly spaced on a circle, the first at `start`
/// degrees clockwise from straight up.
pub(super) fn points_on_circle(
    center: Point,
    radius: f64,
    count: usize,
    start: f64,
) -> impl Iterator<Item = Point> {
    let step = 360.0 / coord(count);
    (0..count).map(move |i| {
        let theta = (start + step * coord(i)).to_radians();
        (
            center.0 + radius * theta.sin(),
            center.1 - radius * theta.cos(),
        )
    })
}

/// Activates the cells on a straight segment (Bresenham).
pub(super) fn draw_line(mask: &mut Mask, (x0, y0): (i64, i64), (x1, y1): (i64, i64)) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        mask.activate_clipped(y, x);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Activates a closed polygon: its edges, and its interior unless `outline` is set.
///
/// Vertices are snapped to cells first so the edges and the interior agree.
pub(super) fn draw_polygon(mask: &mut Mask, vertices: &[Point], outline: bool) {
    let corners: Vec<(i64, i64)> = vertices.iter().copied().map(cell_of).collect();
    for (i, &from) in corners.iter().enumerate() {
        let to = corners[(i + 1) % corners.len()];
        draw_line(mask, from, to);
    }
    if outline {
        return;
    }
    let snapped: Vec<Point> = corners
        .iter()
        .map(|&(x, y)| (x as f64, y as f64))
        .collect();
    let size = mask.size() as i64;
    for y in 0..size {
        for x in 0..size {
            if contains_point(&snapped, (x as f64, y as f64)) {
                mask.activate_clipped(y, x);
            }
        }
    }
}

/// Even-odd point-in-polygon test.
pub(super) fn contains_point(vertices: &[Point], (x, y): Point) -> bool {
    let mut inside = false;
    let mut j = vertices.len().wrapping_sub(1);
    for (i, &(xi, yi)) in vertices.iter().enumerate() {
        let (xj, yj) = vertices[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Activates the outline of an axis-aligned ellipse by parametric sampling.
///
/// The sample count grows with the radius so that consecutive samples never
/// skip a cell.
pub(super) fn draw_ellipse_outline(mask: &mut Mask, center: Point, rx: f64, ry: f64) {
    let samples = (TAU * rx.max(ry) * 4.0).ceil().max(16.0) as usize;
    for i in 0..samples {
        let t = TAU * coord(i) / coord(samples);
        let (x, y) = cell_of((center.0 + rx * t.cos(), center.1 + ry * t.sin()));
        mask.activate_clipped(y, x);
    }
}

/// Returns `true` if `point` lies inside the ellipse with semi-axes `a` and `b`.
pub(super) fn in_ellipse(center: Point, a: f64, b: f64, (x, y): Point) -> bool {
    if a <= 0.0 || b <= 0.0 {
        return false;
    }
    let nx = (x - center.0) / a;
    let ny = (y - center.1) / b;
    nx * nx + ny * ny <= 1.0
}

#[cfg(test)]
mod tests {
    use wordsearch_core::Position;

    use super::*;

    #[test]
    fn test_draw_line_diagonal() {
        let mut mask = Mask::empty(4);
        draw_line(&mut mask, (0, 0), (3, 3));
        let cells: Vec<_> = mask.active_cells().collect();
        assert_eq!(
            cells,
            (0..4).map(|i| Position::new(i, i)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_draw_line_clips() {
        let mut mask = Mask::empty(3);
        draw_line(&mut mask, (-2, 1), (5, 1));
        assert_eq!(mask.to_string(), "###\n***\n###");
    }

    #[test]
    fn test_contains_point_square() {
        let square = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        assert!(contains_point(&square, (2.0, 2.0)));
        assert!(!contains_point(&square, (5.0, 2.0)));
        assert!(!contains_point(&square, (2.0, -1.0)));
    }

    #[test]
    fn test_points_on_circle_start_up() {
        let points: Vec<_> = points_on_circle((2.0, 2.0), 2.0, 4, 0.0)
            .map(cell_of)
            .collect();
        assert_eq!(points, vec![(2, 0), (4, 2), (2, 4), (0, 2)]);
    }

    #[test]
    fn test_in_ellipse() {
        assert!(in_ellipse((5.0, 5.0), 1.5, 1.5, (4.0, 4.0)));
        assert!(!in_ellipse((5.0, 5.0), 1.5, 1.5, (3.0, 5.0)));
        assert!(!in_ellipse((5.0, 5.0), 0.0, 1.5, (5.0, 5.0)));
    }
}
