//! TerrainProfile: the ground polyline with height and geometry queries.

use barrage_core::types::Point;

/// The ground across the play-field: an ordered sequence of vertices
/// strictly increasing in x, the first at the field's left edge and the
/// last at its right edge. Immutable after match setup.
#[derive(Debug, Clone)]
pub struct TerrainProfile {
    vertices: Vec<Point>,
}

impl TerrainProfile {
    /// Build a profile from vertices already ordered by x.
    pub fn new(vertices: Vec<Point>) -> Self {
        debug_assert!(vertices.len() >= 2);
        debug_assert!(vertices.windows(2).all(|w| w[0].x < w[1].x));
        Self { vertices }
    }

    /// Terrain vertex list, left to right.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Leftmost covered x.
    pub fn left_edge(&self) -> f64 {
        self.vertices[0].x
    }

    /// Rightmost covered x.
    pub fn right_edge(&self) -> f64 {
        self.vertices[self.vertices.len() - 1].x
    }

    /// The segment bracketing `x`: the left vertex with `l.x <= x` and
    /// the right vertex with `r.x > x`. `None` outside the covered range.
    pub fn bracket(&self, x: f64) -> Option<(Point, Point)> {
        if x < self.left_edge() {
            return None;
        }
        for (i, vertex) in self.vertices.iter().enumerate() {
            if vertex.x > x {
                return Some((self.vertices[i - 1], *vertex));
            }
        }
        None
    }

    /// Ground height at `x` by linear interpolation across the
    /// bracketing segment. `None` outside the covered range.
    pub fn height_at(&self, x: f64) -> Option<f64> {
        let (l, r) = self.bracket(x)?;
        Some(l.y + (r.y - l.y) * (x - l.x) / (r.x - l.x))
    }
}

/// Two-parameter implicit relation for the line through `l` and `r`:
/// `(p.x - l.x)/(r.x - l.x) - (p.y - l.y)/(r.y - l.y)`.
///
/// The sign indicates which side of the line `p` falls on (zero exactly
/// on the line). Undefined for degenerate segments; callers must check
/// [`segment_is_degenerate`] first.
pub fn side_of_segment(p: Point, l: Point, r: Point) -> f64 {
    (p.x - l.x) / (r.x - l.x) - (p.y - l.y) / (r.y - l.y)
}

/// True when the segment's endpoints share an x or y coordinate, which
/// makes the side relation undefined. Strike tests treat such ticks as
/// "no strike".
pub fn segment_is_degenerate(l: Point, r: Point) -> bool {
    r.x == l.x || r.y == l.y
}
