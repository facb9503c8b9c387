//! Geometric primitives: segment intersection and polygon overlap tests.

use geo::{Coord, Line};

/// A 2-D point.
pub type Point = Coord<f64>;

/// An ordered pair of points.
pub type Segment = Line<f64>;

/// Vehicle footprint: four corners wound consistently.
pub type Polygon = [Point; 4];

/// Denominators smaller than this are treated as parallel segments.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Where two segments cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// The crossing point.
    pub point: Point,
    /// Fraction along the first segment, in `[0, 1]`.
    pub t: f64,
    /// Fraction along the second segment, in `[0, 1]`.
    pub u: f64,
}

/// Linear interpolation between `a` and `b`.
///
/// # Arguments
///
/// * `a` - Value at `t = 0`
/// * `b` - Value at `t = 1`
/// * `t` - Blend factor (not clamped)
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Intersects two segments using their parametric line equations.
///
/// # Arguments
///
/// * `a` - First segment; `t` is measured along it
/// * `b` - Second segment; `u` is measured along it
///
/// # Returns
///
/// The crossing point with both parameters, or `None` when the segments are
/// parallel, degenerate, or cross outside either segment.
pub fn intersect(a: &Segment, b: &Segment) -> Option<Intersection> {
    let (p, q) = (a.start, a.end);
    let (r, s) = (b.start, b.end);

    let t_top = (s.x - r.x) * (p.y - r.y) - (s.y - r.y) * (p.x - r.x);
    let u_top = (r.y - p.y) * (p.x - q.x) - (r.x - p.x) * (p.y - q.y);
    let bottom = (s.y - r.y) * (q.x - p.x) - (s.x - r.x) * (q.y - p.y);

    if bottom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = t_top / bottom;
    let u = u_top / bottom;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(Intersection {
        point: Coord {
            x: lerp(p.x, q.x, t),
            y: lerp(p.y, q.y, t),
        },
        t,
        u,
    })
}

/// Edges of a closed point loop, wrapping the last point back to the first.
pub fn edges(points: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    let n = points.len();
    (0..n).map(move |i| Line::new(points[i], points[(i + 1) % n]))
}

/// Returns `true` if any edge of `a` crosses any edge of `b`.
///
/// Containment without edge contact is not reported.
pub fn polygons_intersect(a: &[Point], b: &[Point]) -> bool {
    edges(a).any(|ea| edges(b).any(|eb| intersect(&ea, &eb).is_some()))
}

/// Returns `true` if `segment` crosses any edge of `polygon`.
pub fn polygon_touches_segment(polygon: &[Point], segment: &Segment) -> bool {
    edges(polygon).any(|edge| intersect(&edge, segment).is_some())
}
