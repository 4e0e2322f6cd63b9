use super::types::{Point, Segment};

/// Euclidean distance. Symmetric bit-for-bit: both orders square the same
/// magnitudes.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (q - p).norm()
}

#[inline]
pub fn midpoint(p: Point, q: Point) -> Point {
    Point::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0)
}

/// Arithmetic mean of the given points; `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// Round to two decimals, half away from zero (applied to `v * 100`).
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// `round2` then print with exactly two decimals, e.g. `7.5 -> "7.50"`.
pub fn format_fixed2(v: f64) -> String {
    let r = round2(v);
    // avoid "-0.00"
    let r = if r == 0.0 { 0.0 } else { r };
    format!("{r:.2}")
}

/// Half the Shoelace sum over `points` in the given order (wrapping to the
/// first vertex). Positive for counterclockwise order in y-up coordinates.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        sum += p.x * q.y - p.y * q.x;
    }
    sum / 2.0
}

/// `|signed_area|` rounded to two decimals. Only meaningful for simple
/// polygons; self-intersecting input still yields a number.
#[inline]
pub fn polygon_area(points: &[Point]) -> f64 {
    round2(signed_area(points).abs())
}

/// Intersection of the infinite lines through `s` and `t` (2x2 determinant
/// form). `None` iff the direction determinant is exactly zero.
pub fn line_intersection(s: &Segment, t: &Segment) -> Option<Point> {
    let (x1, y1, x2, y2) = (s.a.x, s.a.y, s.b.x, s.b.y);
    let (x3, y3, x4, y4) = (t.a.x, t.a.y, t.b.x, t.b.y);
    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom == 0.0 {
        return None;
    }
    let d12 = x1 * y2 - y1 * x2;
    let d34 = x3 * y4 - y3 * x4;
    let x = (d12 * (x3 - x4) - (x1 - x2) * d34) / denom;
    let y = (d12 * (y3 - y4) - (y1 - y2) * d34) / denom;
    Some(Point::new(x, y))
}
