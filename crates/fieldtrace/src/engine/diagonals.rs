use super::types::Diagonal;
use crate::geom2::{Point, Segment};

/// Index pairs `(i, j)` with `j >= i + 2`, skipping the wrap-around edge
/// `(0, n-1)`. Order: `i` ascending, then `j` ascending.
///
/// Purely combinatorial: for non-convex input some pairs lie outside the
/// polygon. Empty for `n < 4`. Yields `n(n-3)/2` pairs.
pub fn diagonal_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n)
        .flat_map(move |i| ((i + 2)..n).map(move |j| (i, j)))
        .filter(move |&(i, j)| !(i == 0 && j == n - 1))
}

/// Materialize `diagonal_pairs` against the vertex list.
pub fn diagonals(points: &[Point]) -> Vec<Diagonal> {
    if points.len() < 4 {
        return Vec::new();
    }
    diagonal_pairs(points.len())
        .map(|(i, j)| Diagonal {
            i,
            j,
            segment: Segment::new(points[i], points[j]),
        })
        .collect()
}
