use gridstar_core::Coord;

/// Euclidean (L2) distance between two coordinates.
///
/// Admissible and consistent for unit-cost 4-directional movement.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dc = f64::from(b.col - a.col);
    let dr = f64::from(b.row - a.row);
    (dc * dc + dr * dr).sqrt()
}

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.col - b.col).abs() + (a.row - b.row).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        for dc in -4..=4 {
            for dr in -4..=4 {
                let a = Coord::new(0, 0);
                let b = Coord::new(dc, dr);
                assert!(euclidean(a, b) <= f64::from(manhattan(a, b)));
            }
        }
    }

    #[test]
    fn distances_are_symmetric() {
        let a = Coord::new(1, 7);
        let b = Coord::new(4, 3);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(euclidean(b, a), 5.0);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
    }
}
