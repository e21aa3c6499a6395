//! Axis-aligned bounding boxes
//!
//! Every collision test in the game (player vs platform, player vs spike)
//! runs on this one rectangle type. Screen convention: +Y points down.

/// An axis-aligned rectangle defined by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    /// Create a box. Width and height must be positive and every field finite.
    ///
    /// # Panics
    /// On a degenerate or non-finite box. Scene geometry is fixed at startup,
    /// so a bad box is a programming error, not something to recover from.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        assert!(
            x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite(),
            "Aabb fields must be finite (x={x}, y={y}, w={w}, h={h})"
        );
        assert!(w > 0.0 && h > 0.0, "Aabb size must be positive (w={w}, h={h})");
        Self { x, y, w, h }
    }

    /// Square box, used for spikes
    pub fn square(x: f32, y: f32, size: f32) -> Self {
        Self::new(x, y, size, size)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        overlaps(self, other)
    }
}

/// Strict AABB overlap: true iff the interiors intersect.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_symmetric() {
        let boxes = [
            Aabb::new(0.0, 0.0, 50.0, 50.0),
            Aabb::new(25.0, 25.0, 50.0, 50.0),
            Aabb::new(50.0, 0.0, 10.0, 10.0),
            Aabb::new(-100.0, -100.0, 500.0, 500.0),
            Aabb::new(200.0, 200.0, 1.0, 1.0),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 50.0, 50.0);
        let right = Aabb::new(50.0, 0.0, 50.0, 50.0);
        let below = Aabb::new(0.0, 50.0, 50.0, 50.0);
        let corner = Aabb::new(50.0, 50.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_partial_and_contained_overlap() {
        let a = Aabb::new(0.0, 0.0, 50.0, 50.0);
        assert!(a.overlaps(&Aabb::new(49.5, 49.5, 10.0, 10.0)));
        assert!(a.overlaps(&Aabb::new(10.0, 10.0, 5.0, 5.0)));
        assert!(Aabb::new(10.0, 10.0, 5.0, 5.0).overlaps(&a));
    }

    #[test]
    fn test_edges_and_center() {
        let r = Aabb::new(10.0, 20.0, 100.0, 50.0);
        assert!((r.right() - 110.0).abs() < 0.001);
        assert!((r.bottom() - 70.0).abs() < 0.001);
        assert!((r.center_x() - 60.0).abs() < 0.001);
        assert!((r.center_y() - 45.0).abs() < 0.001);
    }

    #[test]
    #[should_panic(expected = "size must be positive")]
    fn test_zero_width_rejected() {
        Aabb::new(0.0, 0.0, 0.0, 10.0);
    }

    #[test]
    #[should_panic(expected = "size must be positive")]
    fn test_negative_height_rejected() {
        Aabb::new(0.0, 0.0, 10.0, -1.0);
    }

    #[test]
    #[should_panic(expected = "must be finite")]
    fn test_nan_rejected() {
        Aabb::new(f32::NAN, 0.0, 10.0, 10.0);
    }
}
