//! Scene entities
//!
//! A closed set of things that live in the course: static and temporary
//! platforms, spikes, and the player. The renderer matches on [`Drawable`]
//! instead of going through a trait object, since the set never grows at
//! runtime.

use crate::geometry::Aabb;

/// Display color of a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformColor {
    /// Permanent course geometry
    Gray,
    /// Player-placed temporary platform
    Aqua,
}

/// A platform the player can land on from above.
/// Immutable once created; temporary ones are removed as a whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub bounds: Aabb,
    pub color: PlatformColor,
}

impl Platform {
    /// Permanent gray platform
    pub fn solid(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            bounds: Aabb::new(x, y, w, h),
            color: PlatformColor::Gray,
        }
    }

    pub fn with_color(bounds: Aabb, color: PlatformColor) -> Self {
        Self { bounds, color }
    }
}

/// A spike. Touching it sends the player back to spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub bounds: Aabb,
}

impl Obstacle {
    /// Spikes are square, anchored at their top-left corner
    pub fn spike(x: f32, y: f32, size: f32) -> Self {
        Self {
            bounds: Aabb::square(x, y, size),
        }
    }
}

/// One item in the draw list, in back-to-front order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drawable {
    Platform(Platform),
    Obstacle(Obstacle),
    Player(Aabb),
}

impl Drawable {
    /// Bounds in world space, regardless of kind
    pub fn bounds(&self) -> Aabb {
        match self {
            Drawable::Platform(p) => p.bounds,
            Drawable::Obstacle(o) => o.bounds,
            Drawable::Player(b) => *b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_platform_is_gray() {
        let p = Platform::solid(0.0, 950.0, 2000.0, 50.0);
        assert_eq!(p.color, PlatformColor::Gray);
        assert_eq!(p.bounds, Aabb::new(0.0, 950.0, 2000.0, 50.0));
    }

    #[test]
    fn test_spike_is_square() {
        let o = Obstacle::spike(500.0, 920.0, 40.0);
        assert_eq!(o.bounds.w, 40.0);
        assert_eq!(o.bounds.h, 40.0);
    }

    #[test]
    fn test_drawable_bounds() {
        let b = Aabb::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Drawable::Player(b).bounds(), b);
        let o = Obstacle::spike(5.0, 6.0, 7.0);
        assert_eq!(Drawable::Obstacle(o).bounds(), o.bounds);
    }
}
