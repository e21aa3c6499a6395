//! Scrolling camera
//!
//! The view is centered on the player and clamped so it never shows space
//! outside the world. It is derived fresh every frame; nothing is stored.

use crate::geometry::Aabb;
use super::settings::WorldBounds;

/// Top-left corner of the visible window, in world coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraView {
    pub x: f32,
    pub y: f32,
}

impl CameraView {
    /// Center on `target`, clamped to `[0, world - viewport]` on each axis.
    /// A viewport larger than the world pins that axis to 0.
    pub fn follow(target: &Aabb, world: &WorldBounds, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            x: clamp_axis(target.center_x() - viewport_w / 2.0, world.width - viewport_w),
            y: clamp_axis(target.center_y() - viewport_h / 2.0, world.height - viewport_h),
        }
    }

    /// Convert a world-space box to screen space
    pub fn to_screen(&self, b: &Aabb) -> Aabb {
        Aabb { x: b.x - self.x, y: b.y - self.y, ..*b }
    }
}

fn clamp_axis(v: f32, max: f32) -> f32 {
    v.min(max).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> WorldBounds {
        WorldBounds { width: 2000.0, height: 1000.0 }
    }

    #[test]
    fn test_clamps_to_right_edge() {
        let player = Aabb::new(1990.0, 500.0, 50.0, 50.0);
        let view = CameraView::follow(&player, &world(), 800.0, 600.0);
        assert_eq!(view.x, 1200.0);
    }

    #[test]
    fn test_clamps_to_origin() {
        let player = Aabb::new(150.0, 100.0, 50.0, 50.0);
        let view = CameraView::follow(&player, &world(), 800.0, 600.0);
        assert_eq!(view, CameraView { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_centers_in_middle() {
        let player = Aabb::new(975.0, 475.0, 50.0, 50.0);
        let view = CameraView::follow(&player, &world(), 800.0, 600.0);
        assert_eq!(view, CameraView { x: 600.0, y: 200.0 });
    }

    #[test]
    fn test_bottom_clamp() {
        let player = Aabb::new(975.0, 950.0, 50.0, 50.0);
        let view = CameraView::follow(&player, &world(), 800.0, 600.0);
        assert_eq!(view.y, 400.0);
    }

    #[test]
    fn test_viewport_larger_than_world() {
        let player = Aabb::new(975.0, 475.0, 50.0, 50.0);
        let view = CameraView::follow(&player, &world(), 2560.0, 1440.0);
        assert_eq!(view, CameraView { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_to_screen() {
        let view = CameraView { x: 600.0, y: 200.0 };
        let b = view.to_screen(&Aabb::new(700.0, 250.0, 10.0, 20.0));
        assert_eq!(b, Aabb::new(100.0, 50.0, 10.0, 20.0));
    }
}
