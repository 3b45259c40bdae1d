use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;

/// Axis-aligned rectangle in world units.
///
/// `x`/`y` is the top-left corner; the rectangle covers the half-open ranges
/// `x..x + width` and `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Aabb {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct BoxCollider {
    pub width: i32,
    pub height: i32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            offset_x: 0,
            offset_y: 0,
        }
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset_x: i32, offset_y: i32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// World-space bounds of the collider for an entity at `position`.
    /// Handles negative size by normalizing to a proper rectangle.
    pub fn aabb(&self, position: MapPosition) -> Aabb {
        let x0 = position.x + self.offset_x;
        let y0 = position.y + self.offset_y;
        let x1 = x0 + self.width;
        let y1 = y0 + self.height;
        Aabb::new(x0.min(x1), y0.min(y1), (x1 - x0).abs(), (y1 - y0).abs())
    }
}

/// Bounds used for entities without a [`BoxCollider`]: a single unit cell.
pub fn bounds_of(position: MapPosition, collider: Option<&BoxCollider>) -> Aabb {
    match collider {
        Some(collider) => collider.aabb(position),
        None => Aabb::new(position.x, position.y, 1, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_with_offset() {
        let c = BoxCollider::new(2, 3).with_offset(1, -1);
        assert_eq!(c.aabb(MapPosition::new(10, 10)), Aabb::new(11, 9, 2, 3));
    }

    #[test]
    fn test_aabb_normalizes_negative_size() {
        let c = BoxCollider::new(-2, -2);
        assert_eq!(c.aabb(MapPosition::new(5, 5)), Aabb::new(3, 3, 2, 2));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Aabb::new(0, 0, 2, 2);
        assert!(!a.intersects(&Aabb::new(2, 0, 2, 2)));
        assert!(!a.intersects(&Aabb::new(0, 2, 2, 2)));
        assert!(a.intersects(&Aabb::new(1, 1, 2, 2)));
    }

    #[test]
    fn test_bounds_without_collider_is_unit_cell() {
        assert_eq!(bounds_of(MapPosition::new(4, 2), None), Aabb::new(4, 2, 1, 1));
    }
}
