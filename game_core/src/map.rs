use glam::{IVec2, Vec2};

use crate::Params;

/// Axis-aligned bounding box on the integer pixel grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub min: IVec2,
    pub max: IVec2,
}

impl Rect {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Build from a float position and size, truncating each corner toward zero
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        let max = pos + size;
        Self {
            min: IVec2::new(pos.x as i32, pos.y as i32),
            max: IVec2::new(max.x as i32, max.y as i32),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Half-open overlap test; empty rectangles overlap nothing
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Logical playfield bounds
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
}

impl GameMap {
    pub fn new() -> Self {
        Self {
            width: Params::SCREEN_WIDTH,
            height: Params::SCREEN_HEIGHT,
        }
    }

    /// Largest X a body of `width` may occupy
    pub fn max_x(&self, width: f32) -> f32 {
        self.width as f32 - width
    }

    /// True when the rectangle touches or crosses the left/right edge
    pub fn hits_side(&self, rect: &Rect) -> bool {
        rect.min.x <= 0 || rect.max.x >= self.width
    }

    /// True when the rectangle touches or crosses the top/bottom edge
    pub fn hits_end(&self, rect: &Rect) -> bool {
        rect.min.y <= 0 || rect.max.y >= self.height
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_truncates_toward_zero() {
        let rect = Rect::from_pos_size(Vec2::new(-2.5, 10.9), Vec2::splat(20.0));
        assert_eq!(rect.min, IVec2::new(-2, 10));
        assert_eq!(rect.max, IVec2::new(17, 30));
    }

    #[test]
    fn test_rect_overlaps() {
        let a = Rect::new(IVec2::new(0, 0), IVec2::new(10, 10));
        let b = Rect::new(IVec2::new(5, 5), IVec2::new(15, 15));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(IVec2::new(0, 0), IVec2::new(10, 10));
        let b = Rect::new(IVec2::new(10, 0), IVec2::new(20, 10));
        assert!(!a.overlaps(&b), "Shared edge is not an overlap");
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let empty = Rect::default();
        let a = Rect::new(IVec2::new(-5, -5), IVec2::new(5, 5));
        assert!(empty.is_empty());
        assert!(!a.overlaps(&empty));
        assert!(!empty.overlaps(&a));
    }

    #[test]
    fn test_map_edges() {
        let map = GameMap::new();
        let left = Rect::new(IVec2::new(0, 100), IVec2::new(20, 120));
        let middle = Rect::new(IVec2::new(100, 100), IVec2::new(120, 120));
        let bottom = Rect::new(IVec2::new(100, 460), IVec2::new(120, 480));
        assert!(map.hits_side(&left));
        assert!(!map.hits_side(&middle));
        assert!(!map.hits_end(&middle));
        assert!(map.hits_end(&bottom));
        assert_eq!(map.max_x(100.0), 540.0);
    }
}
