//! Immediate-mode vector shapes
//!
//! Paths are built from move/line/arc commands and triangulated into a
//! reusable vertex + index buffer that a `RenderSink` fills.

use glam::Vec2;

use crate::Params;

/// Vertex data handed to the rasterizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Winding rule used to decide which samples a fill covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl FillRule {
    pub fn is_inside(self, winding: i32) -> bool {
        match self {
            FillRule::NonZero => winding != 0,
            FillRule::EvenOdd => winding % 2 != 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillOptions {
    pub fill_rule: FillRule,
    pub anti_alias: bool,
}

/// Consumer of triangulated fill requests
pub trait RenderSink {
    fn fill_triangles(&mut self, vertices: &[Vertex], indices: &[u16], options: &FillOptions);
}

/// Sweep direction for `Path::arc`, in screen space (y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, Default)]
struct SubPath {
    points: Vec<Vec2>,
    closed: bool,
}

/// A sequence of sub-paths, each implicitly closed when filled
#[derive(Debug, Clone, Default)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new sub-path at (x, y)
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.subpaths.push(SubPath {
            points: vec![Vec2::new(x, y)],
            closed: false,
        });
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        match self.subpaths.last_mut() {
            Some(sub) if !sub.closed => sub.points.push(Vec2::new(x, y)),
            _ => self.move_to(x, y),
        }
    }

    /// Append an arc, joined to the current point by a straight line
    pub fn arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        direction: Direction,
    ) {
        let tau = std::f32::consts::TAU;
        let mut sweep = end_angle - start_angle;
        match direction {
            Direction::Clockwise => {
                while sweep < 0.0 {
                    sweep += tau;
                }
                sweep = sweep.min(tau);
            }
            Direction::CounterClockwise => {
                while sweep > 0.0 {
                    sweep -= tau;
                }
                sweep = sweep.max(-tau);
            }
        }

        let arc_length = sweep.abs() * radius;
        let segments = ((arc_length / Params::ARC_SEGMENT_LENGTH).ceil() as u32)
            .max(Params::ARC_MIN_SEGMENTS);

        for i in 0..=segments {
            let angle = start_angle + sweep * i as f32 / segments as f32;
            self.line_to(cx + radius * angle.cos(), cy + radius * angle.sin());
        }
    }

    pub fn close(&mut self) {
        if let Some(sub) = self.subpaths.last_mut() {
            sub.closed = true;
        }
    }

    /// Axis-aligned rectangle as a closed path
    pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut path = Self::new();
        path.move_to(x, y); // Top-left
        path.line_to(x + width, y); // Top-right
        path.line_to(x + width, y + height); // Bottom-right
        path.line_to(x, y + height); // Bottom-left
        path.close();
        path
    }

    /// Filled disc: a closed path from the center around the full circle
    pub fn circle(cx: f32, cy: f32, radius: f32) -> Self {
        let mut path = Self::new();
        path.move_to(cx, cy);
        path.arc(cx, cy, radius, 0.0, std::f32::consts::TAU, Direction::Clockwise);
        path.close();
        path
    }
}

/// Reusable scratch buffers for triangulated shapes
#[derive(Debug, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the buffers, keeping their allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Triangulate `path` as fans from each sub-path's first point.
    /// Overlapping or reversed fans are sorted out by the fill rule.
    pub fn append_fill(&mut self, path: &Path, color: [f32; 4]) {
        for sub in &path.subpaths {
            if sub.points.len() < 3 {
                continue;
            }

            let base = self.vertices.len() as u16;
            self.vertices.extend(sub.points.iter().map(|p| Vertex {
                position: [p.x, p.y],
                color,
            }));

            for i in 1..(sub.points.len() as u16 - 1) {
                self.indices.push(base);
                self.indices.push(base + i);
                self.indices.push(base + i + 1);
            }
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
