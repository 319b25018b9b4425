//! CPU triangle filler for the RGBA frame buffer
//!
//! Every fill request accumulates signed winding counts per sample, then
//! resolves them through the request's fill rule. Overlapping or reversed
//! triangles in one request therefore behave like a single path.

use game_core::{FillOptions, RenderSink, Vertex};

const AA_SAMPLES: [(f32, f32); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];
const CENTER_SAMPLE: [(f32, f32); 1] = [(0.5, 0.5)];

/// Pixel range touched by a fill, end-exclusive
#[derive(Debug, Clone, Copy)]
struct Bounds {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// Winding scratch buffer reused across fills
pub struct Rasterizer {
    width: usize,
    height: usize,
    winding: Vec<[i32; 4]>,
}

impl Rasterizer {
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            winding: vec![[0; 4]; width * height],
        }
    }

    /// Fill the triangles described by `indices` into an RGBA8 `frame`
    pub fn fill(
        &mut self,
        frame: &mut [u8],
        vertices: &[Vertex],
        indices: &[u16],
        options: &FillOptions,
    ) {
        let samples: &[(f32, f32)] = if options.anti_alias {
            &AA_SAMPLES
        } else {
            &CENTER_SAMPLE
        };

        let Some(bounds) = self.bounds(vertices, indices) else {
            return;
        };

        for y in bounds.y0..bounds.y1 {
            let row = y * self.width;
            self.winding[row + bounds.x0..row + bounds.x1].fill([0; 4]);
        }

        for tri in indices.chunks_exact(3) {
            let a = vertices[tri[0] as usize].position;
            let b = vertices[tri[1] as usize].position;
            let c = vertices[tri[2] as usize].position;
            self.accumulate(a, b, c, samples, &bounds);
        }

        let color = vertices[indices[0] as usize].color;
        for y in bounds.y0..bounds.y1 {
            for x in bounds.x0..bounds.x1 {
                let idx = y * self.width + x;
                let winding = self.winding[idx];
                let covered = (0..samples.len())
                    .filter(|&i| options.fill_rule.is_inside(winding[i]))
                    .count();
                if covered == 0 {
                    continue;
                }
                let coverage = covered as f32 / samples.len() as f32;
                blend(&mut frame[idx * 4..idx * 4 + 4], color, coverage);
            }
        }
    }

    /// Clip the referenced vertices' bounding box to the frame
    fn bounds(&self, vertices: &[Vertex], indices: &[u16]) -> Option<Bounds> {
        if indices.len() < 3 {
            return None;
        }

        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for &i in indices {
            let [x, y] = vertices[i as usize].position;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        let x0 = min_x.floor().max(0.0) as usize;
        let y0 = min_y.floor().max(0.0) as usize;
        let x1 = (max_x.ceil().max(0.0) as usize).min(self.width);
        let y1 = (max_y.ceil().max(0.0) as usize).min(self.height);

        if x0 >= x1 || y0 >= y1 {
            None
        } else {
            Some(Bounds { x0, y0, x1, y1 })
        }
    }

    fn accumulate(
        &mut self,
        a: [f32; 2],
        b: [f32; 2],
        c: [f32; 2],
        samples: &[(f32, f32)],
        bounds: &Bounds,
    ) {
        let area = edge(a, b, c);
        if area == 0.0 {
            return;
        }
        // Normalize to positive orientation; reversed triangles count -1
        let (b, c, sign) = if area > 0.0 { (b, c, 1) } else { (c, b, -1) };

        let min_x = a[0].min(b[0]).min(c[0]).floor().max(bounds.x0 as f32) as usize;
        let min_y = a[1].min(b[1]).min(c[1]).floor().max(bounds.y0 as f32) as usize;
        let max_x = (a[0].max(b[0]).max(c[0]).ceil().max(0.0) as usize).min(bounds.x1);
        let max_y = (a[1].max(b[1]).max(c[1]).ceil().max(0.0) as usize).min(bounds.y1);

        for y in min_y..max_y {
            for x in min_x..max_x {
                let cell = &mut self.winding[y * self.width + x];
                for (i, &(ox, oy)) in samples.iter().enumerate() {
                    let p = [x as f32 + ox, y as f32 + oy];
                    if covers(a, b, p) && covers(b, c, p) && covers(c, a, p) {
                        cell[i] += sign;
                    }
                }
            }
        }
    }
}

/// Twice the signed area of (a, b, p)
fn edge(a: [f32; 2], b: [f32; 2], p: [f32; 2]) -> f32 {
    (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0])
}

/// Inside test for one edge. Samples exactly on the edge belong to only one
/// of the two directions it can be walked in, so shared edges count once.
fn covers(a: [f32; 2], b: [f32; 2], p: [f32; 2]) -> bool {
    // Always evaluate from the lower endpoint: both walks of a shared edge
    // then see exactly negated values and no sample falls through the crack.
    let e = if (a[0], a[1]) <= (b[0], b[1]) {
        edge(a, b, p)
    } else {
        -edge(b, a, p)
    };
    if e != 0.0 {
        return e > 0.0;
    }
    let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
    dy > 0.0 || (dy == 0.0 && dx < 0.0)
}

fn blend(pixel: &mut [u8], color: [f32; 4], coverage: f32) {
    let alpha = color[3] * coverage;
    for (channel, &src) in pixel.iter_mut().zip(color.iter()).take(3) {
        let src = src * 255.0;
        let dst = *channel as f32;
        *channel = (src * alpha + dst * (1.0 - alpha)).round().clamp(0.0, 255.0) as u8;
    }
    pixel[3] = 0xff;
}

/// Clear an RGBA8 frame to opaque black
pub fn clear(frame: &mut [u8]) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&[0x00, 0x00, 0x00, 0xff]);
    }
}

/// `RenderSink` writing into one frame for the duration of a draw
pub struct FrameSink<'a> {
    pub frame: &'a mut [u8],
    pub raster: &'a mut Rasterizer,
}

impl RenderSink for FrameSink<'_> {
    fn fill_triangles(&mut self, vertices: &[Vertex], indices: &[u16], options: &FillOptions) {
        self.raster.fill(self.frame, vertices, indices, options);
    }
}
