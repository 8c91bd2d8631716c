//! SVG back-end: one `<rect>` per block, one rect per line.
//!
//! The sampler reads the SVG back line by line and takes the six digits
//! after each `fill:#` marker, so the writer must keep exactly one fill
//! declaration per line, in block order.

use std::io::{BufRead, Write};

use crate::error::{DecodeError, EncodeError};
use crate::geometry::Geometry;
use crate::hex::decode_hex;
use crate::pack::Rgb;
use crate::render::Canvas;

const FILL_MARKER: &str = "fill:#";

/// A filled square queued for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub size: usize,
    pub fill: Rgb,
}

/// Scene of filled squares on a fixed-size canvas.
#[derive(Debug, Clone)]
pub struct VectorCanvas {
    pub width: usize,
    pub height: usize,
    rects: Vec<Rect>,
}

impl VectorCanvas {
    pub fn new(geometry: &Geometry) -> Self {
        Self {
            width: geometry.width,
            height: geometry.height,
            rects: Vec::with_capacity(geometry.block_count),
        }
    }

    /// Serialize the scene as SVG text.
    pub fn write_svg<W: Write>(&self, mut w: W) -> Result<(), EncodeError> {
        writeln!(w, "<?xml version=\"1.0\"?>")?;
        writeln!(
            w,
            "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.width, self.height
        )?;
        for rect in &self.rects {
            writeln!(
                w,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" style=\"{}{}\" />",
                rect.x,
                rect.y,
                rect.size,
                rect.size,
                FILL_MARKER,
                rect.fill.to_hex()
            )?;
        }
        writeln!(w, "</svg>")?;
        w.flush()?;
        Ok(())
    }
}

impl Canvas for VectorCanvas {
    fn fill_square(&mut self, x: usize, y: usize, size: usize, color: Rgb) {
        self.rects.push(Rect {
            x,
            y,
            size,
            fill: color,
        });
    }
}

/// Read one color per line carrying a `fill:#rrggbb` declaration, in
/// the order the lines appear. Lines without the marker are skipped.
pub fn sample_vector(data: &[u8]) -> Result<Vec<Rgb>, DecodeError> {
    let mut blocks = Vec::new();
    for (index, line) in BufRead::lines(data).enumerate() {
        let line = line?;
        let Some((_, rest)) = line.split_once(FILL_MARKER) else {
            continue;
        };
        let line_no = index + 1;
        let field = rest
            .as_bytes()
            .get(..6)
            .ok_or(DecodeError::ShortColor { line: line_no })?;
        let rgb = decode_hex(field).map_err(|source| DecodeError::InvalidColor {
            line: line_no,
            source,
        })?;
        blocks.push(Rgb::new(rgb[0], rgb[1], rgb[2]));
    }
    Ok(blocks)
}
