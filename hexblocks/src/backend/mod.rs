//! Image containers the blocks are rendered into and sampled from.

pub mod raster;
pub mod vector;

use std::io::Write;

use crate::error::{DecodeError, EncodeError};
use crate::geometry::Geometry;
use crate::pack::Rgb;
use crate::render::render;

pub use raster::{sample_raster, RasterCanvas};
pub use vector::{sample_vector, VectorCanvas};

/// Output container, chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// PNG pixel grid.
    #[default]
    Raster,
    /// SVG scene of rectangles.
    Vector,
}

impl Backend {
    pub fn from_vector_flag(vector: bool) -> Self {
        if vector {
            Backend::Vector
        } else {
            Backend::Raster
        }
    }

    /// Short container name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Backend::Raster => "PNG",
            Backend::Vector => "SVG",
        }
    }

    /// Render `blocks` laid out by `geometry` and serialize the container to `out`.
    pub fn write<W: Write>(
        self,
        geometry: &Geometry,
        blocks: &[Rgb],
        out: W,
    ) -> Result<(), EncodeError> {
        match self {
            Backend::Raster => {
                let mut canvas = RasterCanvas::new(geometry)?;
                render(blocks, geometry, &mut canvas);
                canvas.write_png(out)
            }
            Backend::Vector => {
                let mut canvas = VectorCanvas::new(geometry);
                render(blocks, geometry, &mut canvas);
                canvas.write_svg(out)
            }
        }
    }

    /// Recover block colors, in block order, from a serialized container.
    pub fn sample(self, data: &[u8]) -> Result<Vec<Rgb>, DecodeError> {
        match self {
            Backend::Raster => sample_raster(data),
            Backend::Vector => sample_vector(data),
        }
    }
}
