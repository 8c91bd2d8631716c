//! PNG back-end: an RGBA pixel buffer painted block by block.

use std::io::{Cursor, Write};

use log::trace;

use crate::error::{DecodeError, EncodeError};
use crate::geometry::{Geometry, BLOCK_PIXELS};
use crate::pack::Rgb;
use crate::render::Canvas;

const OPAQUE: u8 = 255;
const RGBA: usize = 4;

/// RGBA8 pixel buffer in row-major order, fully opaque.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    pub width: usize,
    pub height: usize,
    pixels: Vec<u8>,
}

impl RasterCanvas {
    /// Create an opaque black canvas sized for `geometry`.
    ///
    /// PNG cannot hold a zero-sized image, so an empty geometry gets a
    /// single black pixel. It samples to one all-zero block, which the
    /// unpacker trims away.
    ///
    /// Fails without allocating when the canvas exceeds PNG's `u32`
    /// dimensions, and when the pixel buffer cannot be allocated.
    pub fn new(geometry: &Geometry) -> Result<Self, EncodeError> {
        let (width, height) = if geometry.is_empty() {
            (1, 1)
        } else {
            (geometry.width, geometry.height)
        };
        let too_large = || EncodeError::CanvasTooLarge { width, height };

        u32::try_from(width).map_err(|_| too_large())?;
        u32::try_from(height).map_err(|_| too_large())?;
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(RGBA))
            .ok_or_else(too_large)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| too_large())?;
        for _ in 0..width * height {
            pixels.extend_from_slice(&[0, 0, 0, OPAQUE]);
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Serialize the canvas as an 8-bit RGBA PNG.
    pub fn write_png<W: Write>(&self, w: W) -> Result<(), EncodeError> {
        let too_large = || EncodeError::CanvasTooLarge {
            width: self.width,
            height: self.height,
        };
        let width = u32::try_from(self.width).map_err(|_| too_large())?;
        let height = u32::try_from(self.height).map_err(|_| too_large())?;

        let mut encoder = png::Encoder::new(w, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        writer.finish()?;
        Ok(())
    }
}

impl Canvas for RasterCanvas {
    fn fill_square(&mut self, x: usize, y: usize, size: usize, color: Rgb) {
        let x_end = (x + size).min(self.width);
        let y_end = (y + size).min(self.height);
        let rgba = [color.r, color.g, color.b, OPAQUE];
        for py in y..y_end {
            let row = py * self.width;
            for px in x..x_end {
                let i = (row + px) * RGBA;
                self.pixels[i..i + RGBA].copy_from_slice(&rgba);
            }
        }
    }
}

/// Read one color per block from a PNG, sampling the top-left pixel of
/// each block cell in row-major order. Alpha is ignored.
///
/// Rows are decoded one at a time and only every `BLOCK_PIXELS`-th row is
/// kept, so memory stays proportional to one row regardless of canvas size.
pub fn sample_raster(data: &[u8]) -> Result<Vec<Rgb>, DecodeError> {
    let mut decoder =
        png::Decoder::new_with_limits(Cursor::new(data), png::Limits { bytes: usize::MAX });
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let info = reader.info();
    let (width, height) = (info.width as usize, info.height as usize);
    let interlaced = info.interlaced;
    let samples = reader.output_color_type().0.samples();
    trace!("sampling {}x{} PNG, {} samples per pixel", width, height, samples);

    let mut blocks =
        Vec::with_capacity(width.div_ceil(BLOCK_PIXELS) * height.div_ceil(BLOCK_PIXELS));
    let mut sample_row = |row: &[u8]| {
        for x in (0..width).step_by(BLOCK_PIXELS) {
            let px = &row[x * samples..(x + 1) * samples];
            blocks.push(match samples {
                // grayscale, with or without alpha
                1 | 2 => Rgb::new(px[0], px[0], px[0]),
                _ => Rgb::new(px[0], px[1], px[2]),
            });
        }
    };

    if interlaced {
        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf)?;
        for y in (0..height).step_by(BLOCK_PIXELS) {
            let start = y * frame.line_size;
            sample_row(&buf[start..start + frame.line_size]);
        }
    } else {
        let mut y = 0;
        while let Some(row) = reader.next_row()? {
            if y % BLOCK_PIXELS == 0 {
                sample_row(row.data());
            }
            y += 1;
        }
    }
    Ok(blocks)
}
