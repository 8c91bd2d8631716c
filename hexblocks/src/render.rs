use crate::geometry::{Geometry, BLOCK_PIXELS};
use crate::pack::Rgb;

/// Drawing surface a back-end exposes to the renderer.
pub trait Canvas {
    /// Paint an opaque `size` x `size` square with its top-left corner at `(x, y)`.
    fn fill_square(&mut self, x: usize, y: usize, size: usize, color: Rgb);
}

/// Paint one square per block at its grid cell, in block order.
pub fn render<C: Canvas + ?Sized>(blocks: &[Rgb], geometry: &Geometry, canvas: &mut C) {
    debug_assert_eq!(blocks.len(), geometry.block_count);

    for (index, &color) in blocks.iter().enumerate() {
        let (x, y) = geometry.block_origin(index);
        canvas.fill_square(x, y, BLOCK_PIXELS, color);
    }
}
