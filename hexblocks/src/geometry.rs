/// Side length of one block, in pixels.
pub const BLOCK_PIXELS: usize = 8;

/// Payload bytes carried by one block (one per color channel).
pub const BYTES_PER_BLOCK: usize = 3;

/// Grid and canvas dimensions for a payload of a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Number of blocks, `ceil(byte_len / 3)`.
    pub block_count: usize,
    /// Blocks per grid row after normalization.
    pub blocks_per_row: usize,
    /// Number of grid rows.
    pub rows: usize,
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
}

impl Geometry {
    /// Plan the grid for `byte_len` payload bytes.
    ///
    /// A non-positive `blocks_per_row` lays every block out in a single row.
    /// An empty payload yields an empty geometry (no blocks, zero height).
    ///
    /// Dimensions saturate instead of wrapping, so every block origin stays
    /// inside the canvas; back-ends reject canvases they cannot serialize.
    pub fn plan(byte_len: usize, blocks_per_row: i64) -> Geometry {
        let block_count = byte_len.div_ceil(BYTES_PER_BLOCK);
        let blocks_per_row = if blocks_per_row <= 0 {
            block_count
        } else {
            usize::try_from(blocks_per_row).unwrap_or(usize::MAX)
        };
        let rows = if blocks_per_row == 0 {
            0
        } else {
            block_count.div_ceil(blocks_per_row)
        };

        Geometry {
            block_count,
            blocks_per_row,
            rows,
            width: blocks_per_row.saturating_mul(BLOCK_PIXELS),
            height: rows.saturating_mul(BLOCK_PIXELS),
        }
    }

    /// Pixel origin (top-left corner) of the block at `index`.
    pub fn block_origin(&self, index: usize) -> (usize, usize) {
        let col = index % self.blocks_per_row;
        let row = index / self.blocks_per_row;
        (col * BLOCK_PIXELS, row * BLOCK_PIXELS)
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.block_count == 0
    }
}
