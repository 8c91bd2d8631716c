use crate::geometry::BYTES_PER_BLOCK;

/// Solid color of one block. Each channel carries one payload byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The three channels in payload order.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Six lower-case hex digits, `rrggbb`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Split a payload into block colors, three bytes per block.
///
/// A final block built from fewer than three bytes has its missing
/// channels set to zero.
pub fn pack(bytes: &[u8]) -> Vec<Rgb> {
    bytes
        .chunks(BYTES_PER_BLOCK)
        .map(|chunk| {
            let at = |i: usize| chunk.get(i).copied().unwrap_or(0);
            Rgb::new(at(0), at(1), at(2))
        })
        .collect()
}

/// Flatten block colors back into a payload and drop trailing zero bytes.
///
/// Padding and genuine trailing zeros are indistinguishable here: a payload
/// that ends in `0x00` comes back shorter than it went in.
pub fn unpack(blocks: &[Rgb]) -> Vec<u8> {
    let mut bytes: Vec<u8> = blocks.iter().flat_map(|c| c.channels()).collect();
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    bytes
}
