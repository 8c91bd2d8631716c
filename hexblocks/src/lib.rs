pub mod backend;
pub mod codec;
pub mod error;
pub mod geometry;
pub mod hex;
pub mod pack;
pub mod render;

pub use backend::Backend;
pub use codec::{decode, decode_bytes, encode, encode_bytes};
pub use error::{DecodeError, EncodeError, Error, HexError};
pub use geometry::{Geometry, BLOCK_PIXELS};
pub use pack::Rgb;
