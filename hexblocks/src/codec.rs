//! Whole encode and decode pipelines.
//!
//! encode: hex text -> bytes -> geometry -> blocks -> container
//! decode: container -> blocks -> bytes -> hex text

use std::io::{Read, Write};

use log::debug;

use crate::backend::Backend;
use crate::error::{DecodeError, EncodeError, Error};
use crate::geometry::Geometry;
use crate::hex::{decode_hex_text, encode_hex_text};
use crate::pack::{pack, unpack};

/// Render `payload` into a serialized container held in memory.
pub fn encode_bytes(
    payload: &[u8],
    blocks_per_row: i64,
    backend: Backend,
) -> Result<(Geometry, Vec<u8>), EncodeError> {
    let geometry = Geometry::plan(payload.len(), blocks_per_row);
    debug!(
        "{} bytes -> {} blocks, {}x{} grid, {}x{} px {}",
        payload.len(),
        geometry.block_count,
        geometry.blocks_per_row,
        geometry.rows,
        geometry.width,
        geometry.height,
        backend.name()
    );

    let blocks = pack(payload);
    let mut container = Vec::new();
    backend.write(&geometry, &blocks, &mut container)?;
    Ok((geometry, container))
}

/// Recover the payload from a serialized container, trailing zeros trimmed.
pub fn decode_bytes(container: &[u8], backend: Backend) -> Result<Vec<u8>, DecodeError> {
    let blocks = backend.sample(container)?;
    let payload = unpack(&blocks);
    debug!(
        "{} {} bytes -> {} blocks -> {} payload bytes",
        backend.name(),
        container.len(),
        blocks.len(),
        payload.len()
    );
    Ok(payload)
}

/// Read hex text from `input` and write the rendered container to `output`.
///
/// The container is built in memory first, so nothing reaches `output`
/// unless rendering succeeds.
pub fn encode<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    blocks_per_row: i64,
    backend: Backend,
) -> Result<Geometry, Error> {
    let mut text = Vec::new();
    input.read_to_end(&mut text).map_err(Error::Read)?;
    let payload = decode_hex_text(&text)?;

    let (geometry, container) = encode_bytes(&payload, blocks_per_row, backend)?;
    output.write_all(&container).map_err(Error::Write)?;
    output.flush().map_err(Error::Write)?;
    Ok(geometry)
}

/// Read a container from `input` and write the payload to `output` as a
/// line of lower-case hex. Returns the recovered payload.
pub fn decode<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    backend: Backend,
) -> Result<Vec<u8>, Error> {
    let mut container = Vec::new();
    input.read_to_end(&mut container).map_err(Error::Read)?;
    let payload = decode_bytes(&container, backend)?;

    output
        .write_all(encode_hex_text(&payload).as_bytes())
        .map_err(Error::Write)?;
    output.flush().map_err(Error::Write)?;
    Ok(payload)
}
