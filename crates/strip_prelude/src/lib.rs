// crates/strip_prelude/src/lib.rs

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use locate_marker::locate_marker;

/// The fixed ASCII delimiter separating the discarded prelude from the payload.
pub const PRELUDE_MARKER: &[u8] = b"UM program follows colon:";

/// Returns the payload following the first occurrence of `PRELUDE_MARKER` in
/// `input`, or `None` if the marker does not occur.
pub fn payload_after_marker(input: &[u8]) -> Option<&[u8]> {
    locate_marker(input, PRELUDE_MARKER).map(|pos| &input[pos + PRELUDE_MARKER.len()..])
}

/// Reads `input` to end-of-stream, locates the prelude marker, and writes the
/// bytes after it to `output`.
///
/// Returns the exit code the process should terminate with:
///   - `0` when the payload was written (or the downstream consumer closed the
///     output early, which is a normal way for a pipeline to end),
///   - `1` when the marker is absent, in which case `Prelude not found` is
///     written to `error` and no output is produced.
///
/// # Errors
///
/// Any I/O failure other than a `BrokenPipe` on `output` is returned as a
/// fatal error.
pub fn run<R: Read, W: Write, E: Write>(
    input: &mut R,
    output: &mut W,
    error: &mut E,
) -> Result<i32> {
    let mut buffer = Vec::new();
    input
        .read_to_end(&mut buffer)
        .context("Failed to read input")?;

    let payload = match payload_after_marker(&buffer) {
        Some(payload) => payload,
        None => {
            writeln!(error, "Prelude not found").context("Failed to write to the error stream")?;
            return Ok(1);
        }
    };

    match output.write_all(payload).and_then(|_| output.flush()) {
        Ok(()) => Ok(0),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(0),
        Err(err) => Err(err).context("Failed to write the payload"),
    }
}
