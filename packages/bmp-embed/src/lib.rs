//! Embeds the raw bytes of a BMP image into a pair of C++ source files.
//!
//! The declaration file (`.hpp`) carries `extern` declarations for the byte
//! array and its size; the definition file (`.cpp`) carries the array
//! literal itself. The image is treated as an opaque byte stream.

mod embedder;
mod error;
mod names;
mod render;

pub use embedder::*;
pub use error::*;
pub use names::*;
pub use render::*;
