//! A read-only snapshot of a board and the library elements it uses.
//!
//! Everything here is plain owned data; a snapshot is built (or deserialized) once and then only
//! borrowed by the consumers.

pub mod board;
pub mod circuit;
pub mod layer;
pub mod library;
pub mod locale;
