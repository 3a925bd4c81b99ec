//! Embedded word list
//!
//! The bundled dictionary compiled into the binary at build time, so the
//! game is playable with no arguments.

// Include the generated word list from the build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
