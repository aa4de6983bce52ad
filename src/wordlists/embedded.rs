//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/solutions.rs"));
include!(concat!(env!("OUT_DIR"), "/guessable.rs"));
