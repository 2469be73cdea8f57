//! Cassette format for recording and replaying port interactions.
//!
//! A cassette captures every clock read and random draw made while a command
//! runs, so the same command can later reproduce its exact output.

pub mod format;
pub mod recorder;
pub mod replayer;
