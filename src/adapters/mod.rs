//! Adapter implementations of the port traits.

pub mod live;
pub mod recording;
pub mod replaying;
pub mod sequence;
