//! Bulk generation.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::encoder::encode_person;
use super::identifier::Identifier;
use super::random::{generate_random, random_person};
use crate::context::ServiceContext;

/// Smallest batch ever produced.
pub const MIN_BATCH: usize = 1;
/// Largest batch ever produced.
pub const MAX_BATCH: usize = 500;

/// How each identifier in a batch is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchMode {
    /// Every field random, via [`generate_random`].
    #[default]
    Random,
    /// A random person run through the encoder.
    Encoded,
}

/// Clamps a requested batch size into `[MIN_BATCH, MAX_BATCH]`.
#[must_use]
pub fn clamp_count(requested: i64) -> usize {
    let clamped = match usize::try_from(requested) {
        Ok(count) => count.clamp(MIN_BATCH, MAX_BATCH),
        Err(_) if requested < 0 => MIN_BATCH,
        Err(_) => MAX_BATCH,
    };
    if i64::try_from(clamped).ok() != Some(requested) {
        warn!(requested, clamped, "batch size out of range, clamping");
    }
    clamped
}

/// Lazily generated identifiers. Consumed once; duplicates are possible.
pub struct Batch<'a> {
    ctx: &'a ServiceContext,
    mode: BatchMode,
    remaining: usize,
}

impl Iterator for Batch<'_> {
    type Item = Identifier;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(match self.mode {
            BatchMode::Random => generate_random(self.ctx),
            BatchMode::Encoded => encode_person(self.ctx, &random_person(self.ctx)).identifier,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Batch<'_> {}

impl FusedIterator for Batch<'_> {}

/// Starts a batch of `count` identifiers, clamped to `[1, 500]`.
#[must_use]
pub fn batch(ctx: &ServiceContext, count: i64, mode: BatchMode) -> Batch<'_> {
    let remaining = clamp_count(count);
    debug!(remaining, ?mode, "starting batch");
    Batch { ctx, mode, remaining }
}

/// Generates a whole batch at once.
#[must_use]
pub fn generate_batch(ctx: &ServiceContext, count: i64, mode: BatchMode) -> Vec<Identifier> {
    batch(ctx, count, mode).collect()
}
