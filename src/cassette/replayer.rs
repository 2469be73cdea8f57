//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Serves a cassette's interactions in recorded order, separately for each
/// port/method pair.
pub struct CassetteReplayer {
    pending: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Queues every interaction of `cassette` under its port and method.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut pending: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            pending
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { pending }
    }

    /// Takes the next interaction recorded for `port` and `method`.
    ///
    /// # Panics
    ///
    /// Panics when the cassette holds nothing more for the pair, which means
    /// the run asked for more draws than were recorded.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        if !self.pending.contains_key(&key) {
            let mut recorded: Vec<String> =
                self.pending.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            recorded.sort();
            panic!(
                "Cassette exhausted: nothing recorded for {port}::{method} (cassette has [{}])",
                recorded.join(", ")
            );
        }
        let queue = self.pending.entry(key).or_default();
        queue.pop_front().unwrap_or_else(|| {
            panic!("Cassette exhausted: every {port}::{method} interaction has been replayed")
        })
    }
}
