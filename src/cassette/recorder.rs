//! Records interactions into a cassette file.

use std::path::PathBuf;

use super::format::{Cassette, Interaction};

/// Collects interactions and writes them as a YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: Option<PathBuf>,
    name: String,
    interactions: Vec<Interaction>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: Some(path.into()), ..Self::in_memory(name) }
    }

    /// Create a recorder with no backing file; use [`Self::into_cassette`].
    pub fn in_memory(name: impl Into<String>) -> Self {
        Self { path: None, name: name.into(), interactions: Vec::new(), next_seq: 0 }
    }

    /// Record an interaction. The `seq` field is assigned automatically.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        self.interactions.push(Interaction {
            seq: self.next_seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
        self.next_seq += 1;
    }

    /// Stop recording and return the captured cassette.
    #[must_use]
    pub fn into_cassette(self) -> Cassette {
        Cassette::new(self.name, self.interactions)
    }

    /// Finish recording and write the cassette YAML file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the recorder has no path or the file cannot be written.
    pub fn finish(mut self) -> Result<PathBuf, std::io::Error> {
        let path = self
            .path
            .take()
            .ok_or_else(|| std::io::Error::other("in-memory recorder has no output path"))?;
        let yaml = serde_yaml::to_string(&self.into_cassette()).map_err(std::io::Error::other)?;
        std::fs::write(&path, yaml)?;
        Ok(path)
    }
}
