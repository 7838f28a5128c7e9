//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};
use std::path::Path;

use super::format::{Cassette, Interaction};
use crate::error::ClockError;

/// Replays a cassette, handing out interactions in recorded order for each
/// port/method pair independently.
#[derive(Debug, Default)]
pub struct CassetteReplayer {
    pending: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Create a replayer from a loaded cassette.
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

    /// Read and parse a YAML cassette file.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Cassette`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ClockError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClockError::Cassette(format!("failed to read {}: {e}", path.display()))
        })?;
        let cassette: Cassette = serde_yaml::from_str(&content).map_err(|e| {
            ClockError::Cassette(format!("failed to parse {}: {e}", path.display()))
        })?;
        Ok(Self::new(&cassette))
    }

    /// Number of interactions not yet served for `port`/`method`.
    #[must_use]
    pub fn remaining(&self, port: &str, method: &str) -> usize {
        self.pending
            .get(&(port.to_owned(), method.to_owned()))
            .map_or(0, VecDeque::len)
    }

    /// Take the next recorded interaction for `port`/`method`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Cassette`] naming the request when the cassette
    /// holds no further interactions for it.
    pub fn next_interaction(
        &mut self,
        port: &str,
        method: &str,
    ) -> Result<Interaction, ClockError> {
        self.pending
            .get_mut(&(port.to_owned(), method.to_owned()))
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| {
                let mut available: Vec<String> = self
                    .pending
                    .iter()
                    .filter(|(_, queue)| !queue.is_empty())
                    .map(|((p, m), queue)| format!("{p}::{m} ({})", queue.len()))
                    .collect();
                available.sort();
                ClockError::Cassette(format!(
                    "cassette exhausted for {port}::{method}; remaining: [{}]",
                    available.join(", ")
                ))
            })
    }
}
