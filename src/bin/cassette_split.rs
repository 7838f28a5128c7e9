//! Splits a monolithic cassette into per-port cassettes.
//!
//! Usage: `cassette_split <input.yaml> <output_dir>`
//!
//! Writes `<output_dir>/<port>.cassette.yaml` for every port that has at
//! least one interaction, the layout `VARCLOCK_REPLAY=<dir>` reads.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs, process};

use varclock::cassette::format::{Cassette, Interaction};
use varclock::cassette::replayer::CassetteReplayer;
use varclock::ClockError;

fn split_cassette(input: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, ClockError> {
    let content = fs::read_to_string(input)
        .map_err(|e| ClockError::Cassette(format!("failed to read {}: {e}", input.display())))?;
    let cassette: Cassette = serde_yaml::from_str(&content)
        .map_err(|e| ClockError::Cassette(format!("failed to parse {}: {e}", input.display())))?;

    let mut by_port: BTreeMap<&str, Vec<Interaction>> = BTreeMap::new();
    for interaction in &cassette.interactions {
        let per_port = by_port.entry(interaction.port.as_str()).or_default();
        per_port.push(Interaction {
            seq: per_port.len() as u64,
            ..interaction.clone()
        });
    }

    fs::create_dir_all(output_dir).map_err(|e| {
        ClockError::Cassette(format!("failed to create {}: {e}", output_dir.display()))
    })?;

    let mut written = Vec::with_capacity(by_port.len());
    for (port, interactions) in by_port {
        let per_port = Cassette {
            name: format!("{}-{port}", cassette.name),
            recorded_at: cassette.recorded_at,
            recorded_by: cassette.recorded_by.clone(),
            interactions,
        };
        let path = output_dir.join(format!("{port}.cassette.yaml"));
        let yaml = serde_yaml::to_string(&per_port)
            .map_err(|e| ClockError::Cassette(format!("failed to serialize {port}: {e}")))?;
        fs::write(&path, yaml)
            .map_err(|e| ClockError::Cassette(format!("failed to write {}: {e}", path.display())))?;
        // Fail early on anything the replayer would refuse.
        CassetteReplayer::load(&path)?;
        written.push(path);
    }

    Ok(written)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: cassette_split <input.yaml> <output_dir>");
        process::exit(1);
    }

    match split_cassette(Path::new(&args[1]), Path::new(&args[2])) {
        Ok(written) => {
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use varclock::cassette::config::CassetteConfig;

    fn interaction(seq: u64, port: &str, method: &str, output: serde_json::Value) -> Interaction {
        Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input: json!(null),
            output,
        }
    }

    #[test]
    fn split_writes_replayable_per_port_cassettes() {
        let dir = std::env::temp_dir().join("varclock_cassette_split_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let input = dir.join("session.cassette.yaml");
        let cassette = Cassette {
            name: "morning".into(),
            recorded_at: chrono::Utc::now(),
            recorded_by: "varclock test".into(),
            interactions: vec![
                interaction(0, "clock", "now", json!("2024-06-15T13:00:00Z")),
                interaction(
                    1,
                    "geolocation",
                    "locate",
                    json!({"Ok": {"latitude": 51.5074, "longitude": -0.1278}}),
                ),
                interaction(2, "clock", "now", json!("2024-06-15T13:00:01Z")),
            ],
        };
        fs::write(&input, serde_yaml::to_string(&cassette).unwrap()).unwrap();

        let output = dir.join("split");
        let written = split_cassette(&input, &output).unwrap();
        assert_eq!(written.len(), 2);

        let clock = fs::read_to_string(output.join("clock.cassette.yaml")).unwrap();
        let clock: Cassette = serde_yaml::from_str(&clock).unwrap();
        assert_eq!(clock.name, "morning-clock");
        let seqs: Vec<u64> = clock.interactions.iter().map(|i| i.seq).collect();
        assert_eq!(seqs, vec![0, 1]);

        let config = CassetteConfig::from_dir(&output);
        assert!(config.clock.is_some());
        assert!(config.geolocation.is_some());
        assert!(config.sun_times.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unreadable_input_is_a_cassette_error() {
        let result = split_cassette(Path::new("/nonexistent/in.yaml"), Path::new("/tmp"));
        assert!(matches!(result, Err(ClockError::Cassette(_))));
    }
}
