//! Shared JSON fixtures for sortviz tests, resolved through `fixtures/manifest.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    scenarios: BTreeMap<String, String>,
    #[serde(default)]
    storyboards: BTreeMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a BTreeMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Sort scenarios: an input plus the expected table/output or error kind.
pub mod scenarios {
    use super::*;

    /// Scenario names in sorted order.
    pub fn keys() -> Vec<String> {
        MANIFEST.scenarios.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.scenarios, "scenario", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.scenarios, "scenario", name)?;
        super::load_json(rel)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.scenarios, "scenario", name)?;
        Ok(resolve_path(rel))
    }
}

/// Storyboard expectations (cue count, duration, frames) for a scenario.
pub mod storyboards {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.storyboards.keys().cloned().collect()
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.storyboards, "storyboard", name)?;
        super::load_json(rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_resolves_to_a_file() {
        assert!(!scenarios::keys().is_empty());
        for key in scenarios::keys() {
            let path = scenarios::path(&key).unwrap();
            assert!(path.exists(), "missing fixture file {}", path.display());
        }
    }

    #[test]
    fn every_storyboard_names_a_known_scenario() {
        for key in storyboards::keys() {
            let exp: serde_json::Value = storyboards::load(&key).unwrap();
            let scenario = exp["scenario"].as_str().unwrap();
            assert!(scenarios::path(scenario).is_ok(), "{key} -> {scenario}");
        }
    }

    #[test]
    fn unknown_fixture_is_an_error() {
        assert!(scenarios::json("does-not-exist").is_err());
    }
}
