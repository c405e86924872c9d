//! Snapshot scripts for the replay engine.
//!
//! Scripts are JSON Lines: one [`StateSnapshot`] per line. Blank lines and
//! lines starting with `#` are skipped.
use std::fs;
use std::path::Path;

use engine_api::{Item, StateSnapshot, Stats};

use crate::error::ReplayError;

#[derive(Clone, Debug, Default)]
pub struct ReplayScript {
    steps: Vec<StateSnapshot>,
}

impl ReplayScript {
    pub fn new(steps: Vec<StateSnapshot>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path) -> Result<Self, ReplayError> {
        let source = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self, ReplayError> {
        let mut steps = Vec::new();

        for (index, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let step = StateSnapshot::from_json(line).map_err(|source| ReplayError::Parse {
                line: index + 1,
                source,
            })?;
            steps.push(step);
        }

        Ok(Self { steps })
    }

    /// Short scripted encounter used when no script file is configured.
    pub fn demo() -> Self {
        let items = vec![
            Item::new("Potion", 2.0, "potion"),
            Item::new("Scroll of Light", 1.0, "scroll-light"),
        ];

        Self::new(vec![
            StateSnapshot::new()
                .with_stats(
                    Stats::new()
                        .with_health(100.0, 100.0)
                        .with_gold(0.0)
                        .with_items(items),
                )
                .with_notifications(["Welcome to the dungeon."]),
            StateSnapshot::new()
                .with_stats(Stats::new().with_health(80.0, 100.0))
                .with_notifications(["A rat bites you."]),
            StateSnapshot::new()
                .with_stats(Stats::new().with_gold(15.0))
                .with_notifications(["You find 15 gold."]),
            StateSnapshot::new()
                .with_stats(Stats::new().with_health(55.0, 100.0))
                .with_notifications(["The rat bites again."]),
            StateSnapshot::new().with_notifications(["The rat flees."]),
        ])
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<&StateSnapshot> {
        self.steps.get(index)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use engine_api::Field;

    use super::*;

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let script = ReplayScript::parse(
            "# opening\n\n{\"notifications\": [\"hi\"]}\n   \n{\"stats\": null}\n",
        )
        .unwrap();

        assert_eq!(script.len(), 2);
        assert_eq!(script.step(1).unwrap().stats, Field::Cleared);
    }

    #[test]
    fn parse_reports_line_numbers() {
        let err = ReplayScript::parse("{}\n# note\nnot json\n").unwrap_err();
        assert!(matches!(err, ReplayError::Parse { line: 3, .. }));
    }

    #[test]
    fn loads_script_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"stats": {{"gold": 3}}}}"#).unwrap();

        let script = ReplayScript::from_path(file.path()).unwrap();
        let stats = script.step(0).unwrap().stats.as_present().unwrap();
        assert_eq!(stats.gold, Some(3.0));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReplayScript::from_path(&dir.path().join("missing.jsonl")).unwrap_err();
        assert!(matches!(err, ReplayError::Io { .. }));
    }

    #[test]
    fn demo_script_opens_with_full_stats() {
        let script = ReplayScript::demo();
        let stats = script.step(0).unwrap().stats.as_present().unwrap();

        assert!(stats.health.is_some());
        assert_eq!(stats.items.as_ref().map(Vec::len), Some(2));
    }
}
