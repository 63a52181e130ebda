//! Scripted input for headless runs.
//!
//! A script is a comma separated list of `KEYS:STEPS` entries. `KEYS` is one
//! key name or several joined by `+`, and `STEPS` is how many simulation steps
//! they stay held. `-` holds nothing. For example `D:40,W+D:10,-:5,SPACE:1`.

use bevy_ecs::prelude::Resource;

/// One scripted entry: these keys held for `steps` steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub keys: Vec<String>,
    pub steps: u32,
}

/// Parsed input script plus the current playback position.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputScript {
    steps: Vec<ScriptStep>,
    total: u32,
    cursor: u32,
}

impl InputScript {
    /// Parse a script. Key names are upper-cased.
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut steps = Vec::new();
        let mut total: u32 = 0;
        for entry in text.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (keys, count) = entry
                .split_once(':')
                .ok_or_else(|| format!("Script entry {:?} is missing ':STEPS'", entry))?;
            let count: u32 = count
                .trim()
                .parse()
                .map_err(|e| format!("Script entry {:?} has invalid step count: {}", entry, e))?;
            let keys = keys.trim();
            let keys = if keys == "-" {
                Vec::new()
            } else {
                keys.split('+')
                    .map(|k| k.trim().to_ascii_uppercase())
                    .filter(|k| !k.is_empty())
                    .collect()
            };
            total = total
                .checked_add(count)
                .ok_or_else(|| format!("Script is longer than {} steps", u32::MAX))?;
            steps.push(ScriptStep { keys, steps: count });
        }
        Ok(Self {
            steps,
            total,
            cursor: 0,
        })
    }

    /// Total scripted length in steps.
    pub fn total_steps(&self) -> u32 {
        self.total
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.total
    }

    /// Keys held at the current step. Empty once the script is over.
    pub fn current_keys(&self) -> &[String] {
        let mut remaining = self.cursor;
        for step in &self.steps {
            if remaining < step.steps {
                return &step.keys;
            }
            remaining -= step.steps;
        }
        &[]
    }

    /// Move to the next step.
    pub fn advance(&mut self) {
        if !self.is_finished() {
            self.cursor += 1;
        }
    }
}
