use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::orientation::Zone;

/// Display label per zone, keyed by the zone's camelCase name.
///
/// Missing entries fall back to [`Zone::default_label`], so a locale file
/// only needs the labels it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LocaleOptions {
    /// Zone name → label overrides.
    pub labels: FxHashMap<String, String>,
}

impl LocaleOptions {
    /// Label to draw for `zone`.
    #[must_use]
    pub fn label(&self, zone: Zone) -> String {
        self.labels
            .get(zone.name())
            .cloned()
            .unwrap_or_else(|| zone.default_label())
    }
}
