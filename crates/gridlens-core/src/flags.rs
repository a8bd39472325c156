//! Feature flag lookup.

use std::collections::HashMap;

/// Feature-flag collaborator, polled on every render.
pub trait FeatureFlags: Send + Sync {
    fn is_enabled(&self, name: &str) -> bool;
}

/// Fixed flag set; unknown flags are disabled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticFlags {
    flags: HashMap<String, bool>,
}

impl StaticFlags {
    pub fn set(&mut self, name: impl Into<String>, enabled: bool) {
        self.flags.insert(name.into(), enabled);
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for StaticFlags {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl FeatureFlags for StaticFlags {
    fn is_enabled(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}
