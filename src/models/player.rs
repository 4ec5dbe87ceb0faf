use super::cell::Marker;
use super::constants::DEFAULT_NAME_PREFIX;

/// One of the two participants in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: Option<String>,
    marker: Marker,
}

impl Player {
    /// Surrounding whitespace is dropped and a blank name counts as absent.
    pub fn new(name: &str, marker: Marker) -> Self {
        let name = name.trim();
        Player {
            name: (!name.is_empty()).then(|| name.to_string()),
            marker,
        }
    }

    /// The name to show, e.g. `Ann` or `Player (X)` when none was given.
    pub fn name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} ({})", DEFAULT_NAME_PREFIX, self.marker),
        }
    }

    /// The name as entered, if any.
    pub fn raw_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }
}
