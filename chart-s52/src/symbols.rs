//! Symbol metadata: anchor point, pixel size, and rotatability per icon.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolEntry {
    pub width: f64,
    pub height: f64,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub rotatable: bool,
}

#[derive(Debug, Clone)]
pub struct SymbolAtlas {
    entries: HashMap<String, SymbolEntry>,
}

impl Default for SymbolAtlas {
    fn default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "DANGER51".to_string(),
            SymbolEntry { width: 24.0, height: 24.0, anchor_x: 12.0, anchor_y: 24.0, rotatable: false },
        );
        entries.insert(
            "ROCKS01".to_string(),
            SymbolEntry { width: 16.0, height: 16.0, anchor_x: 8.0, anchor_y: 8.0, rotatable: false },
        );
        entries.insert(
            "ISODGR51".to_string(),
            SymbolEntry { width: 20.0, height: 20.0, anchor_x: 10.0, anchor_y: 20.0, rotatable: false },
        );
        Self { entries }
    }
}

impl SymbolAtlas {
    pub fn from_entries(entries: HashMap<String, SymbolEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<SymbolEntry> {
        self.entries.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_icon_has_entry() {
        let atlas = SymbolAtlas::default();
        assert!(atlas.get("DANGER51").is_some());
        assert!(atlas.get("NOPE").is_none());
    }
}
