//! Colour token palette (e.g. `DEPVS` -> a CSS hex colour), loadable from an
//! embedded default or a style asset override.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Palette {
    tokens: HashMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        let mut tokens = HashMap::new();
        tokens.insert("DEPVS".to_string(), "#a8d5e8".to_string());
        tokens.insert("DEPIT1".to_string(), "#c8e6f0".to_string());
        tokens.insert("DEPDW".to_string(), "#5b9bd5".to_string());
        tokens.insert("DEPSC".to_string(), "#1f5c8a".to_string());
        tokens.insert("CHBLK".to_string(), "#000000".to_string());
        tokens.insert("CHGRD".to_string(), "#808080".to_string());
        tokens.insert("LANDA".to_string(), "#f0e6c8".to_string());
        Self { tokens }
    }
}

impl Palette {
    pub fn from_overrides(overrides: HashMap<String, String>) -> Self {
        let mut palette = Self::default();
        palette.tokens.extend(overrides);
        palette
    }

    /// Resolve a colour token name to its hex value. Unknown tokens yield
    /// `None` rather than a default colour, so the caller can choose its
    /// own fallback.
    pub fn resolve(&self, token: &str) -> Option<String> {
        self.tokens.get(token).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_depth_tokens() {
        let p = Palette::default();
        assert!(p.resolve("DEPVS").is_some());
        assert!(p.resolve("NOT_A_TOKEN").is_none());
    }

    #[test]
    fn overrides_win() {
        let mut overrides = HashMap::new();
        overrides.insert("DEPVS".to_string(), "#ffffff".to_string());
        let p = Palette::from_overrides(overrides);
        assert_eq!(p.resolve("DEPVS"), Some("#ffffff".to_string()));
    }
}
