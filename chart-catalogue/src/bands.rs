//! CM93 portrayal band membership (overview/general/coastal/approach/
//! harbor/berthing), keyed by object class.

use std::sync::OnceLock;

static BANDS: &[(&str, &[&str])] = &[
    ("overview", &["LNDARE", "DEPARE", "COALNE"]),
    ("general", &["LNDARE", "DEPARE", "DEPCNT", "COALNE", "CBLARE", "PIPARE"]),
    (
        "coastal",
        &["DEPARE", "DEPCNT", "SOUNDG", "OBSTRN", "WRECKS", "LIGHTS", "COALNE"],
    ),
    (
        "approach",
        &[
            "DEPARE", "DEPCNT", "SOUNDG", "OBSTRN", "WRECKS", "UWTROC", "ROCKS", "LIGHTS",
            "BOYLAT", "BOYSAW", "BOYISD", "BCNLAT", "BCNCAR",
        ],
    ),
    (
        "harbor",
        &[
            "DEPARE", "DEPCNT", "SOUNDG", "OBSTRN", "WRECKS", "UWTROC", "ROCKS", "LIGHTS",
            "BOYLAT", "BOYSAW", "BOYISD", "BCNLAT", "BCNCAR", "CBLARE", "PIPARE",
        ],
    ),
    (
        "berthing",
        &[
            "DEPARE", "DEPCNT", "SOUNDG", "OBSTRN", "WRECKS", "UWTROC", "ROCKS", "LIGHTS",
            "BOYLAT", "BOYSAW", "BOYISD", "BCNLAT", "BCNCAR", "CBLARE", "PIPARE", "BERTHS",
        ],
    ),
];

fn band_index() -> &'static std::collections::HashMap<&'static str, &'static str> {
    static INDEX: OnceLock<std::collections::HashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut idx = std::collections::HashMap::new();
        for (band, classes) in BANDS {
            for class in *classes {
                idx.entry(*class).or_insert(*band);
            }
        }
        idx
    })
}

/// Return the finest (most detailed) portrayal band that lists `objl`, or
/// `None` if the class is not bound to any band.
pub fn zoom_band_for(objl: &str) -> Option<&'static str> {
    band_index().get(objl).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_class_has_band() {
        assert_eq!(zoom_band_for("LNDARE"), Some("overview"));
        assert_eq!(zoom_band_for("BERTHS"), Some("berthing"));
    }

    #[test]
    fn unknown_class_has_no_band() {
        assert_eq!(zoom_band_for("XYZZY"), None);
    }
}
