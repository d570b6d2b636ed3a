//! Compact integer-code dictionary used to remap `OBJL` acronyms onto the
//! numeric codes MVT layers carry on the wire.

use std::str::FromStr;

use crate::ObjectClass;

/// Numeric OBJL code for an acronym, or `None` if the catalogue doesn't
/// know it.
pub fn code_for(objl: &str) -> Option<u16> {
    ObjectClass::from_str(objl).ok().map(|c| c as u16)
}

/// Acronym for a numeric OBJL code, the inverse of [`code_for`].
pub fn name_for(code: u16) -> Option<String> {
    ObjectClass::from_code(code).map(|c| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depare_round_trips() {
        let code = code_for("DEPARE").expect("DEPARE in catalogue");
        assert_eq!(name_for(code).as_deref(), Some("DEPARE"));
    }

    #[test]
    fn unknown_acronym_is_none() {
        assert_eq!(code_for("NOT_A_REAL_CLASS"), None);
    }
}
