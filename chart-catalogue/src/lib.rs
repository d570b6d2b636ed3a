//! Object-class catalogue, SCAMIN zoom rules, and CM93 portrayal bands.
//!
//! Type-safe representations of S-57 object classes and attributes from the
//! IHO S-57 Object Catalogue (Part 3, Appendix A), plus the zoom-gating
//! tables (`scamin`, `bands`) and the compact integer-code dictionary
//! (`dict`) the tile renderer remaps OBJL acronyms through.
//!
//! Reference: IHO S-57 Edition 3.1, November 2000

// Generated modules - DO NOT EDIT MANUALLY
mod attributes_generated;
mod objects_generated;

pub mod bands;
pub mod dict;
pub mod scamin;

pub use attributes_generated::AttributeInfo;
pub use bands::zoom_band_for;
pub use objects_generated::ObjectClass;
pub use scamin::{apply_scamin, scamin_to_zoom, SCAMIN_TABLE};

/// Decode object class from OBJL code
///
/// # Arguments
/// * `objl` - Object class code (OBJL field from FRID)
///
/// # Returns
/// ObjectClass enum or None if unknown
pub fn decode_object(objl: u16) -> Option<ObjectClass> {
    ObjectClass::from_code(objl)
}

/// Get attribute name from ATTL code
///
/// # Arguments
/// * `attl` - Attribute code (ATTL field from ATTF)
///
/// # Returns
/// Human-readable attribute name, or None if unknown
pub fn get_attribute_name(attl: u16) -> Option<&'static str> {
    AttributeInfo::attribute_name(attl)
}
