//! Parsing module for lead-sheet markup

pub mod lead_sheet;

pub use lead_sheet::*;
