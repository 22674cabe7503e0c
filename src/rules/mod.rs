//! Rule implementations for lingot.
//!
//! This module contains pure functions that check project data for catalog
//! issues. Each function takes only the specific inputs it needs (not a
//! full Project) and returns a specific issue type.
//!
//! ## Module Structure
//!
//! - `missing`: strings in the sources but absent from catalogs
//! - `untranslated`: catalog entries with no usable translation
//! - `obsolete`: vanished entries still kept in catalogs
//! - `duplicate`: repeated source texts within one context

pub mod duplicate;
pub mod missing;
pub mod obsolete;
pub mod untranslated;
