//! Translation catalog: data model, TS document reader and writer.
//!
//! A [`Catalog`] maps (context name, source text) to localized text. It is
//! loaded once, never mutated at runtime, and falls back to the source text
//! for anything it does not contain.

mod model;
mod reader;
mod writer;

pub use model::{Catalog, Context, Location, Message, TranslationStatus};
pub use reader::{load_catalog, parse_ts};
pub use writer::{save_catalog, write_ts};
