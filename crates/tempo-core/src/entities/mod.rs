//! Entity structs for Tempo domain objects.
//!
//! Entries are created externally and only ever read and partially updated
//! by Tempo. Vocabularies and classifications live for a single run.

mod classification;
mod entry;
mod vocabulary;

pub use classification::Classification;
pub use entry::Entry;
pub use vocabulary::Vocabulary;
