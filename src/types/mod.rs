mod document;
mod encoding;

pub use document::{IniDocument, Section, SectionIter};
pub use encoding::Encoding;
