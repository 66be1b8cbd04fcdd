//! Text formats for exporting and importing graphs.

pub mod document;
pub mod dot;

pub use document::GraphDocument;
pub use dot::DotWriter;
