//! Page-layout input: the dump format and the accessor trait.

mod document;
mod source;

pub use document::{
    BBox, LayoutBlock, LayoutDocument, LayoutLine, LayoutMetadata, LayoutPage, LayoutSpan,
};
pub use source::LayoutSource;
