pub mod converter;
pub mod dates;
pub mod photos;
pub mod pipeline;
pub mod uid;

pub use pipeline::{convert_markdown, convert_outline, MarkdownDocument};
