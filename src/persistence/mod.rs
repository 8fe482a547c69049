pub mod files;
pub mod reader;
pub mod writer;

pub use reader::DayOneReader;
pub use writer::{write_markdown, write_outline, DEFAULT_MARKDOWN_DIR, DEFAULT_OUTLINE_FILE};
