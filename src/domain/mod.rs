pub mod entry;
pub mod outline;

pub use entry::{EntryRecord, PhotoRef};
pub use outline::OutlineNode;
