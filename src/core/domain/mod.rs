//! Domain types.

mod entry;
mod stack;

pub use entry::Entry;
pub use stack::StackSummary;
