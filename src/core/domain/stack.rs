//! Stack summary type.

/// A stack known to the project file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSummary {
    /// Stack name
    pub name: String,
    /// Number of override entries
    pub entries: usize,
    /// Whether this is the selected stack
    pub current: bool,
}
