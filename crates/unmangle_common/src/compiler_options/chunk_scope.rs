use std::fmt::Display;

/// Which module graphs a grouping rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkScope {
  /// Both the synchronous entry graph and dynamically imported modules.
  All,
  /// Only modules reached through dynamic imports.
  Async,
  /// Only modules reached from the synchronous entry graph.
  Initial,
}

impl Display for ChunkScope {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::All => write!(f, "all"),
      Self::Async => write!(f, "async"),
      Self::Initial => write!(f, "initial"),
    }
  }
}
