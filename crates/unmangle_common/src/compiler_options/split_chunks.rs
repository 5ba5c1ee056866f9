use arcstr::ArcStr;

use crate::{CacheGroup, ChunkScope, FxIndexMap};

/// The `optimization.split_chunks` subtree controlling chunk formation.
#[derive(Debug, Clone, Default)]
pub struct SplitChunksOptions {
  /// Which chunks are eligible for splitting when a group does not say
  /// otherwise.
  pub chunks: Option<ChunkScope>,
  /// Named grouping rules, kept in insertion order.
  pub cache_groups: Option<FxIndexMap<ArcStr, CacheGroup>>,
}
