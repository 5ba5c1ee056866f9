use arcstr::ArcStr;
use regex::Regex;

use crate::{ChunkScope, compiler_options::regex_source};

/// One named entry of `optimization.split_chunks.cache_groups`.
#[derive(Debug, Clone, Default)]
pub struct CacheGroup {
  /// Module path filter deciding which modules belong to the group.
  pub test: Option<Regex>,
  /// Name of the chunk the grouped modules are emitted into.
  pub name: Option<ArcStr>,
  pub chunks: Option<ChunkScope>,
}

// Regexes compare by pattern source so written configuration can be asserted on.
impl PartialEq for CacheGroup {
  fn eq(&self, other: &Self) -> bool {
    regex_source(self.test.as_ref()) == regex_source(other.test.as_ref())
      && self.name == other.name
      && self.chunks == other.chunks
  }
}
