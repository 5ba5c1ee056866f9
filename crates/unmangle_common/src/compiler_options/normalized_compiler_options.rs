use std::path::PathBuf;

use arcstr::ArcStr;

use crate::{CacheGroup, ChunkScope, FxIndexMap, InputItem, MinimizerOptions};

#[derive(Debug)]
pub struct NormalizedCompilerOptions {
  // --- Input
  pub cwd: PathBuf,
  pub entry: Vec<InputItem>,

  // --- Output
  pub dir: String,

  // --- Optimization
  pub minimize: bool,
  pub chunk_scope: ChunkScope,
  pub cache_groups: FxIndexMap<ArcStr, CacheGroup>,
  pub minimizer: Vec<MinimizerOptions>,
}

impl NormalizedCompilerOptions {
  /// Minifier instances that would handle the given output filename, in
  /// configuration order.
  pub fn minimizers_for<'a>(
    &'a self,
    filename: &'a str,
  ) -> impl Iterator<Item = &'a MinimizerOptions> {
    self.minimizer.iter().filter(move |minimizer| minimizer.matches(filename))
  }
}
