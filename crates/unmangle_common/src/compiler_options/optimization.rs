use crate::{MinimizerOptions, SplitChunksOptions};

/// The `optimization` subtree of [`CompilerOptions`](crate::CompilerOptions).
#[derive(Debug, Clone, Default)]
pub struct Optimization {
  pub minimize: Option<bool>,
  pub split_chunks: Option<SplitChunksOptions>,
  /// Minifier instances consulted for every emitted file, in order. `None`
  /// means the host's default minifier setup.
  pub minimizer: Option<Vec<MinimizerOptions>>,
}
