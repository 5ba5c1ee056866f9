mod compiler_options;
mod indexmap;

pub use compiler_options::{
  CompilerOptions,
  cache_group::CacheGroup,
  chunk_scope::ChunkScope,
  chunk_spec::{ChunkSpec, DEFAULT_CHUNK_NAME},
  input_item::InputItem,
  minify_options::MinifyOptions,
  minimizer_options::MinimizerOptions,
  normalized_compiler_options::NormalizedCompilerOptions,
  optimization::Optimization,
  split_chunks::SplitChunksOptions,
};

pub use crate::indexmap::FxIndexMap;
