use arcstr::ArcStr;
use regex::Regex;

use crate::MinimizerOptions;

/// Chunk name substituted when the caller provides none.
pub const DEFAULT_CHUNK_NAME: &str = "unnamed-unmangled-chunk";

/// Description of the chunk to isolate and minify without identifier
/// renaming.
///
/// Accepted as given: the pattern was already compiled by the caller and
/// `minify_options` is handed to the minifier untouched.
#[derive(Debug, Clone)]
pub struct ChunkSpec {
  /// Chunk name. `None` or `""` falls back to [`DEFAULT_CHUNK_NAME`].
  pub name: Option<ArcStr>,
  /// Matched against module paths to decide membership in the chunk.
  pub modules_regex: Regex,
  /// Complete minifier configuration for the chunk's own output file. `None`
  /// selects the built-in no-mangle configuration.
  pub minify_options: Option<MinimizerOptions>,
}
