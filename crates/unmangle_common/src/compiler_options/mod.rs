pub mod cache_group;
pub mod chunk_scope;
pub mod chunk_spec;
pub mod input_item;
pub mod minify_options;
pub mod minimizer_options;
pub mod normalized_compiler_options;
pub mod optimization;
pub mod split_chunks;

use std::path::PathBuf;

use regex::Regex;

use crate::{InputItem, Optimization};

/// The host's mutable build configuration.
///
/// Plugins receive a reference to this record during the startup phase and
/// mutate the parts they own; everything they do not touch must survive as
/// written. Raw fields are all optional — defaults are applied later, in one
/// place, when the options are normalized.
#[derive(Default, Debug, Clone)]
pub struct CompilerOptions {
  // --- Input
  pub cwd: Option<PathBuf>,
  pub entry: Option<Vec<InputItem>>,

  // --- Output
  pub dir: Option<String>,

  // --- Optimization
  pub optimization: Option<Optimization>,
}

/// Regexes carry no notion of equality; configuration types compare them by
/// pattern source instead so tests can assert the exact written shape.
pub(crate) fn regex_source(re: Option<&Regex>) -> Option<&str> {
  re.map(Regex::as_str)
}
