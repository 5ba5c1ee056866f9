use regex::Regex;

use crate::{MinifyOptions, compiler_options::regex_source};

/// Configuration of one minifier instance in `optimization.minimizer`.
///
/// The filename filters follow the minifier plugin's matching contract: an
/// emitted file is handled when `test` and `include` match it (an absent
/// filter matches everything) and `exclude` does not (absent excludes
/// nothing). Negated matching lives in `exclude` rather than in lookahead
/// patterns, which the `regex` crate does not support.
#[derive(Debug, Clone, Default)]
pub struct MinimizerOptions {
  pub test: Option<Regex>,
  pub include: Option<Regex>,
  pub exclude: Option<Regex>,
  /// Opaque minifier configuration. `None` means minifier defaults.
  pub minify: Option<MinifyOptions>,
}

impl MinimizerOptions {
  /// Whether this minifier instance handles the given output filename.
  pub fn matches(&self, filename: &str) -> bool {
    self.test.as_ref().is_none_or(|test| test.is_match(filename))
      && self.include.as_ref().is_none_or(|include| include.is_match(filename))
      && self.exclude.as_ref().is_none_or(|exclude| !exclude.is_match(filename))
  }
}

impl PartialEq for MinimizerOptions {
  fn eq(&self, other: &Self) -> bool {
    regex_source(self.test.as_ref()) == regex_source(other.test.as_ref())
      && regex_source(self.include.as_ref()) == regex_source(other.include.as_ref())
      && regex_source(self.exclude.as_ref()) == regex_source(other.exclude.as_ref())
      && self.minify == other.minify
  }
}

#[test]
fn test_absent_filters_match_everything() {
  let minimizer = MinimizerOptions::default();
  assert!(minimizer.matches("main.js"));
  assert!(minimizer.matches("styles.css"));
}

#[test]
fn test_filters_restrict_matches() {
  let minimizer =
    MinimizerOptions { test: Some(Regex::new(r"\.js$").unwrap()), ..Default::default() };
  assert!(minimizer.matches("main.js"));
  assert!(!minimizer.matches("styles.css"));

  let minimizer = MinimizerOptions {
    test: Some(Regex::new(r"\.js$").unwrap()),
    include: Some(Regex::new("^pages/").unwrap()),
    ..Default::default()
  };
  assert!(minimizer.matches("pages/home.js"));
  assert!(!minimizer.matches("shared/home.js"));
}

#[test]
fn test_exclude_vetoes_matches() {
  let minimizer = MinimizerOptions {
    test: Some(Regex::new(r"\.js$").unwrap()),
    exclude: Some(Regex::new("vendor").unwrap()),
    ..Default::default()
  };
  assert!(minimizer.matches("main.js"));
  assert!(!minimizer.matches("vendor.js"));
  assert!(!minimizer.matches("vendor.3f9a.js"));
}

#[test]
fn test_equality_compares_patterns_by_source() {
  let left = MinimizerOptions { test: Some(Regex::new(r"\.js$").unwrap()), ..Default::default() };
  let right = MinimizerOptions { test: Some(Regex::new(r"\.js$").unwrap()), ..Default::default() };
  assert_eq!(left, right);

  let different =
    MinimizerOptions { test: Some(Regex::new(r"\.mjs$").unwrap()), ..Default::default() };
  assert_ne!(left, different);
}
