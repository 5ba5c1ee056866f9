use unmangle_common::{ChunkScope, CompilerOptions, NormalizedCompilerOptions};

/// Flatten the raw configuration into the concrete view the build pipeline
/// consumes, applying defaults in one place.
pub fn normalize_options(raw_options: CompilerOptions) -> NormalizedCompilerOptions {
  let optimization = raw_options.optimization.unwrap_or_default();
  let split_chunks = optimization.split_chunks.unwrap_or_default();

  NormalizedCompilerOptions {
    cwd: raw_options
      .cwd
      .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir")),
    entry: raw_options.entry.unwrap_or_default(),
    dir: raw_options.dir.unwrap_or_else(|| "dist".to_string()),
    minimize: optimization.minimize.unwrap_or(false),
    chunk_scope: split_chunks.chunks.unwrap_or(ChunkScope::Async),
    cache_groups: split_chunks.cache_groups.unwrap_or_default(),
    minimizer: optimization.minimizer.unwrap_or_default(),
  }
}

#[test]
fn test_defaults() {
  let normalized = normalize_options(CompilerOptions::default());
  assert!(normalized.entry.is_empty());
  assert_eq!(normalized.dir, "dist");
  assert!(!normalized.minimize);
  assert_eq!(normalized.chunk_scope, ChunkScope::Async);
  assert!(normalized.cache_groups.is_empty());
  assert!(normalized.minimizer.is_empty());
}

#[test]
fn test_explicit_values_survive() {
  use unmangle_common::Optimization;

  let normalized = normalize_options(CompilerOptions {
    dir: Some("out".to_string()),
    optimization: Some(Optimization { minimize: Some(true), ..Default::default() }),
    ..Default::default()
  });
  assert_eq!(normalized.dir, "out");
  assert!(normalized.minimize);
}
