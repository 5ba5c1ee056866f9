use std::sync::LazyLock;

use arcstr::ArcStr;
use regex::Regex;
use unmangle_common::{
  CacheGroup, ChunkScope, ChunkSpec, DEFAULT_CHUNK_NAME, FxIndexMap, MinifyOptions,
  MinimizerOptions, Optimization, SplitChunksOptions,
};
use unmangle_error::BuildResult;
use unmangle_plugin::{BoxPlugin, CompilerHooks, CompilerPlugin, PluginName};

static JS_FILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.js$").unwrap());

/// Isolates one chunk and minifies it without identifier renaming.
///
/// Registration adds a cache group routing the matched modules into their
/// own output file, then replaces `optimization.minimizer` with a pair of
/// minifiers that split the output set: every emitted `.js` file except the
/// chunk's is minified normally, the chunk's own file with mangling
/// disabled. Caller-supplied minimizers are appended after the pair.
#[derive(Debug)]
pub struct UnmangleChunkPlugin {
  chunk_name: ArcStr,
  modules_regex: Regex,
  minify_options: Option<MinimizerOptions>,
  supplemental_minimizers: Vec<MinimizerOptions>,
}

impl UnmangleChunkPlugin {
  /// A missing or empty `chunk.name` falls back to [`DEFAULT_CHUNK_NAME`].
  /// Nothing else is validated here: a bad pattern or minifier option
  /// surfaces from the host at build time, not at configure time.
  pub fn new(chunk: ChunkSpec, supplemental_minimizers: Option<Vec<MinimizerOptions>>) -> Self {
    let chunk_name = match chunk.name {
      Some(name) if !name.is_empty() => name,
      _ => ArcStr::from(DEFAULT_CHUNK_NAME),
    };
    Self {
      chunk_name,
      modules_regex: chunk.modules_regex,
      minify_options: chunk.minify_options,
      supplemental_minimizers: supplemental_minimizers.unwrap_or_default(),
    }
  }

  pub fn new_boxed(
    chunk: ChunkSpec,
    supplemental_minimizers: Option<Vec<MinimizerOptions>>,
  ) -> BoxPlugin {
    Box::new(Self::new(chunk, supplemental_minimizers))
  }

  /// Minifier for every emitted `.js` file except the isolated chunk's.
  ///
  /// The exclusion matches on "contains", not "equals": hosts commonly
  /// append a content hash to the chunk's output filename, and the hashed
  /// file must stay unmangled too.
  fn exclude_chunk_minimizer(&self) -> MinimizerOptions {
    let escaped = regex::escape(&self.chunk_name);
    MinimizerOptions {
      test: Some(JS_FILE_RE.clone()),
      include: None,
      exclude: Some(Regex::new(&escaped).expect("Failed to compile escaped chunk name")),
      minify: None,
    }
  }

  /// Minifier for the chunk's own output file: mangling disabled, every
  /// other knob left at the minifier's default. When the caller supplied a
  /// complete configuration it is used verbatim instead, with no merging.
  fn chunk_only_minimizer(&self) -> MinimizerOptions {
    self.minify_options.clone().unwrap_or_else(|| {
      let escaped = regex::escape(&self.chunk_name);
      MinimizerOptions {
        test: Some(
          Regex::new(&format!(r"{escaped}.*\.js$")).expect("Failed to compile chunk file pattern"),
        ),
        include: None,
        exclude: None,
        minify: Some(MinifyOptions::no_mangle()),
      }
    })
  }
}

impl CompilerPlugin for UnmangleChunkPlugin {
  fn name(&self) -> PluginName<'_> {
    std::borrow::Cow::Borrowed("unmangle-chunk")
  }

  fn apply(&self, hooks: &mut CompilerHooks) -> BuildResult<()> {
    let chunk_name = self.chunk_name.clone();
    let modules_regex = self.modules_regex.clone();
    let exclude_minimizer = self.exclude_chunk_minimizer();
    let chunk_minimizer = self.chunk_only_minimizer();
    let supplemental = self.supplemental_minimizers.clone();

    hooks.environment.tap(self.name(), move |options| {
      // Create only the missing levels; sibling settings and unrelated
      // cache groups must survive as written.
      let optimization = options.optimization.get_or_insert_with(Optimization::default);
      let split_chunks = optimization.split_chunks.get_or_insert_with(SplitChunksOptions::default);
      let cache_groups = split_chunks.cache_groups.get_or_insert_with(FxIndexMap::default);

      cache_groups.insert(
        chunk_name.clone(),
        CacheGroup {
          test: Some(modules_regex.clone()),
          name: Some(chunk_name.clone()),
          chunks: Some(ChunkScope::All),
        },
      );

      // The minimizer list is replaced outright, not appended to: this
      // plugin owns the minification split once registered.
      let mut minimizer = vec![exclude_minimizer.clone(), chunk_minimizer.clone()];
      minimizer.extend_from_slice(&supplemental);
      optimization.minimizer = Some(minimizer);

      tracing::debug!("isolated chunk `{chunk_name}` with mangling disabled");
      Ok(())
    });

    Ok(())
  }
}

#[cfg(test)]
fn configure(plugin: &UnmangleChunkPlugin) -> unmangle_common::CompilerOptions {
  let mut options = unmangle_common::CompilerOptions::default();
  let mut hooks = CompilerHooks::default();
  plugin.apply(&mut hooks).unwrap();
  hooks.environment.call(&mut options).unwrap();
  options
}

#[test]
fn test_missing_or_empty_name_falls_back_to_default() {
  let unnamed = UnmangleChunkPlugin::new(
    ChunkSpec {
      name: None,
      modules_regex: Regex::new("node_modules").unwrap(),
      minify_options: None,
    },
    None,
  );
  assert_eq!(unnamed.chunk_name.as_str(), DEFAULT_CHUNK_NAME);

  let blank = UnmangleChunkPlugin::new(
    ChunkSpec {
      name: Some(ArcStr::from("")),
      modules_regex: Regex::new("node_modules").unwrap(),
      minify_options: None,
    },
    None,
  );
  assert_eq!(blank.chunk_name.as_str(), DEFAULT_CHUNK_NAME);

  let options = configure(&blank);
  let split_chunks = options.optimization.unwrap().split_chunks.unwrap();
  assert!(split_chunks.cache_groups.unwrap().contains_key(DEFAULT_CHUNK_NAME));
}

#[test]
fn test_registered_cache_group_routes_matched_modules() {
  let plugin = UnmangleChunkPlugin::new(
    ChunkSpec {
      name: Some(ArcStr::from("vendor")),
      modules_regex: Regex::new("node_modules").unwrap(),
      minify_options: None,
    },
    None,
  );

  let options = configure(&plugin);
  let split_chunks = options.optimization.unwrap().split_chunks.unwrap();
  let cache_groups = split_chunks.cache_groups.unwrap();
  assert_eq!(
    cache_groups["vendor"],
    CacheGroup {
      test: Some(Regex::new("node_modules").unwrap()),
      name: Some(ArcStr::from("vendor")),
      chunks: Some(ChunkScope::All),
    }
  );
}

#[test]
fn test_minimizer_pair_comes_before_supplemental_entries() {
  let supplemental =
    MinimizerOptions { test: Some(Regex::new(r"\.css$").unwrap()), ..Default::default() };
  let plugin = UnmangleChunkPlugin::new(
    ChunkSpec {
      name: Some(ArcStr::from("vendor")),
      modules_regex: Regex::new("node_modules").unwrap(),
      minify_options: None,
    },
    Some(vec![supplemental.clone()]),
  );

  let options = configure(&plugin);
  let minimizer = options.optimization.unwrap().minimizer.unwrap();
  assert_eq!(minimizer.len(), 3);
  assert_eq!(minimizer[0].test.as_ref().unwrap().as_str(), r"\.js$");
  assert_eq!(minimizer[0].exclude.as_ref().unwrap().as_str(), "vendor");
  assert_eq!(minimizer[1].test.as_ref().unwrap().as_str(), r"vendor.*\.js$");
  assert_eq!(minimizer[2], supplemental);
}

#[test]
fn test_chunk_and_remaining_files_go_to_different_minifiers() {
  let plugin = UnmangleChunkPlugin::new(
    ChunkSpec {
      name: Some(ArcStr::from("vendor")),
      modules_regex: Regex::new("node_modules").unwrap(),
      minify_options: None,
    },
    None,
  );

  let options = configure(&plugin);
  let minimizer = options.optimization.unwrap().minimizer.unwrap();
  assert_eq!(minimizer.len(), 2);
  let (exclude_chunk, chunk_only) = (&minimizer[0], &minimizer[1]);

  // The chunk's own file goes to the no-mangle side, hashed or not.
  assert!(chunk_only.matches("vendor.js"));
  assert!(chunk_only.matches("vendor.3f9a1c.js"));
  assert!(!exclude_chunk.matches("vendor.js"));
  assert!(!exclude_chunk.matches("vendor.3f9a1c.js"));

  // Every other script goes to the normal side.
  assert!(exclude_chunk.matches("main.js"));
  assert!(!chunk_only.matches("main.js"));

  // Non-script files belong to neither.
  assert!(!exclude_chunk.matches("styles.css"));
  assert!(!chunk_only.matches("styles.css"));
}

#[test]
fn test_default_chunk_minifier_only_disables_mangling() {
  let plugin = UnmangleChunkPlugin::new(
    ChunkSpec {
      name: Some(ArcStr::from("vendor")),
      modules_regex: Regex::new("node_modules").unwrap(),
      minify_options: None,
    },
    None,
  );

  let options = configure(&plugin);
  let minimizer = options.optimization.unwrap().minimizer.unwrap();
  assert!(minimizer[0].minify.is_none());
  assert_eq!(minimizer[1].minify, Some(MinifyOptions::no_mangle()));
  assert!(minimizer[1].include.is_none());
  assert!(minimizer[1].exclude.is_none());
}

#[test]
fn test_caller_minify_options_pass_through_verbatim() {
  let custom = MinimizerOptions {
    test: Some(Regex::new(r"vendor\.js$").unwrap()),
    include: None,
    exclude: None,
    minify: Some(MinifyOptions {
      mangle: Some(false),
      compress: Some(false),
      keep_fnames: Some(true),
    }),
  };
  let plugin = UnmangleChunkPlugin::new(
    ChunkSpec {
      name: Some(ArcStr::from("vendor")),
      modules_regex: Regex::new("node_modules").unwrap(),
      minify_options: Some(custom.clone()),
    },
    None,
  );

  let options = configure(&plugin);
  let minimizer = options.optimization.unwrap().minimizer.unwrap();
  assert_eq!(minimizer[1], custom);
}

#[test]
fn test_chunk_names_with_regex_metacharacters_are_escaped() {
  let plugin = UnmangleChunkPlugin::new(
    ChunkSpec {
      name: Some(ArcStr::from("vendor.v2")),
      modules_regex: Regex::new("node_modules").unwrap(),
      minify_options: None,
    },
    None,
  );

  let options = configure(&plugin);
  let minimizer = options.optimization.unwrap().minimizer.unwrap();
  let (exclude_chunk, chunk_only) = (&minimizer[0], &minimizer[1]);

  assert!(chunk_only.matches("vendor.v2.js"));
  // The dot must not act as a wildcard.
  assert!(!chunk_only.matches("vendor-v2.js"));
  assert!(exclude_chunk.matches("vendor-v2.js"));
}
