use arcstr::ArcStr;
use regex::Regex;
use unmangle::{
  CacheGroup, ChunkScope, ChunkSpec, Compiler, CompilerHooks, CompilerOptions, CompilerPlugin,
  FxIndexMap, MinimizerOptions, Optimization, SplitChunksOptions, UnmangleChunkPlugin,
};

fn vendor_chunk() -> ChunkSpec {
  ChunkSpec {
    name: Some(ArcStr::from("vendor")),
    modules_regex: Regex::new("node_modules").unwrap(),
    minify_options: None,
  }
}

#[test]
fn test_compiler_startup_isolates_the_chunk() {
  let compiler = Compiler::new(
    CompilerOptions::default(),
    vec![UnmangleChunkPlugin::new_boxed(vendor_chunk(), None)],
  )
  .unwrap();

  let options = &compiler.options;
  assert_eq!(
    options.cache_groups["vendor"],
    CacheGroup {
      test: Some(Regex::new("node_modules").unwrap()),
      name: Some(ArcStr::from("vendor")),
      chunks: Some(ChunkScope::All),
    }
  );
  assert_eq!(options.minimizer.len(), 2);

  // Exactly one minifier handles each emitted script, and only the chunk's
  // own file gets the no-mangle configuration.
  assert_eq!(options.minimizers_for("vendor.js").count(), 1);
  assert_eq!(options.minimizers_for("main.js").count(), 1);
  assert!(options.minimizers_for("vendor.js").next().unwrap().minify.is_some());
  assert!(options.minimizers_for("main.js").next().unwrap().minify.is_none());
}

#[test]
fn test_registration_preserves_unrelated_configuration() {
  let mut cache_groups = FxIndexMap::default();
  cache_groups.insert(
    ArcStr::from("framework"),
    CacheGroup {
      test: Some(Regex::new("react").unwrap()),
      name: Some(ArcStr::from("framework")),
      chunks: Some(ChunkScope::Initial),
    },
  );
  let options = CompilerOptions {
    dir: Some("build".to_string()),
    optimization: Some(Optimization {
      minimize: Some(true),
      split_chunks: Some(SplitChunksOptions {
        chunks: Some(ChunkScope::Initial),
        cache_groups: Some(cache_groups),
      }),
      minimizer: Some(vec![MinimizerOptions::default()]),
    }),
    ..Default::default()
  };

  let compiler =
    Compiler::new(options, vec![UnmangleChunkPlugin::new_boxed(vendor_chunk(), None)]).unwrap();

  let normalized = &compiler.options;
  assert_eq!(normalized.dir, "build");
  assert!(normalized.minimize);
  assert_eq!(normalized.chunk_scope, ChunkScope::Initial);

  // The unrelated group survives and keeps its position; the new group
  // appends after it.
  assert_eq!(normalized.cache_groups.len(), 2);
  assert_eq!(normalized.cache_groups.get_index(0).unwrap().0.as_str(), "framework");
  assert_eq!(normalized.cache_groups["framework"].name, Some(ArcStr::from("framework")));

  // The pre-existing minimizer list is replaced outright.
  assert_eq!(normalized.minimizer.len(), 2);
  assert_eq!(normalized.minimizer[0].exclude.as_ref().unwrap().as_str(), "vendor");
}

#[test]
fn test_plugin_taps_environment_exactly_once() {
  let plugin = UnmangleChunkPlugin::new(vendor_chunk(), None);
  assert_eq!(plugin.name(), "unmangle-chunk");

  let mut hooks = CompilerHooks::default();
  plugin.apply(&mut hooks).unwrap();
  assert_eq!(hooks.environment.len(), 1);
  assert_eq!(hooks.environment.tap_names().collect::<Vec<_>>(), ["unmangle-chunk"]);
}

#[test]
fn test_chained_registrations_are_independent() {
  let compiler = Compiler::new(
    CompilerOptions::default(),
    vec![
      UnmangleChunkPlugin::new_boxed(vendor_chunk(), None),
      UnmangleChunkPlugin::new_boxed(
        ChunkSpec {
          name: Some(ArcStr::from("runtime")),
          modules_regex: Regex::new("src/runtime").unwrap(),
          minify_options: None,
        },
        Some(vec![MinimizerOptions {
          test: Some(Regex::new(r"\.css$").unwrap()),
          ..Default::default()
        }]),
      ),
    ],
  )
  .unwrap();

  // Both groups landed, in registration order.
  let cache_groups = &compiler.options.cache_groups;
  assert_eq!(cache_groups.len(), 2);
  assert_eq!(cache_groups.get_index(0).unwrap().0.as_str(), "vendor");
  assert_eq!(cache_groups.get_index(1).unwrap().0.as_str(), "runtime");

  // The minimizer replacement of the last registration wins.
  let minimizer = &compiler.options.minimizer;
  assert_eq!(minimizer.len(), 3);
  assert_eq!(minimizer[0].exclude.as_ref().unwrap().as_str(), "runtime");
  assert_eq!(minimizer[2].test.as_ref().unwrap().as_str(), r"\.css$");
}

#[test]
fn test_failing_plugin_registration_surfaces_all_errors() {
  #[derive(Debug)]
  struct Broken;

  impl CompilerPlugin for Broken {
    fn name(&self) -> unmangle::PluginName<'_> {
      std::borrow::Cow::Borrowed("broken")
    }

    fn apply(&self, _hooks: &mut CompilerHooks) -> unmangle_error::BuildResult<()> {
      Err(anyhow::anyhow!("refused to register").into())
    }
  }

  let errors =
    Compiler::new(CompilerOptions::default(), vec![Box::new(Broken), Box::new(Broken)])
      .unwrap_err();
  assert_eq!(errors.len(), 2);
}
