#![allow(clippy::print_stdout)]

use arcstr::ArcStr;
use regex::Regex;
use unmangle::{ChunkSpec, Compiler, CompilerOptions, UnmangleChunkPlugin};

fn main() {
  let chunk = ChunkSpec {
    name: Some(ArcStr::from("vendor")),
    modules_regex: Regex::new("node_modules").unwrap(),
    minify_options: None,
  };

  let compiler = Compiler::new(
    CompilerOptions { entry: Some(vec!["./src/index.js".into()]), ..Default::default() },
    vec![UnmangleChunkPlugin::new_boxed(chunk, None)],
  )
  .expect("Failed to configure the build");

  println!("{:#?}", compiler.options);
}
