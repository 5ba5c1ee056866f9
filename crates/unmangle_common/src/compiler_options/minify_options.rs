/// Options forwarded verbatim to the minifier.
///
/// This crate never interprets them. `None` leaves the corresponding knob at
/// the minifier's own default; in particular the minifier mangles unless
/// `mangle` is explicitly `Some(false)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinifyOptions {
  /// Identifier renaming.
  pub mangle: Option<bool>,
  /// Dead-code removal and expression rewriting.
  pub compress: Option<bool>,
  /// Preserve function names even when mangling.
  pub keep_fnames: Option<bool>,
}

impl MinifyOptions {
  /// Minification with identifier renaming switched off and every other knob
  /// left at the minifier's default.
  pub fn no_mangle() -> Self {
    Self { mangle: Some(false), ..Self::default() }
  }
}

#[test]
fn test_no_mangle_only_touches_mangling() {
  let options = MinifyOptions::no_mangle();
  assert_eq!(options.mangle, Some(false));
  assert_eq!(options.compress, None);
  assert_eq!(options.keep_fnames, None);
}
