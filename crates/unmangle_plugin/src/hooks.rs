use std::fmt;

use unmangle_common::CompilerOptions;
use unmangle_error::BuildResult;

type EnvironmentCallback = Box<dyn Fn(&mut CompilerOptions) -> BuildResult<()> + Send + Sync>;

struct EnvironmentTap {
  name: String,
  callback: EnvironmentCallback,
}

/// The `environment` lifecycle hook.
///
/// Fired once per build during compiler startup, before any build work,
/// handing every tapped callback the mutable build configuration.
#[derive(Default)]
pub struct EnvironmentHook {
  taps: Vec<EnvironmentTap>,
}

impl EnvironmentHook {
  /// Register a callback. Callbacks fire in registration order.
  pub fn tap(
    &mut self,
    name: impl Into<String>,
    callback: impl Fn(&mut CompilerOptions) -> BuildResult<()> + Send + Sync + 'static,
  ) {
    self.taps.push(EnvironmentTap { name: name.into(), callback: Box::new(callback) });
  }

  /// Fire every tap once, in registration order. The first failing tap
  /// aborts the remaining ones.
  pub fn call(&self, options: &mut CompilerOptions) -> BuildResult<()> {
    for tap in &self.taps {
      tracing::trace!("firing environment tap `{}`", tap.name);
      (tap.callback)(options)?;
    }
    Ok(())
  }

  pub fn is_tapped(&self) -> bool {
    !self.taps.is_empty()
  }

  pub fn len(&self) -> usize {
    self.taps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.taps.is_empty()
  }

  pub fn tap_names(&self) -> impl Iterator<Item = &str> {
    self.taps.iter().map(|tap| tap.name.as_str())
  }
}

// Callbacks are opaque, so Debug only shows who tapped.
impl fmt::Debug for EnvironmentHook {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("EnvironmentHook").field("taps", &self.tap_names().collect::<Vec<_>>()).finish()
  }
}

/// The host's named lifecycle hooks. Only hooks this repository consumes are
/// modeled.
#[derive(Debug, Default)]
pub struct CompilerHooks {
  pub environment: EnvironmentHook,
}

#[test]
fn test_taps_fire_in_registration_order() {
  use std::sync::{Arc, Mutex};

  let fired = Arc::new(Mutex::new(Vec::new()));
  let mut hook = EnvironmentHook::default();
  for name in ["first", "second", "third"] {
    let fired = Arc::clone(&fired);
    hook.tap(name, move |_| {
      fired.lock().unwrap().push(name);
      Ok(())
    });
  }

  assert!(hook.is_tapped());
  assert_eq!(hook.len(), 3);

  hook.call(&mut CompilerOptions::default()).unwrap();
  assert_eq!(*fired.lock().unwrap(), ["first", "second", "third"]);
}

#[test]
fn test_failing_tap_aborts_remaining_taps() {
  use std::sync::{Arc, Mutex};

  let reached = Arc::new(Mutex::new(false));
  let mut hook = EnvironmentHook::default();
  hook.tap("ok", |_| Ok(()));
  hook.tap("boom", |_| Err(anyhow::anyhow!("boom").into()));
  {
    let reached = Arc::clone(&reached);
    hook.tap("never", move |_| {
      *reached.lock().unwrap() = true;
      Ok(())
    });
  }

  let errors = hook.call(&mut CompilerOptions::default()).unwrap_err();
  assert_eq!(errors.len(), 1);
  assert!(!*reached.lock().unwrap());
}

#[test]
fn test_untapped_hook_reports_empty() {
  let hook = EnvironmentHook::default();
  assert!(!hook.is_tapped());
  assert!(hook.is_empty());
  assert_eq!(hook.tap_names().count(), 0);
}
