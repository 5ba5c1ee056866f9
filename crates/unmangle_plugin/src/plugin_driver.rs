use itertools::Itertools;
use unmangle_error::BuildResult;

use crate::{BoxPlugin, CompilerHooks};

/// Applies registered plugins to the compiler's hooks, in registration
/// order.
#[derive(Debug, Default)]
pub struct PluginDriver {
  pub plugins: Vec<BoxPlugin>,
}

impl PluginDriver {
  pub fn new(plugins: Vec<BoxPlugin>) -> Self {
    Self { plugins }
  }

  /// Run every plugin's registration. Failures are collected across all
  /// plugins before failing, so one broken plugin does not hide another.
  pub fn apply(&self, hooks: &mut CompilerHooks) -> BuildResult<()> {
    tracing::debug!(
      "applying {} plugin(s): {}",
      self.plugins.len(),
      self.plugins.iter().map(|plugin| plugin.name()).join(", ")
    );

    let mut errors = vec![];
    for plugin in &self.plugins {
      if let Err(e) = plugin.apply(hooks) {
        errors.extend(e.0);
      }
    }
    if !errors.is_empty() {
      Err(errors)?;
    }
    Ok(())
  }
}

#[cfg(test)]
#[derive(Debug)]
struct NamedTap(&'static str);

#[cfg(test)]
impl crate::CompilerPlugin for NamedTap {
  fn name(&self) -> crate::PluginName<'_> {
    std::borrow::Cow::Borrowed(self.0)
  }

  fn apply(&self, hooks: &mut CompilerHooks) -> BuildResult<()> {
    let name = self.0;
    hooks.environment.tap(name, |_| Ok(()));
    Ok(())
  }
}

#[cfg(test)]
#[derive(Debug)]
struct Broken(&'static str);

#[cfg(test)]
impl crate::CompilerPlugin for Broken {
  fn name(&self) -> crate::PluginName<'_> {
    std::borrow::Cow::Borrowed(self.0)
  }

  fn apply(&self, _hooks: &mut CompilerHooks) -> BuildResult<()> {
    Err(anyhow::anyhow!("`{}` refused to register", self.0).into())
  }
}

#[test]
fn test_apply_registers_plugins_in_order() {
  let driver = PluginDriver::new(vec![Box::new(NamedTap("alpha")), Box::new(NamedTap("beta"))]);
  let mut hooks = CompilerHooks::default();
  driver.apply(&mut hooks).unwrap();
  assert_eq!(hooks.environment.tap_names().collect::<Vec<_>>(), ["alpha", "beta"]);
}

#[test]
fn test_apply_collects_errors_across_plugins() {
  let driver = PluginDriver::new(vec![
    Box::new(Broken("alpha")),
    Box::new(NamedTap("beta")),
    Box::new(Broken("gamma")),
  ]);
  let mut hooks = CompilerHooks::default();
  let errors = driver.apply(&mut hooks).unwrap_err();
  assert_eq!(errors.len(), 2);
  // The plugin between the two broken ones still registered.
  assert_eq!(hooks.environment.len(), 1);
}
