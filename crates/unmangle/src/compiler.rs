use unmangle_common::{CompilerOptions, NormalizedCompilerOptions};
use unmangle_error::BuildResult;
use unmangle_plugin::{BoxPlugin, CompilerHooks, PluginDriver};

use crate::utils::normalize_options::normalize_options;

/// Host shim owning the startup phase: plugin registration, the
/// `environment` extension point, and option normalization. The bundling
/// pipeline that would consume the normalized options lives in the host.
#[derive(Debug)]
pub struct Compiler {
  pub options: NormalizedCompilerOptions,
  pub hooks: CompilerHooks,
}

impl Compiler {
  /// Apply every plugin, fire `environment` exactly once with the mutable
  /// configuration, then normalize whatever the plugins left behind.
  pub fn new(mut options: CompilerOptions, plugins: Vec<BoxPlugin>) -> BuildResult<Compiler> {
    let mut hooks = CompilerHooks::default();
    PluginDriver::new(plugins).apply(&mut hooks)?;

    hooks.environment.call(&mut options)?;

    Ok(Compiler { options: normalize_options(options), hooks })
  }
}

#[test]
fn test_startup_fires_environment_once() {
  use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
  };

  use unmangle_plugin::{CompilerPlugin, PluginName};

  #[derive(Debug)]
  struct Counting(Arc<AtomicUsize>);

  impl CompilerPlugin for Counting {
    fn name(&self) -> PluginName<'_> {
      std::borrow::Cow::Borrowed("counting")
    }

    fn apply(&self, hooks: &mut CompilerHooks) -> BuildResult<()> {
      let calls = Arc::clone(&self.0);
      hooks.environment.tap(self.name(), move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
      });
      Ok(())
    }
  }

  let calls = Arc::new(AtomicUsize::new(0));
  let compiler =
    Compiler::new(CompilerOptions::default(), vec![Box::new(Counting(Arc::clone(&calls)))])
      .unwrap();
  assert_eq!(calls.load(Ordering::SeqCst), 1);
  assert_eq!(compiler.hooks.environment.len(), 1);
}
