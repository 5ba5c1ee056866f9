use std::{borrow::Cow, fmt::Debug};

use unmangle_error::BuildResult;

use crate::CompilerHooks;

pub type PluginName<'a> = Cow<'a, str>;

/// A compiler extension.
///
/// `apply` runs once per plugin during compiler startup and is the plugin's
/// only chance to tap hooks. Configuration work belongs in the tapped
/// callbacks, not in `apply` itself.
pub trait CompilerPlugin: Debug + Send + Sync {
  fn name(&self) -> PluginName<'_>;

  fn apply(&self, hooks: &mut CompilerHooks) -> BuildResult<()>;
}

pub type BoxPlugin = Box<dyn CompilerPlugin>;
