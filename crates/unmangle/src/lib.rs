mod compiler;
mod unmangle_chunk;
mod utils;

pub use crate::{compiler::Compiler, unmangle_chunk::UnmangleChunkPlugin};
pub use unmangle_common::*;
pub use unmangle_plugin::{BoxPlugin, CompilerHooks, CompilerPlugin, EnvironmentHook, PluginName};
