mod hooks;
mod plugin;
mod plugin_driver;

pub use crate::{
  hooks::{CompilerHooks, EnvironmentHook},
  plugin::{BoxPlugin, CompilerPlugin, PluginName},
  plugin_driver::PluginDriver,
};
