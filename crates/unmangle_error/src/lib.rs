use std::ops::{Deref, DerefMut};

/// Aggregate of the errors produced while configuring a build.
///
/// Plugin registration applies every plugin before failing, so a single
/// `BuildError` may carry one error per misbehaving plugin. Hook callbacks
/// that fail contribute a single entry.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_error_aggregation() {
  let single = BuildError::from(anyhow::anyhow!("plugin refused to register"));
  assert_eq!(single.len(), 1);

  let multiple: BuildError =
    vec![anyhow::anyhow!("first plugin failed"), anyhow::anyhow!("second plugin failed")].into();
  assert_eq!(multiple.len(), 2);
  assert!(multiple[0].to_string().contains("first"));
}
