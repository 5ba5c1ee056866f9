#[derive(Debug, Default, Clone)]
pub struct InputItem {
  pub name: Option<String>,
  pub import: String,
}

impl From<&str> for InputItem {
  fn from(value: &str) -> Self {
    Self { name: None, import: value.to_string() }
  }
}

impl From<String> for InputItem {
  fn from(value: String) -> Self {
    Self { name: None, import: value }
  }
}
