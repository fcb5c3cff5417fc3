use std::fmt;

use serde::Serialize;

/// Raspberry Pi boards a binary can be cross-compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
  Pi3,
  Pi4,
}

impl Target {
  /// Every target, in menu order
  pub const ALL: [Target; 2] = [Target::Pi3, Target::Pi4];

  /// Parse a menu token. Only the exact tokens `1` and `2` are accepted.
  pub fn from_choice(token: &str) -> Option<Self> {
    match token {
      "1" => Some(Self::Pi3),
      "2" => Some(Self::Pi4),
      _ => None,
    }
  }

  /// The menu token that selects this target
  pub fn choice(&self) -> &'static str {
    match self {
      Self::Pi3 => "1",
      Self::Pi4 => "2",
    }
  }

  /// Human readable board name
  pub fn label(&self) -> &'static str {
    match self {
      Self::Pi3 => "Raspberry Pi 3",
      Self::Pi4 => "Raspberry Pi 4",
    }
  }

  /// Architecture name shown to the operator
  pub fn arch_label(&self) -> &'static str {
    match self {
      Self::Pi3 => "arm64",
      Self::Pi4 => "armv7",
    }
  }

  /// Value for `GOARCH`
  pub fn goarch(&self) -> &'static str {
    match self {
      Self::Pi3 => "arm64",
      Self::Pi4 => "arm",
    }
  }

  /// Value for `GOARM`, only meaningful for 32-bit ARM
  pub fn goarm(&self) -> Option<&'static str> {
    match self {
      Self::Pi3 => None,
      Self::Pi4 => Some("7"),
    }
  }

  /// Returns the lowercase string identifier for this target
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Pi3 => "pi3",
      Self::Pi4 => "pi4",
    }
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
