use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

use crate::error::IconError;

/// One of the four visual variants of the icon set.
///
/// Declaration order is the enumeration order used whenever no style filter
/// is given, and it doubles as the tie-break priority when ranking matches.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Outline,
    Solid,
    Mini,
    Micro,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Outline, Style::Solid, Style::Mini, Style::Micro];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Outline => "outline",
            Style::Solid => "solid",
            Style::Mini => "mini",
            Style::Micro => "micro",
        }
    }

    /// Sub-collection directory, relative to the asset root.
    pub fn subdir(&self) -> &'static str {
        match self {
            Style::Outline => "24/outline",
            Style::Solid => "24/solid",
            Style::Mini => "20/solid",
            Style::Micro => "16/solid",
        }
    }

    /// Size class appended to the root `<svg>` when the source carries none.
    pub fn default_class(&self) -> &'static str {
        match self {
            Style::Outline | Style::Solid => "size-6",
            Style::Mini => "size-5",
            Style::Micro => "size-4",
        }
    }

    pub fn priority(&self) -> u8 {
        match self {
            Style::Outline => 0,
            Style::Solid => 1,
            Style::Mini => 2,
            Style::Micro => 3,
        }
    }

    /// Styles covered by an optional filter: the single style, or all of them.
    pub fn scope(filter: Option<Style>) -> Vec<Style> {
        match filter {
            Some(style) => vec![style],
            None => Self::ALL.to_vec(),
        }
    }

    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(Style::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Style {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| IconError::InvalidStyle(s.to_string()))
    }
}

/// Goes through [`FromStr`] so clients see the `InvalidStyle` message rather
/// than serde's unknown-variant text.
impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
