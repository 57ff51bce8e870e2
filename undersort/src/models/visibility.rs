// src/models/visibility.rs
use serde::Deserialize;
use std::fmt;

/// Visibility of a method, derived from its leading underscores.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub const ALL: [Self; 3] = [Self::Public, Self::Protected, Self::Private];

    /// Classifies a method by name. Dunder methods such as `__init__` count as
    /// public; `__name` is private and `_name` is protected.
    #[inline]
    #[must_use]
    pub fn of_method_name(name: &str) -> Self {
        if name.len() > 4 && name.starts_with("__") && name.ends_with("__") {
            Self::Public
        } else if name.starts_with("__") {
            Self::Private
        } else if name.starts_with('_') {
            Self::Protected
        } else {
            Self::Public
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        };
        f.write_str(name)
    }
}
