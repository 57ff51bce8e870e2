// src/models/method_type.rs
use serde::Deserialize;
use std::fmt;

/// Kind of method, taken from its decorators.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MethodType {
    Instance,
    Class,
    Static,
}

impl MethodType {
    pub const ALL: [Self; 3] = [Self::Instance, Self::Class, Self::Static];

    /// Maps a decorator name (without the `@` and any call arguments) to the
    /// method type it implies, if any.
    #[inline]
    #[must_use]
    pub fn from_decorator(name: &str) -> Option<Self> {
        match name {
            "staticmethod" => Some(Self::Static),
            "classmethod" => Some(Self::Class),
            _ => None,
        }
    }
}

impl fmt::Display for MethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Instance => "instance",
            Self::Class => "class",
            Self::Static => "static",
        };
        f.write_str(name)
    }
}
