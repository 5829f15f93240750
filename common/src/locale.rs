use std::str::FromStr;

use crate::error::InputError;

/// Display language of a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl FromStr for Locale {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Locale::En),
            "zh" | "zh-cn" | "cn" | "chinese" => Ok(Locale::Zh),
            other => Err(InputError::UnknownLocale(other.to_string())),
        }
    }
}
