//! Closed sets of filter choices shared by the search page and the CLI.

use std::fmt;
use std::str::FromStr;

use crate::filter::FilterError;

pub const MIN_AGE_YEARS: u8 = 1;
pub const MAX_AGE_YEARS: u8 = 10;
/// Age the search page starts with before the user touches the slider.
pub const DEFAULT_AGE_YEARS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Living,
    Bedroom,
    Bathroom,
    Kitchen,
    Office,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Living,
        Category::Bedroom,
        Category::Bathroom,
        Category::Kitchen,
        Category::Office,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Living => "Living",
            Category::Bedroom => "Bedroom",
            Category::Bathroom => "Bathroom",
            Category::Kitchen => "Kitchen",
            Category::Office => "Office",
        }
    }
}

impl FromStr for Category {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FilterError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    New,
    LikeNew,
    Older,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::New, Condition::LikeNew, Condition::Older];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Older => "Older",
        }
    }
}

impl FromStr for Condition {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FilterError::UnknownCondition(s.to_string()))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a select-box value where the empty string stands for "any".
pub fn parse_choice<T>(value: &str) -> Result<Option<T>, T::Err>
where
    T: FromStr,
{
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some)
}
