use thiserror::Error;

use crate::catalog::{Category, Condition, DEFAULT_AGE_YEARS, MAX_AGE_YEARS, MIN_AGE_YEARS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("age must be between 1 and 10 years, got {0}")]
    AgeOutOfRange(u8),

    #[error("unknown category {0:?}")]
    UnknownCategory(String),

    #[error("unknown condition {0:?}")]
    UnknownCondition(String),
}

/// The user's current search selections. `None` for category or condition
/// means the field is unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    max_age_years: u8,
    category: Option<Category>,
    condition: Option<Condition>,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            query: String::new(),
            max_age_years: DEFAULT_AGE_YEARS,
            category: None,
            condition: None,
        }
    }
}

impl FilterState {
    pub fn new(
        query: impl Into<String>,
        max_age_years: u8,
        category: Option<Category>,
        condition: Option<Condition>,
    ) -> Result<Self, FilterError> {
        Ok(FilterState {
            query: query.into(),
            max_age_years: check_age(max_age_years)?,
            category,
            condition,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn max_age_years(&self) -> u8 {
        self.max_age_years
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn condition(&self) -> Option<Condition> {
        self.condition
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Rejects ages outside the slider range and leaves the old value in place.
    pub fn set_max_age(&mut self, years: u8) -> Result<(), FilterError> {
        self.max_age_years = check_age(years)?;
        Ok(())
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    pub fn set_condition(&mut self, condition: Option<Condition>) {
        self.condition = condition;
    }

    pub fn category_param(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("")
    }

    pub fn condition_param(&self) -> &'static str {
        self.condition.map(|c| c.as_str()).unwrap_or("")
    }
}

fn check_age(years: u8) -> Result<u8, FilterError> {
    if (MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&years) {
        Ok(years)
    } else {
        Err(FilterError::AgeOutOfRange(years))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = FilterState::default();
        assert_eq!(filter.query(), "");
        assert_eq!(filter.max_age_years(), 6);
        assert_eq!(filter.category_param(), "");
        assert_eq!(filter.condition_param(), "");
    }

    #[test]
    fn test_age_bounds() {
        assert!(FilterState::new("", 1, None, None).is_ok());
        assert!(FilterState::new("", 10, None, None).is_ok());
        assert_eq!(
            FilterState::new("", 0, None, None),
            Err(FilterError::AgeOutOfRange(0))
        );
        assert_eq!(
            FilterState::new("", 11, None, None),
            Err(FilterError::AgeOutOfRange(11))
        );
    }

    #[test]
    fn test_rejected_age_keeps_previous_value() {
        let mut filter = FilterState::default();
        filter.set_max_age(3).unwrap();
        assert!(filter.set_max_age(42).is_err());
        assert_eq!(filter.max_age_years(), 3);
    }

    #[test]
    fn test_params_use_display_names() {
        let filter =
            FilterState::new("sofa", 2, Some(Category::Living), Some(Condition::LikeNew)).unwrap();
        assert_eq!(filter.category_param(), "Living");
        assert_eq!(filter.condition_param(), "Like New");
    }
}
