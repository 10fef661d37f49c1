use serde::Serialize;

use crate::filter::FilterState;

/// Query string of `GET /api/search`. Every field is always sent; an
/// unconstrained category or condition goes out as an empty value.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SearchParams<'a> {
    pub name: &'a str,
    pub age_years: u8,
    pub category: &'a str,
    pub condition: &'a str,
}

impl<'a> From<&'a FilterState> for SearchParams<'a> {
    fn from(filter: &'a FilterState) -> Self {
        SearchParams {
            name: filter.query(),
            age_years: filter.max_age_years(),
            category: filter.category_param(),
            condition: filter.condition_param(),
        }
    }
}
