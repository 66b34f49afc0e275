//! # Filter Model
//!
//! Equality filters over emission records, combined with AND logic.
//!
//! Each filterable field is an enum variant carrying a typed value, so a
//! clause can only be built for a real field with a value of the right type.
//! Unknown field names and mistyped values are rejected at parse time.

use thiserror::Error;

use crate::domain::Emission;

/// Errors from building filter clauses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Field name is not in the filterable set
    #[error("unknown filter field: {0}")]
    UnknownField(String),

    /// Value cannot be parsed as the field's type
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// The enumerated set of filterable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Country,
    Activity,
    EmissionType,
    Year,
}

impl FilterField {
    /// Field name as it appears in queries and serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Country => "country",
            FilterField::Activity => "activity",
            FilterField::EmissionType => "emission_type",
            FilterField::Year => "year",
        }
    }

    /// Look up a field by name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "country" => Some(FilterField::Country),
            "activity" => Some(FilterField::Activity),
            "emission_type" => Some(FilterField::EmissionType),
            "year" => Some(FilterField::Year),
            _ => None,
        }
    }
}

/// A single typed equality comparison
#[derive(Debug, Clone, PartialEq)]
pub enum FilterClause {
    /// Case-sensitive match on `country`
    Country(String),
    /// Case-sensitive match on `activity`
    Activity(String),
    /// Case-sensitive match on `emission_type`
    EmissionType(String),
    /// Numeric match on `year`
    Year(i32),
}

impl FilterClause {
    /// Build a clause from a raw field name and value.
    ///
    /// Rejects field names outside the enumerated set and year values that
    /// are not integers.
    pub fn parse(field: &str, value: &str) -> Result<Self, FilterError> {
        let field = FilterField::parse(field)
            .ok_or_else(|| FilterError::UnknownField(field.to_string()))?;

        match field {
            FilterField::Country => Ok(FilterClause::Country(value.to_string())),
            FilterField::Activity => Ok(FilterClause::Activity(value.to_string())),
            FilterField::EmissionType => Ok(FilterClause::EmissionType(value.to_string())),
            FilterField::Year => {
                let year = value.parse::<i32>().map_err(|_| FilterError::InvalidValue {
                    field: FilterField::Year.as_str(),
                    value: value.to_string(),
                })?;
                Ok(FilterClause::Year(year))
            }
        }
    }

    /// The field this clause compares against
    pub fn field(&self) -> FilterField {
        match self {
            FilterClause::Country(_) => FilterField::Country,
            FilterClause::Activity(_) => FilterField::Activity,
            FilterClause::EmissionType(_) => FilterField::EmissionType,
            FilterClause::Year(_) => FilterField::Year,
        }
    }

    /// Check whether a record satisfies this clause
    pub fn matches(&self, record: &Emission) -> bool {
        match self {
            FilterClause::Country(v) => record.country == *v,
            FilterClause::Activity(v) => record.activity == *v,
            FilterClause::EmissionType(v) => record.emission_type == *v,
            FilterClause::Year(v) => record.year == *v,
        }
    }
}

/// A set of clauses combined with AND logic.
///
/// An empty set matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    clauses: Vec<FilterClause>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause, keeping conjunctive semantics
    pub fn and(mut self, clause: FilterClause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Check whether a record satisfies all clauses
    pub fn matches(&self, record: &Emission) -> bool {
        self.clauses.iter().all(|c| c.matches(record))
    }

    /// Build a set from (field, value) pairs, rejecting unknown fields.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut set = FilterSet::new();
        for (field, value) in pairs {
            set = set.and(FilterClause::parse(field, value)?);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, emission_type: &str) -> Emission {
        Emission {
            id: 1,
            year: 2021,
            emissions: 130.0,
            emission_type: emission_type.to_string(),
            country: country.to_string(),
            activity: "Transport".to_string(),
        }
    }

    #[test]
    fn test_country_clause() {
        let clause = FilterClause::Country("USA".to_string());

        assert!(clause.matches(&record("USA", "CO2")));
        assert!(!clause.matches(&record("Canada", "CO2")));
    }

    #[test]
    fn test_string_equality_is_case_sensitive() {
        let clause = FilterClause::Country("usa".to_string());
        assert!(!clause.matches(&record("USA", "CO2")));
    }

    #[test]
    fn test_year_clause() {
        let clause = FilterClause::parse("year", "2021").unwrap();
        assert_eq!(clause, FilterClause::Year(2021));
        assert!(clause.matches(&record("USA", "CO2")));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let err = FilterClause::parse("continent", "Europe").unwrap_err();
        assert_eq!(err, FilterError::UnknownField("continent".to_string()));
    }

    #[test]
    fn test_parse_rejects_non_integer_year() {
        let err = FilterClause::parse("year", "twenty").unwrap_err();
        assert!(matches!(err, FilterError::InvalidValue { field: "year", .. }));
    }

    #[test]
    fn test_empty_set_matches_everything() {
        let set = FilterSet::new();
        assert!(set.matches(&record("Mexico", "N2O")));
    }

    #[test]
    fn test_set_is_conjunctive() {
        let set = FilterSet::new()
            .and(FilterClause::Country("USA".to_string()))
            .and(FilterClause::EmissionType("CO2".to_string()));

        assert!(set.matches(&record("USA", "CO2")));
        assert!(!set.matches(&record("USA", "CH4")));
        assert!(!set.matches(&record("Canada", "CO2")));
    }

    #[test]
    fn test_from_pairs() {
        let set = FilterSet::from_pairs([("country", "USA"), ("year", "2021")]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.matches(&record("USA", "CO2")));

        let err = FilterSet::from_pairs([("country", "USA"), ("bogus", "x")]).unwrap_err();
        assert_eq!(err, FilterError::UnknownField("bogus".to_string()));
    }
}
