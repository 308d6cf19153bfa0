//! Shared machinery for dynamically-assembled list queries.
//!
//! Filter values are always bound as parameters; the only text that reaches
//! a statement dynamically is column names supplied as `&'static str` by
//! repository code and sort identifiers drawn from per-entity enums. Caller
//! input never becomes SQL text.

use serde::Deserialize;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword interpolated into ORDER BY.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = depot_core::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(depot_core::error::CoreError::Validation(format!(
                "Unrecognized sort order: {other}"
            ))),
        }
    }
}

/// Typed bind value for dynamically-built WHERE clauses.
#[derive(Debug, Clone)]
pub enum BindValue {
    BigInt(i64),
    Text(String),
    Bool(bool),
}

/// Accumulates conjunctive filter conditions plus their bind values.
///
/// Rendering starts from the unconditionally-true base predicate so callers
/// can append zero or more conditions without tracking whether a `WHERE`
/// keyword was already emitted. Bind order matches condition order, ahead of
/// any limit/offset binds the caller appends afterwards.
#[derive(Debug, Default)]
pub struct Filter {
    conditions: Vec<String>,
    binds: Vec<BindValue>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `column = ?` equality on an integer column.
    pub fn eq_bigint(&mut self, column: &'static str, value: i64) {
        self.conditions.push(format!("{column} = ?"));
        self.binds.push(BindValue::BigInt(value));
    }

    /// Append `column = ?` equality on a boolean column.
    pub fn eq_bool(&mut self, column: &'static str, value: bool) {
        self.conditions.push(format!("{column} = ?"));
        self.binds.push(BindValue::Bool(value));
    }

    /// Append `column LIKE ?` substring match; the value is wrapped in `%`.
    pub fn like(&mut self, column: &'static str, value: &str) {
        self.conditions.push(format!("{column} LIKE ?"));
        self.binds.push(BindValue::Text(format!("%{value}%")));
    }

    /// Render the full WHERE clause, always valid SQL.
    pub fn where_clause(&self) -> String {
        let mut clause = String::from("WHERE 1=1");
        for cond in &self.conditions {
            clause.push_str(" AND ");
            clause.push_str(cond);
        }
        clause
    }

    /// Bind values in condition order.
    pub fn binds(&self) -> &[BindValue] {
        &self.binds
    }
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
pub fn bind_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::MySql, O, sqlx::mysql::MySqlArguments>,
    binds: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::MySql, O, sqlx::mysql::MySqlArguments> {
    for val in binds {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Bool(v) => q = q.bind(*v),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
pub fn bind_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::MySql, i64, sqlx::mysql::MySqlArguments>,
    binds: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::MySql, i64, sqlx::mysql::MySqlArguments> {
    for val in binds {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Bool(v) => q = q.bind(*v),
        }
    }
    q
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    // -- Filter --------------------------------------------------------------

    #[test]
    fn empty_filter_renders_base_predicate() {
        let filter = Filter::new();
        assert_eq!(filter.where_clause(), "WHERE 1=1");
        assert!(filter.binds().is_empty());
    }

    #[test]
    fn conditions_are_conjunctive_in_push_order() {
        let mut filter = Filter::new();
        filter.eq_bigint("owning_user_id", 7);
        filter.like("project_name", "demo");
        assert_eq!(
            filter.where_clause(),
            "WHERE 1=1 AND owning_user_id = ? AND project_name LIKE ?"
        );
        assert_eq!(filter.binds().len(), 2);
    }

    #[test]
    fn like_wraps_value_in_wildcards() {
        let mut filter = Filter::new();
        filter.like("file_name", "report");
        match &filter.binds()[0] {
            BindValue::Text(v) => assert_eq!(v, "%report%"),
            other => panic!("expected Text bind, got {other:?}"),
        }
    }

    #[test]
    fn bool_condition_binds_as_bool() {
        let mut filter = Filter::new();
        filter.eq_bool("is_directory", true);
        assert_eq!(filter.where_clause(), "WHERE 1=1 AND is_directory = ?");
        assert!(matches!(filter.binds()[0], BindValue::Bool(true)));
    }

    // -- SortOrder -----------------------------------------------------------

    #[test]
    fn sort_order_parses_allow_listed_values() {
        assert_eq!(SortOrder::from_str("asc").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::from_str("desc").unwrap(), SortOrder::Desc);
    }

    #[test]
    fn sort_order_rejects_unknown_values() {
        assert!(SortOrder::from_str("ASC; DROP TABLE projects").is_err());
        assert!(SortOrder::from_str("descending").is_err());
    }

    #[test]
    fn sort_order_sql_keywords() {
        assert_eq!(SortOrder::Asc.as_sql(), "ASC");
        assert_eq!(SortOrder::Desc.as_sql(), "DESC");
    }
}
