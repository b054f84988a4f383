//! # Search Condition & Predicate Builder
//!
//! Maps each optional field of [`MemberSearchCondition`] to zero-or-one
//! comparison fragment and folds the present fragments into a single
//! AND-composed [`Condition`]. Absent fields contribute nothing at all, so
//! the query planner never sees an always-true clause.

use entity::{members, teams};
use sea_orm::{sea_query::SimpleExpr, ColumnTrait, Condition};
use serde::Deserialize;

/// Optional-fields filter describing a member search request.
///
/// Every field is independently optional; the default value matches every
/// stored member. `age_goe > age_loe` is not rejected here, it simply
/// produces an empty result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchCondition {
    /// Exact username to match
    pub username:  Option<String>,
    /// Exact name of the member's team
    pub team_name: Option<String>,
    /// Minimum age, inclusive
    pub age_goe:   Option<i32>,
    /// Maximum age, inclusive
    pub age_loe:   Option<i32>,
}

/// `username` present → exact-equality fragment on the member's username.
pub fn username_eq(cond: &MemberSearchCondition) -> Option<SimpleExpr> {
    cond.username
        .as_deref()
        .map(|username| members::Column::Username.eq(username))
}

/// `team_name` present → exact-equality fragment on the joined team's name.
///
/// This is the only fragment referencing team columns; see
/// [`needs_team_join`].
pub fn team_name_eq(cond: &MemberSearchCondition) -> Option<SimpleExpr> {
    cond.team_name
        .as_deref()
        .map(|team_name| teams::Column::Name.eq(team_name))
}

/// `age_goe` present → member age ≥ value.
pub fn age_goe(cond: &MemberSearchCondition) -> Option<SimpleExpr> {
    cond.age_goe.map(|age| members::Column::Age.gte(age))
}

/// `age_loe` present → member age ≤ value.
pub fn age_loe(cond: &MemberSearchCondition) -> Option<SimpleExpr> {
    cond.age_loe.map(|age| members::Column::Age.lte(age))
}

/// Fold all present fragments into one AND-composed condition.
///
/// An entirely empty search condition yields an empty `Condition`, which
/// Sea-ORM renders as no WHERE clause at all (match-all).
pub fn filter(cond: &MemberSearchCondition) -> Condition {
    Condition::all()
        .add_option(username_eq(cond))
        .add_option(team_name_eq(cond))
        .add_option(age_goe(cond))
        .add_option(age_loe(cond))
}

/// Whether the predicate alone requires joining the teams table.
///
/// Queries that project team columns left-join regardless; this only
/// matters for queries over bare member rows, such as the count query.
pub fn needs_team_join(cond: &MemberSearchCondition) -> bool { cond.team_name.is_some() }

#[cfg(test)]
mod tests {
    use entity::Members;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    use super::*;

    fn build_sql(cond: &MemberSearchCondition) -> String {
        Members::find()
            .filter(filter(cond))
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn test_empty_condition_is_match_all() {
        let cond = MemberSearchCondition::default();
        assert!(!build_sql(&cond).contains("WHERE"));
    }

    #[test]
    fn test_username_fragment_is_exact_equality() {
        let cond = MemberSearchCondition {
            username: Some("memberA".to_string()),
            ..Default::default()
        };
        let sql = build_sql(&cond);
        assert!(sql.contains(r#""members"."username" = 'memberA'"#));
        assert!(!sql.contains("LIKE"));
    }

    #[test]
    fn test_team_name_fragment_targets_team_column() {
        let cond = MemberSearchCondition {
            team_name: Some("teamA".to_string()),
            ..Default::default()
        };
        let sql = build_sql(&cond);
        assert!(sql.contains(r#""teams"."name" = 'teamA'"#));
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let cond = MemberSearchCondition {
            age_goe: Some(10),
            age_loe: Some(20),
            ..Default::default()
        };
        let sql = build_sql(&cond);
        assert!(sql.contains(r#""members"."age" >= 10"#));
        assert!(sql.contains(r#""members"."age" <= 20"#));
    }

    #[test]
    fn test_fragments_compose_with_and() {
        let cond = MemberSearchCondition {
            username:  Some("memberA".to_string()),
            team_name: Some("teamA".to_string()),
            age_goe:   Some(10),
            age_loe:   Some(20),
        };
        let sql = build_sql(&cond);
        assert_eq!(sql.matches(" AND ").count(), 3);
        assert!(!sql.contains(" OR "));
    }

    #[test]
    fn test_absent_fields_are_omitted_entirely() {
        let cond = MemberSearchCondition {
            age_goe: Some(31),
            ..Default::default()
        };
        let sql = build_sql(&cond);
        let where_clause = sql.split("WHERE").nth(1).expect("expected a WHERE clause");
        assert!(!where_clause.contains("username"));
        assert!(!where_clause.contains(r#""teams""#));
        assert!(!where_clause.contains("<="));
    }

    #[test]
    fn test_needs_team_join_only_for_team_name() {
        assert!(!needs_team_join(&MemberSearchCondition::default()));
        assert!(!needs_team_join(&MemberSearchCondition {
            username: Some("memberA".to_string()),
            age_goe: Some(10),
            ..Default::default()
        }));
        assert!(needs_team_join(&MemberSearchCondition {
            team_name: Some("teamB".to_string()),
            ..Default::default()
        }));
    }
}
