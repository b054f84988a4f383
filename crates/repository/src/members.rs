//! # Member Query Executor & Projection
//!
//! Runs the composed search predicate against the store in three modes:
//! unrestricted list, offset/limit page with an unconditional count, and
//! offset/limit page with a conditional count. Rows are projected into
//! [`MemberTeamDto`] inside the query, so unused columns never leave the
//! store.

use entity::{members, teams, Members};
use error::Result;
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    DbConn,
    EntityTrait,
    FromQueryResult,
    JoinType,
    PaginatorTrait,
    QueryFilter,
    QueryOrder,
    QuerySelect,
    RelationTrait,
    Set,
};
use serde::Serialize;
use tracing::debug;

use crate::{
    condition::{self, MemberSearchCondition},
    page::{total_without_count, Page, PageRequest},
};

/// Flat projection of a left-joined (member, team) row pair.
///
/// `team_id` and `team_name` are `None` for members without a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamDto {
    pub member_id: i64,
    pub username:  String,
    pub age:       i32,
    pub team_id:   Option<i64>,
    pub team_name: Option<String>,
}

/// Repository for member search and persistence
///
/// Wraps a Sea-ORM connection; every method issues read-only queries except
/// the explicit `save*` registration points. Stateless across calls.
pub struct MemberRepository {
    db: DbConn,
}

impl MemberRepository {
    /// Creates a new MemberRepository
    ///
    /// # Arguments
    /// * `db` - Sea-ORM connection handle (shares the underlying pool)
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
        }
    }

    /// The projected, left-joined, filtered select behind every DTO search.
    ///
    /// The left join is unconditional here: team columns are part of the
    /// projection whenever the member has a team, independent of whether the
    /// predicate filters on them. Ordered by member id, which follows
    /// insertion order.
    fn search_select(cond: &MemberSearchCondition) -> sea_orm::Select<Members> {
        Members::find()
            .select_only()
            .column_as(members::Column::Id, "member_id")
            .column(members::Column::Username)
            .column(members::Column::Age)
            .column_as(teams::Column::Id, "team_id")
            .column_as(teams::Column::Name, "team_name")
            .join(JoinType::LeftJoin, members::Relation::Team.def())
            .filter(condition::filter(cond))
            .order_by_asc(members::Column::Id)
    }

    /// The count select over bare member rows; joins teams only when the
    /// predicate actually references them.
    fn count_select(cond: &MemberSearchCondition) -> sea_orm::Select<Members> {
        let select = if condition::needs_team_join(cond) {
            Members::find().join(JoinType::LeftJoin, members::Relation::Team.def())
        }
        else {
            Members::find()
        };
        select.filter(condition::filter(cond))
    }

    /// Unrestricted search: the full matching result set, projected.
    pub async fn search(&self, cond: &MemberSearchCondition) -> Result<Vec<MemberTeamDto>> {
        let rows = Self::search_select(cond)
            .into_model::<MemberTeamDto>()
            .all(&self.db)
            .await?;

        debug!(matched = rows.len(), "Unrestricted member search executed");

        Ok(rows)
    }

    /// Simple paged search: one content query plus an unconditional count
    /// query.
    pub async fn search_page_simple(
        &self,
        cond: &MemberSearchCondition,
        request: PageRequest,
    ) -> Result<Page<MemberTeamDto>> {
        let content = self.fetch_page(cond, request).await?;
        let total = Self::count_select(cond).count(&self.db).await?;

        Ok(Page::new(content, request, total))
    }

    /// Complex paged search: identical content query, but the count query is
    /// issued only when the fetched page cannot reveal the exact total.
    pub async fn search_page_complex(
        &self,
        cond: &MemberSearchCondition,
        request: PageRequest,
    ) -> Result<Page<MemberTeamDto>> {
        let content = self.fetch_page(cond, request).await?;

        let total = match total_without_count(request.offset(), request.size, content.len() as u64) {
            Some(total) => {
                debug!(total, "Count query skipped, total derived from page");
                total
            },
            None => Self::count_select(cond).count(&self.db).await?,
        };

        Ok(Page::new(content, request, total))
    }

    /// Fetch one offset/limit page of projected rows.
    async fn fetch_page(&self, cond: &MemberSearchCondition, request: PageRequest) -> Result<Vec<MemberTeamDto>> {
        let rows = Self::search_select(cond)
            .offset(request.offset())
            .limit(request.size)
            .into_model::<MemberTeamDto>()
            .all(&self.db)
            .await?;

        Ok(rows)
    }

    /// Register a new member with the store; the store assigns the id.
    pub async fn save(&self, username: &str, age: i32, team_id: Option<i64>) -> Result<members::Model> {
        let member = members::ActiveModel {
            username: Set(username.to_string()),
            age: Set(age),
            team_id: Set(team_id),
            ..Default::default()
        };

        Ok(member.insert(&self.db).await?)
    }

    /// Register a new team with the store; the store assigns the id.
    pub async fn save_team(&self, name: &str) -> Result<teams::Model> {
        let team = teams::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        Ok(team.insert(&self.db).await?)
    }

    /// Look up a member by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<members::Model>> {
        Ok(Members::find_by_id(id).one(&self.db).await?)
    }

    /// All members, no join, insertion order.
    pub async fn find_all(&self) -> Result<Vec<members::Model>> {
        Ok(Members::find()
            .order_by_asc(members::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Members with an exactly matching username, no join.
    pub async fn find_by_username(&self, username: &str) -> Result<Vec<members::Model>> {
        Ok(Members::find()
            .filter(members::Column::Username.eq(username))
            .order_by_asc(members::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Members of a team, as a derived query on the owning side of the
    /// association. This replaces any in-memory back-reference collection.
    pub async fn find_by_team_id(&self, team_id: i64) -> Result<Vec<members::Model>> {
        Ok(Members::find()
            .filter(members::Column::TeamId.eq(team_id))
            .order_by_asc(members::Column::Id)
            .all(&self.db)
            .await?)
    }
}
