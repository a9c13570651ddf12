use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Completed entity ids (lessons or quizzes), stored as a JSON column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CompletedSet(pub BTreeSet<Uuid>);

impl CompletedSet {
    #[must_use]
    pub fn contains(&self, id: &Uuid) -> bool {
        self.0.contains(id)
    }

    /// Returns true if the id was not present before.
    pub fn insert(&mut self, id: Uuid) -> bool {
        self.0.insert(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Lesson id to set of completed 1-based step indices, stored as a JSON
/// column. Set semantics make re-marking a step idempotent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StepProgress(pub BTreeMap<Uuid, BTreeSet<u32>>);

impl StepProgress {
    /// Returns true if the step was not already recorded.
    pub fn insert(&mut self, lesson_id: Uuid, step_index: u32) -> bool {
        self.0.entry(lesson_id).or_default().insert(step_index)
    }

    #[must_use]
    pub fn completed_steps(&self, lesson_id: &Uuid) -> usize {
        self.0.get(lesson_id).map_or(0, BTreeSet::len)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: Uuid,
    pub lessons_completed: CompletedSet,
    pub quizzes_completed: CompletedSet,
    pub steps_completed: StepProgress,
    pub enrolled_at: DateTime,
    pub last_access: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::Entity",
        from = "Column::UserId",
        to = "crate::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "crate::course::course::Entity",
        from = "Column::CourseId",
        to = "crate::course::course::Column::Id"
    )]
    Course,
}

impl Related<crate::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<crate::course::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
