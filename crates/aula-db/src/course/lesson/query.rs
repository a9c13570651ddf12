use aula_entity::course::lesson::{self, Entity as Lesson, Model as LessonModel};
use aula_entity::course::module;
use sea_orm::prelude::*;
use sea_orm::{JoinType, QueryOrder, QuerySelect, RelationTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get_by_id<C: ConnectionTrait>(conn: &C, lesson_id: Uuid) -> Result<Option<LessonModel>, DbErr> {
        Lesson::find_by_id(lesson_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %lesson_id, "failed to load lesson");
        })
    }

    pub async fn by_module<C: ConnectionTrait>(conn: &C, module_id: Uuid) -> Result<Vec<LessonModel>, DbErr> {
        Lesson::find()
            .filter(lesson::Column::ModuleId.eq(module_id))
            .order_by_asc(lesson::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %module_id, "failed to load module lessons");
            })
    }

    /// All lessons of a course ordered by (module position, lesson position).
    pub async fn by_course<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Vec<LessonModel>, DbErr> {
        Lesson::find()
            .join(JoinType::InnerJoin, lesson::Relation::Module.def())
            .filter(module::Column::CourseId.eq(course_id))
            .order_by_asc(module::Column::Position)
            .order_by_asc(lesson::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %course_id, "failed to load course lessons");
            })
    }
}
