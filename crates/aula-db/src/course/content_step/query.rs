use aula_entity::course::content_step::{self, Entity as ContentStep, Model as StepModel};
use sea_orm::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn by_lesson<C: ConnectionTrait>(conn: &C, lesson_id: Uuid) -> Result<Vec<StepModel>, DbErr> {
        ContentStep::find()
            .filter(content_step::Column::LessonId.eq(lesson_id))
            .order_by_asc(content_step::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %lesson_id, "failed to load lesson steps");
            })
    }

    pub async fn count_for_lesson<C: ConnectionTrait>(conn: &C, lesson_id: Uuid) -> Result<u64, DbErr> {
        ContentStep::find()
            .filter(content_step::Column::LessonId.eq(lesson_id))
            .count(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %lesson_id, "failed to count lesson steps");
            })
    }
}
