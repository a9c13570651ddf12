use aula_entity::course::course::{self, Entity as Course, Model as CourseModel};
use sea_orm::prelude::*;
use sea_orm::{Condition, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get_by_id<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Option<CourseModel>, DbErr> {
        Course::find_by_id(course_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %course_id, "failed to load course");
        })
    }

    pub async fn list_published<C: ConnectionTrait>(conn: &C) -> Result<Vec<CourseModel>, DbErr> {
        Course::find()
            .filter(course::Column::IsPublished.eq(true))
            .order_by_desc(course::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to list published courses");
            })
    }

    /// Published courses plus the user's own unpublished ones.
    pub async fn list_visible_to<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<CourseModel>, DbErr> {
        Course::find()
            .filter(
                Condition::any()
                    .add(course::Column::IsPublished.eq(true))
                    .add(course::Column::AuthorId.eq(user_id)),
            )
            .order_by_desc(course::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to list visible courses");
            })
    }
}
