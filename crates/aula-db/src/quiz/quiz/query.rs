use aula_entity::quiz::quiz::{self, Entity as Quiz, Model as QuizModel};
use sea_orm::prelude::*;
use sea_orm::{Condition, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get_by_id<C: ConnectionTrait>(conn: &C, quiz_id: Uuid) -> Result<Option<QuizModel>, DbErr> {
        Quiz::find_by_id(quiz_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %quiz_id, "failed to load quiz");
        })
    }

    pub async fn by_course<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Vec<QuizModel>, DbErr> {
        Quiz::find()
            .filter(quiz::Column::CourseId.eq(course_id))
            .order_by_asc(quiz::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %course_id, "failed to load course quizzes");
            })
    }

    pub async fn by_module<C: ConnectionTrait>(conn: &C, module_id: Uuid) -> Result<Option<QuizModel>, DbErr> {
        Quiz::find()
            .filter(quiz::Column::ModuleId.eq(module_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %module_id, "failed to load module quiz");
            })
    }

    /// Published quizzes of a course plus the user's own unpublished ones.
    pub async fn visible_by_course<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<QuizModel>, DbErr> {
        Quiz::find()
            .filter(quiz::Column::CourseId.eq(course_id))
            .filter(
                Condition::any()
                    .add(quiz::Column::IsPublished.eq(true))
                    .add(quiz::Column::AuthorId.eq(user_id)),
            )
            .order_by_asc(quiz::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %course_id, %user_id, "failed to load visible quizzes");
            })
    }
}
