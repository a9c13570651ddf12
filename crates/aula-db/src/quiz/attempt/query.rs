use aula_entity::quiz::attempt::{self, Entity as Attempt, Model as AttemptModel};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get_by_id<C: ConnectionTrait>(conn: &C, attempt_id: Uuid) -> Result<Option<AttemptModel>, DbErr> {
        Attempt::find_by_id(attempt_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %attempt_id, "failed to load attempt");
        })
    }

    /// The at-most-one open attempt for (user, quiz).
    pub async fn find_open<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        quiz_id: Uuid,
    ) -> Result<Option<AttemptModel>, DbErr> {
        Attempt::find()
            .filter(attempt::Column::UserId.eq(user_id))
            .filter(attempt::Column::QuizId.eq(quiz_id))
            .filter(attempt::Column::CompletedAt.is_null())
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %quiz_id, "failed to load open attempt");
            })
    }

    pub async fn for_user_quiz<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        quiz_id: Uuid,
    ) -> Result<Vec<AttemptModel>, DbErr> {
        Attempt::find()
            .filter(attempt::Column::UserId.eq(user_id))
            .filter(attempt::Column::QuizId.eq(quiz_id))
            .order_by_desc(attempt::Column::StartedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %quiz_id, "failed to load attempts");
            })
    }
}
