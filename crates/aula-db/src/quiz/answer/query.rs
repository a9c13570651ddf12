use aula_entity::quiz::answer::{self, Entity as Answer, Model as AnswerModel};
use sea_orm::prelude::*;
use sea_orm::PaginatorTrait;
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get<C: ConnectionTrait>(
        conn: &C,
        attempt_id: Uuid,
        question_id: Uuid,
    ) -> Result<Option<AnswerModel>, DbErr> {
        Answer::find()
            .filter(answer::Column::AttemptId.eq(attempt_id))
            .filter(answer::Column::QuestionId.eq(question_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %attempt_id, %question_id, "failed to load answer");
            })
    }

    pub async fn for_attempt<C: ConnectionTrait>(conn: &C, attempt_id: Uuid) -> Result<Vec<AnswerModel>, DbErr> {
        Answer::find()
            .filter(answer::Column::AttemptId.eq(attempt_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %attempt_id, "failed to load attempt answers");
            })
    }

    pub async fn count_for_attempt<C: ConnectionTrait>(conn: &C, attempt_id: Uuid) -> Result<u64, DbErr> {
        Answer::find()
            .filter(answer::Column::AttemptId.eq(attempt_id))
            .count(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %attempt_id, "failed to count attempt answers");
            })
    }
}
