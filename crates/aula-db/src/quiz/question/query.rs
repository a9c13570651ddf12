use aula_entity::quiz::choice::{self, Entity as Choice, Model as ChoiceModel};
use aula_entity::quiz::question::{self, Entity as Question, Model as QuestionModel};
use sea_orm::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get_by_id<C: ConnectionTrait>(conn: &C, question_id: Uuid) -> Result<Option<QuestionModel>, DbErr> {
        Question::find_by_id(question_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %question_id, "failed to load question");
        })
    }

    pub async fn by_quiz<C: ConnectionTrait>(conn: &C, quiz_id: Uuid) -> Result<Vec<QuestionModel>, DbErr> {
        Question::find()
            .filter(question::Column::QuizId.eq(quiz_id))
            .order_by_asc(question::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %quiz_id, "failed to load quiz questions");
            })
    }

    pub async fn count_for_quiz<C: ConnectionTrait>(conn: &C, quiz_id: Uuid) -> Result<u64, DbErr> {
        Question::find()
            .filter(question::Column::QuizId.eq(quiz_id))
            .count(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %quiz_id, "failed to count quiz questions");
            })
    }

    pub async fn choices<C: ConnectionTrait>(conn: &C, question_id: Uuid) -> Result<Vec<ChoiceModel>, DbErr> {
        Choice::find()
            .filter(choice::Column::QuestionId.eq(question_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %question_id, "failed to load question choices");
            })
    }
}
