use aula_entity::quiz::choice;
use aula_entity::quiz::question::{self, QuestionKind};
use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use uuid::Uuid;

pub struct Mutation;

/// Choice text plus correctness flag, as supplied by the author.
pub struct NewChoice {
    pub text: String,
    pub is_correct: bool,
}

impl Mutation {
    #[allow(clippy::too_many_arguments)]
    pub async fn create<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        quiz_id: Uuid,
        text: &str,
        kind: QuestionKind,
        points: i32,
        explanation: Option<&str>,
        position: i32,
        choices: Vec<NewChoice>,
    ) -> Result<question::Model, DbErr> {
        let txn = conn.begin().await?;

        let model = question::ActiveModel {
            id: Set(Uuid::new_v4()),
            quiz_id: Set(quiz_id),
            text: Set(text.to_string()),
            kind: Set(kind),
            points: Set(points),
            explanation: Set(explanation.map(ToString::to_string)),
            position: Set(position),
        }
        .insert(&txn)
        .await?;

        Self::insert_choices(&txn, model.id, choices).await?;

        txn.commit().await?;
        Ok(model)
    }

    /// Replaces the full choice set of a question, as the authoring UI does.
    pub async fn replace_choices<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        question_id: Uuid,
        choices: Vec<NewChoice>,
    ) -> Result<(), DbErr> {
        let txn = conn.begin().await?;

        choice::Entity::delete_many()
            .filter(choice::Column::QuestionId.eq(question_id))
            .exec(&txn)
            .await?;
        Self::insert_choices(&txn, question_id, choices).await?;

        txn.commit().await
    }

    /// Deletes a question and its choices.
    pub async fn delete<C: ConnectionTrait + TransactionTrait>(conn: &C, question_id: Uuid) -> Result<(), DbErr> {
        let txn = conn.begin().await?;

        choice::Entity::delete_many()
            .filter(choice::Column::QuestionId.eq(question_id))
            .exec(&txn)
            .await?;
        question::Entity::delete_by_id(question_id).exec(&txn).await?;

        txn.commit().await
    }

    async fn insert_choices<C: ConnectionTrait>(
        conn: &C,
        question_id: Uuid,
        choices: Vec<NewChoice>,
    ) -> Result<(), DbErr> {
        for choice in choices {
            choice::ActiveModel {
                id: Set(Uuid::new_v4()),
                question_id: Set(question_id),
                text: Set(choice.text),
                is_correct: Set(choice.is_correct),
            }
            .insert(conn)
            .await?;
        }
        Ok(())
    }
}
