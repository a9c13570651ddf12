use aula_entity::quiz::answer::{self, SelectedChoices};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Inserts a scored answer. The unique (attempt_id, question_id) index
    /// turns a concurrent duplicate into a constraint violation.
    #[allow(clippy::too_many_arguments)]
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        attempt_id: Uuid,
        question_id: Uuid,
        selected_choices: Vec<Uuid>,
        text_answer: Option<String>,
        is_correct: bool,
        points_earned: f64,
    ) -> Result<answer::Model, DbErr> {
        let answer = answer::ActiveModel {
            id: Set(Uuid::new_v4()),
            attempt_id: Set(attempt_id),
            question_id: Set(question_id),
            selected_choices: Set(SelectedChoices(selected_choices)),
            text_answer: Set(text_answer),
            is_correct: Set(is_correct),
            points_earned: Set(points_earned),
            created_at: Set(Utc::now().naive_utc()),
        };
        answer.insert(conn).await
    }
}
