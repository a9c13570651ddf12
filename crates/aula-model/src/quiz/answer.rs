use crate::convert::FromDbModel;
use aula_entity::quiz::answer::Model as AnswerModel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct Answer {
    pub id: Uuid,
    pub attempt_id: Uuid,
    pub question_id: Uuid,
    pub selected_choices: Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_answer: Option<String>,
    pub is_correct: bool,
    pub points_earned: f64,
    pub created_at: NaiveDateTime,
}

impl FromDbModel<AnswerModel> for Answer {
    fn from_db_model(model: AnswerModel) -> Self {
        Self {
            id: model.id,
            attempt_id: model.attempt_id,
            question_id: model.question_id,
            selected_choices: model.selected_choices.0,
            text_answer: model.text_answer,
            is_correct: model.is_correct,
            points_earned: model.points_earned,
            created_at: model.created_at,
        }
    }
}
