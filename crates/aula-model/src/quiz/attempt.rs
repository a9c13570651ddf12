use crate::convert::FromDbModel;
use aula_entity::quiz::attempt::Model as AttemptModel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct Attempt {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub user_id: Uuid,
    pub started_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub passed: bool,
}

impl FromDbModel<AttemptModel> for Attempt {
    fn from_db_model(model: AttemptModel) -> Self {
        Self {
            id: model.id,
            quiz_id: model.quiz_id,
            user_id: model.user_id,
            started_at: model.started_at,
            completed_at: model.completed_at,
            score: model.score,
            passed: model.passed,
        }
    }
}
