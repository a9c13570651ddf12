use crate::convert::FromDbModel;
use aula_entity::quiz::quiz::Model as QuizModel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct Quiz {
    pub id: Uuid,
    pub course_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_id: Option<Uuid>,
    pub author_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub time_limit_minutes: i32,
    pub passing_score: i32,
    pub is_published: bool,
    pub created_at: NaiveDateTime,
}

impl FromDbModel<QuizModel> for Quiz {
    fn from_db_model(model: QuizModel) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            module_id: model.module_id,
            author_id: model.author_id,
            title: model.title,
            description: model.description,
            time_limit_minutes: model.time_limit_minutes,
            passing_score: model.passing_score,
            is_published: model.is_published,
            created_at: model.created_at,
        }
    }
}
