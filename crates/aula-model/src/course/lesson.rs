use crate::convert::FromDbModel;
use aula_entity::course::lesson::Model as LessonModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct Lesson {
    pub id: Uuid,
    pub module_id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_minutes: i32,
    pub position: i32,
}

impl FromDbModel<LessonModel> for Lesson {
    fn from_db_model(model: LessonModel) -> Self {
        Self {
            id: model.id,
            module_id: model.module_id,
            title: model.title,
            description: model.description,
            estimated_minutes: model.estimated_minutes,
            position: model.position,
        }
    }
}
