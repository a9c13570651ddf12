use crate::convert::FromDbModel;
use aula_entity::course::module::Model as ModuleModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct Module {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: String,
    pub position: i32,
}

impl FromDbModel<ModuleModel> for Module {
    fn from_db_model(model: ModuleModel) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            title: model.title,
            description: model.description,
            position: model.position,
        }
    }
}
