use crate::convert::FromDbModel;
use aula_entity::course::content_step::{Model as StepModel, StepKind as StepKindModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Text,
    Image,
    Code,
}

#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct ContentStep {
    pub id: Uuid,
    pub lesson_id: Uuid,
    pub title: String,
    pub body: String,
    pub kind: StepKind,
    pub position: i32,
}

impl FromDbModel<StepKindModel> for StepKind {
    fn from_db_model(model: StepKindModel) -> Self {
        match model {
            StepKindModel::Text => StepKind::Text,
            StepKindModel::Image => StepKind::Image,
            StepKindModel::Code => StepKind::Code,
        }
    }
}

impl FromDbModel<StepModel> for ContentStep {
    fn from_db_model(model: StepModel) -> Self {
        Self {
            id: model.id,
            lesson_id: model.lesson_id,
            title: model.title,
            body: model.body,
            kind: FromDbModel::from_db_model(model.kind),
            position: model.position,
        }
    }
}
