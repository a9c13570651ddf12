use crate::convert::FromDbModel;
use aula_entity::course::course::{Language as LanguageModel, Model as CourseModel};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Russian,
    English,
    Kyrgyz,
}

#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub author_id: Uuid,
    pub is_published: bool,
    pub language: Language,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl FromDbModel<LanguageModel> for Language {
    fn from_db_model(model: LanguageModel) -> Self {
        match model {
            LanguageModel::Russian => Language::Russian,
            LanguageModel::English => Language::English,
            LanguageModel::Kyrgyz => Language::Kyrgyz,
        }
    }
}

impl FromDbModel<CourseModel> for Course {
    fn from_db_model(model: CourseModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            author_id: model.author_id,
            is_published: model.is_published,
            language: FromDbModel::from_db_model(model.language),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
