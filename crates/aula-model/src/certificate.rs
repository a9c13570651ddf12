use crate::convert::FromDbModel;
use aula_entity::certificate::Model as CertificateModel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct Certificate {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub token: String,
    pub score: f64,
    pub issued_at: NaiveDateTime,
}

impl FromDbModel<CertificateModel> for Certificate {
    fn from_db_model(model: CertificateModel) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            course_id: model.course_id,
            token: model.token,
            score: model.score,
            issued_at: model.issued_at,
        }
    }
}
