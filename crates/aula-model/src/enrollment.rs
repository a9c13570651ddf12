use crate::convert::FromDbModel;
use aula_entity::enrollment::Model as EnrollmentModel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct Enrollment {
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub lessons_completed: BTreeSet<Uuid>,
    pub quizzes_completed: BTreeSet<Uuid>,
    pub steps_completed: BTreeMap<Uuid, BTreeSet<u32>>,
    pub enrolled_at: NaiveDateTime,
    pub last_access: NaiveDateTime,
}

impl FromDbModel<EnrollmentModel> for Enrollment {
    fn from_db_model(model: EnrollmentModel) -> Self {
        Self {
            user_id: model.user_id,
            course_id: model.course_id,
            lessons_completed: model.lessons_completed.0,
            quizzes_completed: model.quizzes_completed.0,
            steps_completed: model.steps_completed.0,
            enrolled_at: model.enrolled_at,
            last_access: model.last_access,
        }
    }
}
