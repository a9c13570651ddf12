use aula_entity::quiz::attempt;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Unchanged, ConnectionTrait, DbErr, Set};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(conn: &C, user_id: Uuid, quiz_id: Uuid) -> Result<attempt::Model, DbErr> {
        let attempt = attempt::ActiveModel {
            id: Set(Uuid::new_v4()),
            quiz_id: Set(quiz_id),
            user_id: Set(user_id),
            started_at: Set(Utc::now().naive_utc()),
            completed_at: NotSet,
            score: NotSet,
            passed: Set(false),
        };
        attempt.insert(conn).await
    }

    /// Seals a finished attempt: end time, final score, pass flag.
    pub async fn seal<C: ConnectionTrait>(
        conn: &C,
        attempt_id: Uuid,
        score: f64,
        passed: bool,
    ) -> Result<attempt::Model, DbErr> {
        let attempt = attempt::ActiveModel {
            id: Unchanged(attempt_id),
            completed_at: Set(Some(Utc::now().naive_utc())),
            score: Set(Some(score)),
            passed: Set(passed),
            ..Default::default()
        };
        attempt.update(conn).await
    }
}
