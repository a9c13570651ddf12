use aula_entity::course::content_step::{self, StepKind};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        lesson_id: Uuid,
        title: &str,
        body: &str,
        kind: StepKind,
        position: i32,
    ) -> Result<content_step::Model, DbErr> {
        let step = content_step::ActiveModel {
            id: Set(Uuid::new_v4()),
            lesson_id: Set(lesson_id),
            title: Set(title.to_string()),
            body: Set(body.to_string()),
            kind: Set(kind),
            position: Set(position),
        };
        step.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        step: content_step::ActiveModel,
    ) -> Result<content_step::Model, DbErr> {
        step.update(conn).await
    }
}
