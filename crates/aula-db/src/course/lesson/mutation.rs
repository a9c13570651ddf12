use aula_entity::course::lesson;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        module_id: Uuid,
        title: &str,
        description: &str,
        estimated_minutes: i32,
        position: i32,
    ) -> Result<lesson::Model, DbErr> {
        let lesson = lesson::ActiveModel {
            id: Set(Uuid::new_v4()),
            module_id: Set(module_id),
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            estimated_minutes: Set(estimated_minutes),
            position: Set(position),
        };
        lesson.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, lesson: lesson::ActiveModel) -> Result<lesson::Model, DbErr> {
        lesson.update(conn).await
    }
}
