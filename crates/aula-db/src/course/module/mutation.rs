use aula_entity::course::module;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
        title: &str,
        description: &str,
        position: i32,
    ) -> Result<module::Model, DbErr> {
        let module = module::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            position: Set(position),
        };
        module.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, module: module::ActiveModel) -> Result<module::Model, DbErr> {
        module.update(conn).await
    }
}
