use aula_entity::user::{self, Role};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DbErr, Set};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        username: &str,
        first_name: &str,
        last_name: &str,
        role: Role,
    ) -> Result<user::Model, DbErr> {
        let user = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username.to_string()),
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            role: Set(role),
            bio: NotSet,
            created_at: Set(Utc::now().naive_utc()),
        };
        user.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, user: user::ActiveModel) -> Result<user::Model, DbErr> {
        user.update(conn).await
    }
}
