use aula_entity::user::{self, Entity as User, Model as UserModel};
use sea_orm::prelude::*;
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Option<UserModel>, DbErr> {
        User::find_by_id(user_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %user_id, "failed to load user");
        })
    }

    pub async fn find_by_username<C: ConnectionTrait>(conn: &C, username: &str) -> Result<Option<UserModel>, DbErr> {
        User::find()
            .filter(user::Column::Username.eq(username))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %username, "failed to load user by username");
            })
    }
}
