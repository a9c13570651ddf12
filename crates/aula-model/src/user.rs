use crate::convert::FromDbModel;
use aula_entity::user::{Model as UserModel, Role as RoleModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Doctor,
    Student,
    Parent,
}

#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl FromDbModel<RoleModel> for Role {
    fn from_db_model(model: RoleModel) -> Self {
        match model {
            RoleModel::Doctor => Role::Doctor,
            RoleModel::Student => Role::Student,
            RoleModel::Parent => Role::Parent,
        }
    }
}

impl FromDbModel<UserModel> for User {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            id: model.id,
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            role: FromDbModel::from_db_model(model.role),
            bio: model.bio,
        }
    }
}
