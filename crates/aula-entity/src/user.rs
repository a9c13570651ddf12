use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role_enum")]
pub enum Role {
    #[sea_orm(string_value = "doctor")]
    Doctor,
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "parent")]
    Parent,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub bio: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::course::course::Entity")]
    Course,
    #[sea_orm(has_many = "crate::enrollment::Entity")]
    Enrollment,
    #[sea_orm(has_many = "crate::quiz::attempt::Entity")]
    Attempt,
    #[sea_orm(has_many = "crate::certificate::Entity")]
    Certificate,
}

impl Related<crate::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<crate::certificate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certificate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
