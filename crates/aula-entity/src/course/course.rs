use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "course_language_enum")]
pub enum Language {
    #[sea_orm(string_value = "ru")]
    Russian,
    #[sea_orm(string_value = "en")]
    English,
    #[sea_orm(string_value = "ky")]
    Kyrgyz,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub author_id: Uuid,
    pub is_published: bool,
    pub language: Language,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::Entity",
        from = "Column::AuthorId",
        to = "crate::user::Column::Id"
    )]
    Author,
    #[sea_orm(has_many = "super::module::Entity")]
    Module,
    #[sea_orm(has_many = "crate::quiz::quiz::Entity")]
    Quiz,
    #[sea_orm(has_many = "crate::enrollment::Entity")]
    Enrollment,
    #[sea_orm(has_many = "crate::certificate::Entity")]
    Certificate,
}

impl Related<crate::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<crate::quiz::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
