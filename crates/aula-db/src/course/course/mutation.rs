use aula_entity::course::course::{self, Language};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        author_id: Uuid,
        title: &str,
        description: &str,
        language: Language,
    ) -> Result<course::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let course = course::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            author_id: Set(author_id),
            is_published: Set(false),
            language: Set(language),
            created_at: Set(now),
            updated_at: Set(now),
        };
        course.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, course: course::ActiveModel) -> Result<course::Model, DbErr> {
        let course = course::ActiveModel {
            updated_at: Set(Utc::now().naive_utc()),
            ..course
        };
        course.update(conn).await
    }

    pub async fn set_published<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
        published: bool,
    ) -> Result<course::Model, DbErr> {
        let course = course::ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(course_id),
            is_published: Set(published),
            updated_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        course.update(conn).await
    }
}
