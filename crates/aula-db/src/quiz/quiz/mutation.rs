use aula_entity::quiz::quiz;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Unchanged, ConnectionTrait, DbErr, Set};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    #[allow(clippy::too_many_arguments)]
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
        module_id: Option<Uuid>,
        author_id: Uuid,
        title: &str,
        description: Option<&str>,
        time_limit_minutes: i32,
        passing_score: i32,
    ) -> Result<quiz::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let quiz = quiz::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            module_id: Set(module_id),
            author_id: Set(author_id),
            title: Set(title.to_string()),
            description: Set(description.map(ToString::to_string)),
            time_limit_minutes: Set(time_limit_minutes),
            passing_score: Set(passing_score),
            is_published: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };
        quiz.insert(conn).await
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, quiz: quiz::ActiveModel) -> Result<quiz::Model, DbErr> {
        let quiz = quiz::ActiveModel {
            updated_at: Set(Utc::now().naive_utc()),
            ..quiz
        };
        quiz.update(conn).await
    }

    pub async fn set_published<C: ConnectionTrait>(
        conn: &C,
        quiz_id: Uuid,
        published: bool,
    ) -> Result<quiz::Model, DbErr> {
        let quiz = quiz::ActiveModel {
            id: Unchanged(quiz_id),
            is_published: Set(published),
            updated_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        quiz.update(conn).await
    }
}
