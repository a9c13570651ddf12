use crate::error::CoreError;
use crate::permissions;
use aula_entity::enrollment;
use sea_orm::{ConnectionTrait, TransactionTrait};
use uuid::Uuid;

/// Idempotent enroll: a second call for the same (user, course) returns the
/// existing record.
pub async fn enroll<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
) -> Result<enrollment::Model, CoreError> {
    let user = aula_db::user::Query::find_by_id(conn, user_id)
        .await?
        .ok_or(CoreError::NotFound("user"))?;
    let course = aula_db::course::course::Query::get_by_id(conn, course_id)
        .await?
        .ok_or(CoreError::NotFound("course"))?;

    if !permissions::can_enroll(&user, &course) {
        return Err(CoreError::PermissionDenied("course is not open for enrollment"));
    }

    Ok(aula_db::enrollment::Mutation::enroll(conn, user_id, course_id).await?)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub lessons_completed: usize,
    pub lessons_total: usize,
    pub quizzes_completed: usize,
    pub quizzes_total: usize,
    pub percent: f64,
}

/// Course progress as shown on the dashboard: completed lessons and quizzes
/// against the course totals.
pub async fn progress<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
) -> Result<ProgressSummary, CoreError> {
    let enrollment = aula_db::enrollment::Query::get(conn, user_id, course_id)
        .await?
        .ok_or(CoreError::NotFound("enrollment"))?;

    let lessons = aula_db::course::lesson::Query::by_course(conn, course_id).await?;
    let quizzes = aula_db::quiz::quiz::Query::by_course(conn, course_id).await?;

    let lessons_completed = lessons
        .iter()
        .filter(|lesson| enrollment.lessons_completed.contains(&lesson.id))
        .count();
    let quizzes_completed = quizzes
        .iter()
        .filter(|quiz| enrollment.quizzes_completed.contains(&quiz.id))
        .count();

    let total = lessons.len() + quizzes.len();
    let done = lessons_completed + quizzes_completed;
    let percent = if total == 0 {
        0.0
    } else {
        done as f64 / total as f64 * 100.0
    };

    Ok(ProgressSummary {
        lessons_completed,
        lessons_total: lessons.len(),
        quizzes_completed,
        quizzes_total: quizzes.len(),
        percent,
    })
}
