use crate::error::CoreError;
use crate::quiz::evaluation;
use aula_entity::certificate;
use aula_entity::quiz::attempt;
use rand::Rng;
use sea_orm::{ConnectionTrait, SqlErr, TransactionTrait};
use uuid::Uuid;

const TOKEN_RETRIES: usize = 3;

fn generate_token(course_id: Uuid, user_id: Uuid) -> String {
    let suffix: u32 = rand::thread_rng().gen();
    format!("{course_id}-{user_id}-{suffix:08x}")
}

/// Issues the certificate for (user, course) once a passed attempt leaves the
/// full set of the course's quizzes completed. Idempotent: an already-issued
/// certificate is returned unchanged. Token collisions are retried with a
/// fresh token.
pub async fn issue_if_qualified<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
    attempt: &attempt::Model,
) -> Result<Option<certificate::Model>, CoreError> {
    if !attempt.is_completed() || !attempt.passed {
        return Ok(None);
    }

    let Some(enrollment) = aula_db::enrollment::Query::get(conn, user_id, course_id).await? else {
        return Ok(None);
    };
    let quizzes = aula_db::quiz::quiz::Query::by_course(conn, course_id).await?;
    if quizzes.iter().any(|quiz| !enrollment.quizzes_completed.contains(&quiz.id)) {
        return Ok(None);
    }

    let questions = aula_db::quiz::question::Query::by_quiz(conn, attempt.quiz_id).await?;
    let total_points: f64 = questions.iter().map(|q| f64::from(q.points)).sum();
    let score = evaluation::percentage(attempt.score.unwrap_or_default(), total_points);

    let mut last_err = None;
    for _ in 0..TOKEN_RETRIES {
        let token = generate_token(course_id, user_id);
        match aula_db::certificate::Mutation::get_or_create(conn, user_id, course_id, token, score).await {
            Ok(model) => return Ok(Some(model)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::warn!(%user_id, %course_id, "certificate token collision, retrying");
                last_err = Some(err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(last_err
        .map(CoreError::from)
        .unwrap_or(CoreError::InvalidState("certificate token retries exhausted")))
}

pub async fn get<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
) -> Result<Option<certificate::Model>, CoreError> {
    Ok(aula_db::certificate::Query::for_user_course(conn, user_id, course_id).await?)
}

/// Public verification lookup by the certificate's unique token.
pub async fn verify<C: ConnectionTrait>(conn: &C, token: &str) -> Result<Option<certificate::Model>, CoreError> {
    Ok(aula_db::certificate::Query::by_token(conn, token).await?)
}

#[cfg(test)]
mod tests {
    use super::generate_token;
    use uuid::Uuid;

    #[test]
    fn token_embeds_course_and_user() {
        let course = Uuid::new_v4();
        let user = Uuid::new_v4();
        let token = generate_token(course, user);
        assert!(token.starts_with(&format!("{course}-{user}-")));
        let suffix = token.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 8);
    }

    #[test]
    fn tokens_differ_between_calls() {
        let course = Uuid::new_v4();
        let user = Uuid::new_v4();
        assert_ne!(generate_token(course, user), generate_token(course, user));
    }
}
