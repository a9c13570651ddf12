use crate::certificate;
use crate::error::CoreError;
use crate::permissions;
use aula_entity::certificate as certificate_entity;
use aula_entity::quiz::attempt;
use sea_orm::{ConnectionTrait, TransactionTrait};
use std::collections::BTreeSet;
use uuid::Uuid;

pub mod evaluation;

/// One answer as submitted by the user: choice ids, free text, or both.
#[derive(Debug, Clone, Default)]
pub struct AnswerSubmission {
    pub selected_choices: Vec<Uuid>,
    pub text_answer: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub points_earned: f64,
    pub attempt_completed: bool,
    // Set once the attempt is sealed
    pub passed: Option<bool>,
    // Set when sealing this attempt completed the course
    pub certificate: Option<certificate_entity::Model>,
}

/// Returns the existing open attempt when there is one, so a double "start"
/// cannot produce two parallel attempts for the same (user, quiz).
pub async fn start_attempt<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    user_id: Uuid,
    quiz_id: Uuid,
) -> Result<attempt::Model, CoreError> {
    let user = aula_db::user::Query::find_by_id(conn, user_id)
        .await?
        .ok_or(CoreError::NotFound("user"))?;
    let quiz = aula_db::quiz::quiz::Query::get_by_id(conn, quiz_id)
        .await?
        .ok_or(CoreError::NotFound("quiz"))?;

    if !permissions::can_view_quiz(&user, &quiz) {
        return Err(CoreError::PermissionDenied("quiz is not available"));
    }

    if let Some(open) = aula_db::quiz::attempt::Query::find_open(conn, user_id, quiz_id).await? {
        tracing::debug!(attempt_id = %open.id, %user_id, %quiz_id, "resuming open attempt");
        return Ok(open);
    }

    Ok(aula_db::quiz::attempt::Mutation::create(conn, user_id, quiz_id).await?)
}

/// Scores and stores one answer; answers are write-once per (attempt,
/// question). When the last question is answered the attempt is sealed in the
/// same transaction, the quiz is recorded on the enrollment, and certificate
/// issuance is checked.
pub async fn submit_answer<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    user_id: Uuid,
    attempt_id: Uuid,
    question_id: Uuid,
    submission: AnswerSubmission,
) -> Result<AnswerOutcome, CoreError> {
    let attempt = aula_db::quiz::attempt::Query::get_by_id(conn, attempt_id)
        .await?
        .ok_or(CoreError::NotFound("attempt"))?;
    if attempt.user_id != user_id {
        return Err(CoreError::PermissionDenied("attempt belongs to another user"));
    }
    if attempt.is_completed() {
        return Err(CoreError::InvalidState("attempt is already completed"));
    }

    let question = aula_db::quiz::question::Query::get_by_id(conn, question_id)
        .await?
        .filter(|q| q.quiz_id == attempt.quiz_id)
        .ok_or(CoreError::NotFound("question in this quiz"))?;

    if aula_db::quiz::answer::Query::get(conn, attempt_id, question_id)
        .await?
        .is_some()
    {
        return Err(CoreError::InvalidState("question was already answered"));
    }

    let text_answer = submission.text_answer.as_deref().map(str::trim);
    if question.kind == aula_entity::quiz::question::QuestionKind::ShortAnswer
        && text_answer.is_none_or(str::is_empty)
    {
        return Err(CoreError::Validation("short answer requires text".to_owned()));
    }

    let choices = aula_db::quiz::question::Query::choices(conn, question_id).await?;
    // Ids not belonging to the question are dropped, not rejected
    let known: BTreeSet<Uuid> = choices.iter().map(|c| c.id).collect();
    let selected: Vec<Uuid> = submission
        .selected_choices
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .intersection(&known)
        .copied()
        .collect();

    let is_correct = evaluation::evaluate(question.kind, &choices, &selected, text_answer);
    let points_earned = if is_correct { f64::from(question.points) } else { 0.0 };

    let quiz = aula_db::quiz::quiz::Query::get_by_id(conn, attempt.quiz_id)
        .await?
        .ok_or(CoreError::NotFound("quiz"))?;

    // Answer insert and attempt sealing are one atomic unit
    let txn = conn.begin().await?;

    aula_db::quiz::answer::Mutation::create(
        &txn,
        attempt_id,
        question_id,
        selected,
        text_answer.map(ToOwned::to_owned),
        is_correct,
        points_earned,
    )
    .await?;

    let answered = aula_db::quiz::answer::Query::count_for_attempt(&txn, attempt_id).await?;
    let total_questions = aula_db::quiz::question::Query::count_for_quiz(&txn, attempt.quiz_id).await?;

    let mut sealed = None;
    if answered >= total_questions {
        let answers = aula_db::quiz::answer::Query::for_attempt(&txn, attempt_id).await?;
        let score: f64 = answers.iter().map(|a| a.points_earned).sum();

        let questions = aula_db::quiz::question::Query::by_quiz(&txn, attempt.quiz_id).await?;
        let total_points: f64 = questions.iter().map(|q| f64::from(q.points)).sum();
        let passed = evaluation::percentage(score, total_points) >= f64::from(quiz.passing_score) && total_points > 0.0;

        let model = aula_db::quiz::attempt::Mutation::seal(&txn, attempt_id, score, passed).await?;

        let quiz_id = quiz.id;
        aula_db::enrollment::Mutation::enroll(&txn, user_id, quiz.course_id).await?;
        aula_db::enrollment::Mutation::update(&txn, user_id, quiz.course_id, move |enrollment| {
            enrollment.quizzes_completed.insert(quiz_id);
        })
        .await?;

        sealed = Some(model);
    }

    txn.commit().await?;

    let mut outcome = AnswerOutcome {
        is_correct,
        points_earned,
        attempt_completed: sealed.is_some(),
        passed: sealed.as_ref().map(|a| a.passed),
        certificate: None,
    };

    if let Some(attempt) = sealed {
        outcome.certificate = certificate::issue_if_qualified(conn, user_id, quiz.course_id, &attempt).await?;
    }

    Ok(outcome)
}
