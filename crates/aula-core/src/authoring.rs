//! Content authoring on behalf of a user. Every function checks the
//! permission predicates before touching storage; the db-layer mutations
//! themselves stay unguarded.

use crate::error::CoreError;
use crate::permissions;
use aula_db::quiz::question::mutation::NewChoice;
use aula_entity::course::content_step::StepKind;
use aula_entity::course::course::Language;
use aula_entity::course::{content_step, course, lesson, module};
use aula_entity::quiz::question::{self, QuestionKind};
use aula_entity::quiz::quiz;
use aula_entity::user;
use sea_orm::{ConnectionTrait, TransactionTrait};
use uuid::Uuid;

async fn require_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<user::Model, CoreError> {
    aula_db::user::Query::find_by_id(conn, user_id)
        .await?
        .ok_or(CoreError::NotFound("user"))
}

async fn require_editable_course<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
) -> Result<course::Model, CoreError> {
    let user = require_user(conn, user_id).await?;
    let course = aula_db::course::course::Query::get_by_id(conn, course_id)
        .await?
        .ok_or(CoreError::NotFound("course"))?;
    if !permissions::can_edit_course(&user, &course) {
        return Err(CoreError::PermissionDenied("not the course author"));
    }
    Ok(course)
}

async fn require_editable_quiz<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    quiz_id: Uuid,
) -> Result<quiz::Model, CoreError> {
    let user = require_user(conn, user_id).await?;
    let quiz = aula_db::quiz::quiz::Query::get_by_id(conn, quiz_id)
        .await?
        .ok_or(CoreError::NotFound("quiz"))?;
    if !permissions::can_edit_quiz(&user, &quiz) {
        return Err(CoreError::PermissionDenied("not the quiz author"));
    }
    Ok(quiz)
}

/// New courses start as unpublished drafts.
pub async fn create_course<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    title: &str,
    description: &str,
    language: Language,
) -> Result<course::Model, CoreError> {
    let user = require_user(conn, user_id).await?;
    if !permissions::can_author_content(&user) {
        return Err(CoreError::PermissionDenied("role cannot author content"));
    }
    Ok(aula_db::course::course::Mutation::create(conn, user_id, title, description, language).await?)
}

pub async fn publish_course<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
    published: bool,
) -> Result<course::Model, CoreError> {
    require_editable_course(conn, user_id, course_id).await?;
    Ok(aula_db::course::course::Mutation::set_published(conn, course_id, published).await?)
}

pub async fn add_module<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
    title: &str,
    description: &str,
    position: i32,
) -> Result<module::Model, CoreError> {
    require_editable_course(conn, user_id, course_id).await?;
    Ok(aula_db::course::module::Mutation::create(conn, course_id, title, description, position).await?)
}

pub async fn add_lesson<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    module_id: Uuid,
    title: &str,
    description: &str,
    estimated_minutes: i32,
    position: i32,
) -> Result<lesson::Model, CoreError> {
    let module = aula_db::course::module::Query::get_by_id(conn, module_id)
        .await?
        .ok_or(CoreError::NotFound("module"))?;
    require_editable_course(conn, user_id, module.course_id).await?;
    Ok(aula_db::course::lesson::Mutation::create(conn, module_id, title, description, estimated_minutes, position).await?)
}

pub async fn add_step<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    lesson_id: Uuid,
    title: &str,
    body: &str,
    kind: StepKind,
    position: i32,
) -> Result<content_step::Model, CoreError> {
    let lesson = aula_db::course::lesson::Query::get_by_id(conn, lesson_id)
        .await?
        .ok_or(CoreError::NotFound("lesson"))?;
    let module = aula_db::course::module::Query::get_by_id(conn, lesson.module_id)
        .await?
        .ok_or(CoreError::NotFound("module"))?;
    require_editable_course(conn, user_id, module.course_id).await?;
    Ok(aula_db::course::content_step::Mutation::create(conn, lesson_id, title, body, kind, position).await?)
}

/// New quizzes start as unpublished drafts owned by the caller.
#[allow(clippy::too_many_arguments)]
pub async fn create_quiz<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    course_id: Uuid,
    module_id: Option<Uuid>,
    title: &str,
    description: Option<&str>,
    time_limit_minutes: i32,
    passing_score: i32,
) -> Result<quiz::Model, CoreError> {
    require_editable_course(conn, user_id, course_id).await?;
    Ok(aula_db::quiz::quiz::Mutation::create(
        conn,
        course_id,
        module_id,
        user_id,
        title,
        description,
        time_limit_minutes,
        passing_score,
    )
    .await?)
}

pub async fn publish_quiz<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    quiz_id: Uuid,
    published: bool,
) -> Result<quiz::Model, CoreError> {
    require_editable_quiz(conn, user_id, quiz_id).await?;
    Ok(aula_db::quiz::quiz::Mutation::set_published(conn, quiz_id, published).await?)
}

#[allow(clippy::too_many_arguments)]
pub async fn add_question<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    user_id: Uuid,
    quiz_id: Uuid,
    text: &str,
    kind: QuestionKind,
    points: i32,
    explanation: Option<&str>,
    position: i32,
    choices: Vec<NewChoice>,
) -> Result<question::Model, CoreError> {
    require_editable_quiz(conn, user_id, quiz_id).await?;
    Ok(
        aula_db::quiz::question::Mutation::create(conn, quiz_id, text, kind, points, explanation, position, choices)
            .await?,
    )
}

/// Editing a question swaps out its whole choice set.
pub async fn replace_question_choices<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    user_id: Uuid,
    question_id: Uuid,
    choices: Vec<NewChoice>,
) -> Result<(), CoreError> {
    let question = aula_db::quiz::question::Query::get_by_id(conn, question_id)
        .await?
        .ok_or(CoreError::NotFound("question"))?;
    require_editable_quiz(conn, user_id, question.quiz_id).await?;
    Ok(aula_db::quiz::question::Mutation::replace_choices(conn, question_id, choices).await?)
}

pub async fn delete_question<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    user_id: Uuid,
    question_id: Uuid,
) -> Result<(), CoreError> {
    let question = aula_db::quiz::question::Query::get_by_id(conn, question_id)
        .await?
        .ok_or(CoreError::NotFound("question"))?;
    require_editable_quiz(conn, user_id, question.quiz_id).await?;
    Ok(aula_db::quiz::question::Mutation::delete(conn, question_id).await?)
}
