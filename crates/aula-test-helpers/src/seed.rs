//! Builders for the fixture rows the integration tests need. Every function
//! inserts the row and hands back the model it wrote.

use aula_entity::course::{content_step, course, lesson, module};
use aula_entity::quiz::{choice, question, quiz};
use aula_entity::user::{self, Role};
use chrono::Utc;
use sea_orm::{DbConn, DbErr, EntityTrait, IntoActiveModel};
use uuid::Uuid;

pub async fn create_user(db: &DbConn, role: Role) -> Result<user::Model, DbErr> {
    let id = Uuid::new_v4();
    let model = user::Model {
        id,
        username: format!("user-{}", id.simple()),
        first_name: "Aisuluu".to_owned(),
        last_name: "Bekova".to_owned(),
        role,
        bio: None,
        created_at: Utc::now().naive_utc(),
    };
    user::Entity::insert(model.clone().into_active_model()).exec(db).await?;
    Ok(model)
}

pub async fn create_course(db: &DbConn, author_id: Uuid) -> Result<course::Model, DbErr> {
    let now = Utc::now().naive_utc();
    let model = course::Model {
        id: Uuid::new_v4(),
        title: "Pediatric basics".to_owned(),
        description: "Introductory course".to_owned(),
        author_id,
        is_published: true,
        language: course::Language::Russian,
        created_at: now,
        updated_at: now,
    };
    course::Entity::insert(model.clone().into_active_model()).exec(db).await?;
    Ok(model)
}

pub async fn create_module(db: &DbConn, course_id: Uuid, position: i32) -> Result<module::Model, DbErr> {
    let model = module::Model {
        id: Uuid::new_v4(),
        course_id,
        title: format!("Module {position}"),
        description: String::new(),
        position,
    };
    module::Entity::insert(model.clone().into_active_model()).exec(db).await?;
    Ok(model)
}

pub async fn create_lesson(db: &DbConn, module_id: Uuid, position: i32) -> Result<lesson::Model, DbErr> {
    let model = lesson::Model {
        id: Uuid::new_v4(),
        module_id,
        title: format!("Lesson {position}"),
        description: String::new(),
        estimated_minutes: 10,
        position,
    };
    lesson::Entity::insert(model.clone().into_active_model()).exec(db).await?;
    Ok(model)
}

pub async fn create_steps(db: &DbConn, lesson_id: Uuid, count: i32) -> Result<Vec<content_step::Model>, DbErr> {
    let mut steps = Vec::with_capacity(count.unsigned_abs() as usize);
    for position in 1..=count {
        let model = content_step::Model {
            id: Uuid::new_v4(),
            lesson_id,
            title: format!("Step {position}"),
            body: "...".to_owned(),
            kind: content_step::StepKind::Text,
            position,
        };
        content_step::Entity::insert(model.clone().into_active_model()).exec(db).await?;
        steps.push(model);
    }
    Ok(steps)
}

pub async fn create_quiz(
    db: &DbConn,
    course_id: Uuid,
    module_id: Option<Uuid>,
    author_id: Uuid,
    passing_score: i32,
) -> Result<quiz::Model, DbErr> {
    let now = Utc::now().naive_utc();
    let model = quiz::Model {
        id: Uuid::new_v4(),
        course_id,
        module_id,
        author_id,
        title: "Checkpoint".to_owned(),
        description: None,
        time_limit_minutes: 30,
        passing_score,
        is_published: true,
        created_at: now,
        updated_at: now,
    };
    quiz::Entity::insert(model.clone().into_active_model()).exec(db).await?;
    Ok(model)
}

/// Inserts a question with its choices; `choices` pairs text with correctness.
pub async fn create_question(
    db: &DbConn,
    quiz_id: Uuid,
    kind: question::QuestionKind,
    points: i32,
    position: i32,
    choices: &[(&str, bool)],
) -> Result<(question::Model, Vec<choice::Model>), DbErr> {
    let model = question::Model {
        id: Uuid::new_v4(),
        quiz_id,
        text: format!("Question {position}"),
        kind,
        points,
        explanation: None,
        position,
    };
    question::Entity::insert(model.clone().into_active_model()).exec(db).await?;

    let mut inserted = Vec::with_capacity(choices.len());
    for (text, is_correct) in choices {
        let choice = choice::Model {
            id: Uuid::new_v4(),
            question_id: model.id,
            text: (*text).to_owned(),
            is_correct: *is_correct,
        };
        choice::Entity::insert(choice.clone().into_active_model()).exec(db).await?;
        inserted.push(choice);
    }
    Ok((model, inserted))
}
