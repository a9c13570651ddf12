use aula_core::stepper::{mark_step_viewed, next_step, NextStep};
use aula_core::CoreError;
use aula_entity::user::Role;
use aula_test_helpers::schema::setup_schema;
use aula_test_helpers::seed;
use sea_orm::Database;
use test_log::test;

#[test(tokio::test)]
async fn test_lesson_completes_once_every_step_is_viewed() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let course = seed::create_course(conn, author.id).await.unwrap();
    let module = seed::create_module(conn, course.id, 1).await.unwrap();
    let lesson = seed::create_lesson(conn, module.id, 1).await.unwrap();
    seed::create_steps(conn, lesson.id, 3).await.unwrap();

    // Any viewing order works
    for (step, done) in [(2, false), (3, false), (1, true)] {
        let outcome = mark_step_viewed(conn, student.id, lesson.id, step).await.unwrap();
        assert_eq!(outcome.lesson_completed, done, "after step {step}");
    }

    let enrollment = aula_db::enrollment::Query::get(conn, student.id, course.id)
        .await
        .unwrap()
        .unwrap();
    assert!(enrollment.lessons_completed.contains(&lesson.id));
    assert_eq!(enrollment.steps_completed.completed_steps(&lesson.id), 3);
}

#[test(tokio::test)]
async fn test_remarking_a_step_changes_nothing() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let course = seed::create_course(conn, author.id).await.unwrap();
    let module = seed::create_module(conn, course.id, 1).await.unwrap();
    let lesson = seed::create_lesson(conn, module.id, 1).await.unwrap();
    seed::create_steps(conn, lesson.id, 3).await.unwrap();

    mark_step_viewed(conn, student.id, lesson.id, 1).await.unwrap();
    let outcome = mark_step_viewed(conn, student.id, lesson.id, 1).await.unwrap();
    assert!(!outcome.lesson_completed);

    let enrollment = aula_db::enrollment::Query::get(conn, student.id, course.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(enrollment.steps_completed.completed_steps(&lesson.id), 1);
}

#[test(tokio::test)]
async fn test_out_of_range_indices_clamp_to_the_bounds() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let course = seed::create_course(conn, author.id).await.unwrap();
    let module = seed::create_module(conn, course.id, 1).await.unwrap();
    let lesson = seed::create_lesson(conn, module.id, 1).await.unwrap();
    seed::create_steps(conn, lesson.id, 3).await.unwrap();

    mark_step_viewed(conn, student.id, lesson.id, 99).await.unwrap();
    mark_step_viewed(conn, student.id, lesson.id, 0).await.unwrap();

    let enrollment = aula_db::enrollment::Query::get(conn, student.id, course.id)
        .await
        .unwrap()
        .unwrap();
    let steps = &enrollment.steps_completed.0[&lesson.id];
    assert!(steps.contains(&1));
    assert!(steps.contains(&3));
    assert!(!steps.contains(&99));
}

#[test(tokio::test)]
async fn test_a_lesson_without_steps_cannot_be_marked() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let course = seed::create_course(conn, author.id).await.unwrap();
    let module = seed::create_module(conn, course.id, 1).await.unwrap();
    let lesson = seed::create_lesson(conn, module.id, 1).await.unwrap();

    let err = mark_step_viewed(conn, student.id, lesson.id, 1).await.unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
}

#[test(tokio::test)]
async fn test_next_step_walks_lessons_then_quiz_then_next_module() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let course = seed::create_course(conn, author.id).await.unwrap();

    let first_module = seed::create_module(conn, course.id, 1).await.unwrap();
    let first_lesson = seed::create_lesson(conn, first_module.id, 1).await.unwrap();
    let second_lesson = seed::create_lesson(conn, first_module.id, 2).await.unwrap();
    let module_quiz = seed::create_quiz(conn, course.id, Some(first_module.id), author.id, 70)
        .await
        .unwrap();
    let second_module = seed::create_module(conn, course.id, 2).await.unwrap();
    let third_lesson = seed::create_lesson(conn, second_module.id, 1).await.unwrap();

    let next = next_step(conn, student.id, first_lesson.id).await.unwrap();
    assert_eq!(next, Some(NextStep::Lesson(second_lesson.clone())));

    // Last lesson of the module points at the module quiz
    let next = next_step(conn, student.id, second_lesson.id).await.unwrap();
    assert_eq!(next, Some(NextStep::Quiz(module_quiz.clone())));

    // Once the quiz is done, continue with the next module
    aula_db::enrollment::Mutation::enroll(conn, student.id, course.id)
        .await
        .unwrap();
    let quiz_id = module_quiz.id;
    aula_db::enrollment::Mutation::update(conn, student.id, course.id, move |enrollment| {
        enrollment.quizzes_completed.insert(quiz_id);
    })
    .await
    .unwrap();
    let next = next_step(conn, student.id, second_lesson.id).await.unwrap();
    assert_eq!(next, Some(NextStep::Lesson(third_lesson.clone())));

    assert_eq!(next_step(conn, student.id, third_lesson.id).await.unwrap(), None);
}
