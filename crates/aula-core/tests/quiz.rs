use aula_core::quiz::{start_attempt, submit_answer, AnswerSubmission};
use aula_core::CoreError;
use aula_entity::quiz::question::QuestionKind;
use aula_entity::user::Role;
use aula_test_helpers::schema::setup_schema;
use aula_test_helpers::seed;
use sea_orm::{Database, DbConn};
use test_log::test;
use uuid::Uuid;

struct TwoQuestionQuiz {
    quiz_id: Uuid,
    first_question: Uuid,
    first_correct: Uuid,
    second_question: Uuid,
    second_correct: Uuid,
    second_wrong: Uuid,
    course_id: Uuid,
}

/// One published quiz with two single-choice questions worth one point each.
async fn two_question_quiz(conn: &DbConn, author_id: Uuid, passing_score: i32) -> TwoQuestionQuiz {
    let course = seed::create_course(conn, author_id).await.unwrap();
    let quiz = seed::create_quiz(conn, course.id, None, author_id, passing_score)
        .await
        .unwrap();
    let (first, first_choices) = seed::create_question(
        conn,
        quiz.id,
        QuestionKind::SingleChoice,
        1,
        1,
        &[("right", true), ("wrong", false)],
    )
    .await
    .unwrap();
    let (second, second_choices) = seed::create_question(
        conn,
        quiz.id,
        QuestionKind::SingleChoice,
        1,
        2,
        &[("right", true), ("wrong", false)],
    )
    .await
    .unwrap();

    TwoQuestionQuiz {
        quiz_id: quiz.id,
        first_question: first.id,
        first_correct: first_choices[0].id,
        second_question: second.id,
        second_correct: second_choices[0].id,
        second_wrong: second_choices[1].id,
        course_id: course.id,
    }
}

fn select(choice: Uuid) -> AnswerSubmission {
    AnswerSubmission {
        selected_choices: vec![choice],
        text_answer: None,
    }
}

#[test(tokio::test)]
async fn test_half_right_fails_a_seventy_percent_quiz() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let fixture = two_question_quiz(conn, author.id, 70).await;

    let attempt = start_attempt(conn, student.id, fixture.quiz_id).await.unwrap();

    let first = submit_answer(
        conn,
        student.id,
        attempt.id,
        fixture.first_question,
        select(fixture.first_correct),
    )
    .await
    .unwrap();
    assert!(first.is_correct);
    assert!(!first.attempt_completed);
    assert_eq!(first.passed, None);

    let second = submit_answer(
        conn,
        student.id,
        attempt.id,
        fixture.second_question,
        select(fixture.second_wrong),
    )
    .await
    .unwrap();
    assert!(!second.is_correct);
    assert!(second.attempt_completed);
    assert_eq!(second.passed, Some(false));
    assert!(second.certificate.is_none());

    let sealed = aula_db::quiz::attempt::Query::get_by_id(conn, attempt.id)
        .await
        .unwrap()
        .unwrap();
    assert!(sealed.is_completed());
    assert_eq!(sealed.score, Some(1.0));

    // The quiz still counts as taken, pass or fail
    let enrollment = aula_db::enrollment::Query::get(conn, student.id, fixture.course_id)
        .await
        .unwrap()
        .unwrap();
    assert!(enrollment.quizzes_completed.contains(&fixture.quiz_id));
}

#[test(tokio::test)]
async fn test_full_marks_issue_the_certificate_once() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let fixture = two_question_quiz(conn, author.id, 70).await;

    let attempt = start_attempt(conn, student.id, fixture.quiz_id).await.unwrap();
    submit_answer(
        conn,
        student.id,
        attempt.id,
        fixture.first_question,
        select(fixture.first_correct),
    )
    .await
    .unwrap();
    let outcome = submit_answer(
        conn,
        student.id,
        attempt.id,
        fixture.second_question,
        select(fixture.second_correct),
    )
    .await
    .unwrap();

    assert_eq!(outcome.passed, Some(true));
    let certificate = outcome.certificate.expect("passing the only quiz completes the course");
    assert_eq!(certificate.score, 100.0);
    assert!(certificate
        .token
        .starts_with(&format!("{}-{}-", fixture.course_id, student.id)));

    // A second passed attempt returns the same certificate
    let retake = start_attempt(conn, student.id, fixture.quiz_id).await.unwrap();
    assert_ne!(retake.id, attempt.id);
    submit_answer(
        conn,
        student.id,
        retake.id,
        fixture.first_question,
        select(fixture.first_correct),
    )
    .await
    .unwrap();
    let outcome = submit_answer(
        conn,
        student.id,
        retake.id,
        fixture.second_question,
        select(fixture.second_correct),
    )
    .await
    .unwrap();
    assert_eq!(outcome.certificate.map(|c| c.id), Some(certificate.id));

    let verified = aula_core::certificate::verify(conn, &certificate.token).await.unwrap();
    assert_eq!(verified.map(|c| c.id), Some(certificate.id));
}

#[test(tokio::test)]
async fn test_answers_are_write_once() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let fixture = two_question_quiz(conn, author.id, 70).await;

    let attempt = start_attempt(conn, student.id, fixture.quiz_id).await.unwrap();
    submit_answer(
        conn,
        student.id,
        attempt.id,
        fixture.first_question,
        select(fixture.first_correct),
    )
    .await
    .unwrap();

    let err = submit_answer(
        conn,
        student.id,
        attempt.id,
        fixture.first_question,
        select(fixture.second_wrong),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CoreError::InvalidState(_)));

    // The stored answer is untouched
    let stored = aula_db::quiz::answer::Query::get(conn, attempt.id, fixture.first_question)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_correct);
    assert_eq!(stored.points_earned, 1.0);
}

#[test(tokio::test)]
async fn test_short_answer_text_is_required_and_trimmed() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let course = seed::create_course(conn, author.id).await.unwrap();
    let quiz = seed::create_quiz(conn, course.id, None, author.id, 50).await.unwrap();
    let (question, _) = seed::create_question(
        conn,
        quiz.id,
        QuestionKind::ShortAnswer,
        1,
        1,
        &[("Penicillin", true)],
    )
    .await
    .unwrap();

    let attempt = start_attempt(conn, student.id, quiz.id).await.unwrap();

    let err = submit_answer(conn, student.id, attempt.id, question.id, AnswerSubmission::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));

    let outcome = submit_answer(
        conn,
        student.id,
        attempt.id,
        question.id,
        AnswerSubmission {
            selected_choices: vec![],
            text_answer: Some("  PENICILLIN  ".to_owned()),
        },
    )
    .await
    .unwrap();
    assert!(outcome.is_correct);
    assert_eq!(outcome.passed, Some(true));
}

#[test(tokio::test)]
async fn test_starting_twice_resumes_the_open_attempt() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let fixture = two_question_quiz(conn, author.id, 70).await;

    let first = start_attempt(conn, student.id, fixture.quiz_id).await.unwrap();
    let second = start_attempt(conn, student.id, fixture.quiz_id).await.unwrap();
    assert_eq!(first.id, second.id);
}

#[test(tokio::test)]
async fn test_foreign_attempt_is_rejected() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let intruder = seed::create_user(conn, Role::Student).await.unwrap();
    let fixture = two_question_quiz(conn, author.id, 70).await;

    let attempt = start_attempt(conn, student.id, fixture.quiz_id).await.unwrap();
    let err = submit_answer(
        conn,
        intruder.id,
        attempt.id,
        fixture.first_question,
        select(fixture.first_correct),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CoreError::PermissionDenied(_)));
}

#[test(tokio::test)]
async fn test_unpublished_quiz_is_visible_to_its_author_only() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let course = seed::create_course(conn, author.id).await.unwrap();
    // Authoring mutations create drafts
    let draft = aula_db::quiz::quiz::Mutation::create(conn, course.id, None, author.id, "Draft", None, 30, 70)
        .await
        .unwrap();

    let err = start_attempt(conn, student.id, draft.id).await.unwrap_err();
    assert!(matches!(err, CoreError::PermissionDenied(_)));

    start_attempt(conn, author.id, draft.id).await.unwrap();
}
