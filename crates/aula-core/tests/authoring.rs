use aula_core::authoring;
use aula_core::CoreError;
use aula_db::quiz::question::mutation::NewChoice;
use aula_entity::course::content_step::StepKind;
use aula_entity::course::course::Language;
use aula_entity::quiz::question::QuestionKind;
use aula_entity::user::Role;
use aula_test_helpers::schema::setup_schema;
use aula_test_helpers::seed;
use sea_orm::Database;
use test_log::test;

fn yes_no() -> Vec<NewChoice> {
    vec![
        NewChoice {
            text: "yes".to_owned(),
            is_correct: true,
        },
        NewChoice {
            text: "no".to_owned(),
            is_correct: false,
        },
    ]
}

#[test(tokio::test)]
async fn test_students_cannot_author() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let student = seed::create_user(conn, Role::Student).await.unwrap();

    let err = authoring::create_course(conn, student.id, "Anatomy", "", Language::Russian)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::PermissionDenied(_)));
}

#[test(tokio::test)]
async fn test_author_builds_and_publishes_a_course() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let doctor = seed::create_user(conn, Role::Doctor).await.unwrap();

    let course = authoring::create_course(conn, doctor.id, "Anatomy", "Bones and joints", Language::Russian)
        .await
        .unwrap();
    assert!(!course.is_published);

    let module = authoring::add_module(conn, doctor.id, course.id, "Skeleton", "", 1)
        .await
        .unwrap();
    let lesson = authoring::add_lesson(conn, doctor.id, module.id, "The spine", "", 15, 1)
        .await
        .unwrap();
    authoring::add_step(conn, doctor.id, lesson.id, "Vertebrae", "...", StepKind::Text, 1)
        .await
        .unwrap();

    let published = authoring::publish_course(conn, doctor.id, course.id, true).await.unwrap();
    assert!(published.is_published);
}

#[test(tokio::test)]
async fn test_only_the_author_edits_a_course() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let other_doctor = seed::create_user(conn, Role::Doctor).await.unwrap();
    let course = seed::create_course(conn, author.id).await.unwrap();

    let err = authoring::add_module(conn, other_doctor.id, course.id, "Intro", "", 1)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::PermissionDenied(_)));
}

#[test(tokio::test)]
async fn test_quiz_authoring_is_guarded_and_edits_replace_choices() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let doctor = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let course = seed::create_course(conn, doctor.id).await.unwrap();

    let quiz = authoring::create_quiz(conn, doctor.id, course.id, None, "Checkpoint", None, 30, 70)
        .await
        .unwrap();
    assert!(!quiz.is_published);
    assert_eq!(quiz.author_id, doctor.id);

    let question = authoring::add_question(
        conn,
        doctor.id,
        quiz.id,
        "Is the femur a bone?",
        QuestionKind::TrueFalse,
        1,
        None,
        1,
        yes_no(),
    )
    .await
    .unwrap();

    let err = authoring::add_question(
        conn,
        student.id,
        quiz.id,
        "Unauthorized",
        QuestionKind::TrueFalse,
        1,
        None,
        2,
        yes_no(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CoreError::PermissionDenied(_)));

    authoring::replace_question_choices(
        conn,
        doctor.id,
        question.id,
        vec![NewChoice {
            text: "definitely".to_owned(),
            is_correct: true,
        }],
    )
    .await
    .unwrap();

    let choices = aula_db::quiz::question::Query::choices(conn, question.id).await.unwrap();
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].text, "definitely");

    authoring::delete_question(conn, doctor.id, question.id).await.unwrap();
    assert_eq!(
        aula_db::quiz::question::Query::count_for_quiz(conn, quiz.id).await.unwrap(),
        0
    );
}
