use aula_entity::user::Role;
use aula_test_helpers::schema::setup_schema;
use aula_test_helpers::seed;
use sea_orm::{Database, SqlErr};
use test_log::test;

#[test(tokio::test)]
async fn test_get_or_create_is_idempotent() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let student = seed::create_user(conn, Role::Student).await.unwrap();
    let course = seed::create_course(conn, author.id).await.unwrap();

    let first = aula_db::certificate::Mutation::get_or_create(conn, student.id, course.id, "tok-1".to_owned(), 90.0)
        .await
        .unwrap();
    let second = aula_db::certificate::Mutation::get_or_create(conn, student.id, course.id, "tok-2".to_owned(), 50.0)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.token, "tok-1");
    assert_eq!(second.score, 90.0);
}

#[test(tokio::test)]
async fn test_token_collision_is_a_unique_violation() {
    let conn = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(conn).await.unwrap();

    let author = seed::create_user(conn, Role::Doctor).await.unwrap();
    let first_student = seed::create_user(conn, Role::Student).await.unwrap();
    let second_student = seed::create_user(conn, Role::Student).await.unwrap();
    let course = seed::create_course(conn, author.id).await.unwrap();

    aula_db::certificate::Mutation::get_or_create(conn, first_student.id, course.id, "same-token".to_owned(), 80.0)
        .await
        .unwrap();
    let err =
        aula_db::certificate::Mutation::get_or_create(conn, second_student.id, course.id, "same-token".to_owned(), 80.0)
            .await
            .unwrap_err();

    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));
}
