use sea_orm::{ConnectionTrait, DbConn, DbErr};

pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    let ddl = match db.get_database_backend() {
        sea_orm::DatabaseBackend::Sqlite => include_str!("schema/sqlite.sql"),
        #[allow(clippy::unimplemented)]
        _ => unimplemented!("test schema is only provided for sqlite"),
    };

    db.execute_unprepared(ddl).await?;
    Ok(())
}
