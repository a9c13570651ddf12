use aula_entity::course::module::{self, Entity as Module, Model as ModuleModel};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get_by_id<C: ConnectionTrait>(conn: &C, module_id: Uuid) -> Result<Option<ModuleModel>, DbErr> {
        Module::find_by_id(module_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %module_id, "failed to load module");
        })
    }

    pub async fn by_course<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Vec<ModuleModel>, DbErr> {
        Module::find()
            .filter(module::Column::CourseId.eq(course_id))
            .order_by_asc(module::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %course_id, "failed to load course modules");
            })
    }
}
