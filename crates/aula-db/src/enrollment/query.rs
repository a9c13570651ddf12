use aula_entity::enrollment::{self, Entity as Enrollment, Model as EnrollmentModel};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<EnrollmentModel>, DbErr> {
        Enrollment::find_by_id((user_id, course_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %course_id, "failed to load enrollment");
            })
    }

    pub async fn for_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<EnrollmentModel>, DbErr> {
        Enrollment::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .order_by_desc(enrollment::Column::LastAccess)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to load user enrollments");
            })
    }
}
