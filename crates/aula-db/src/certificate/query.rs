use aula_entity::certificate::{self, Entity as Certificate, Model as CertificateModel};
use sea_orm::prelude::*;
use sea_orm::QueryOrder;
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn for_user_course<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<CertificateModel>, DbErr> {
        Certificate::find()
            .filter(certificate::Column::UserId.eq(user_id))
            .filter(certificate::Column::CourseId.eq(course_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, %course_id, "failed to load certificate");
            })
    }

    /// Public verification lookup.
    pub async fn by_token<C: ConnectionTrait>(conn: &C, token: &str) -> Result<Option<CertificateModel>, DbErr> {
        Certificate::find()
            .filter(certificate::Column::Token.eq(token))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %token, "failed to load certificate by token");
            })
    }

    pub async fn for_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<CertificateModel>, DbErr> {
        Certificate::find()
            .filter(certificate::Column::UserId.eq(user_id))
            .order_by_desc(certificate::Column::IssuedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %user_id, "failed to load user certificates");
            })
    }
}
