use crate::certificate::query::Query;
use crate::{FlattenTransactionResultExt, RequireRecord};
use aula_entity::certificate::{self, Entity as CertificateEntity};
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::{sea_query, ActiveValue::Set, TransactionTrait, TryInsertResult};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Get-or-create on the (user, course) key. A duplicate issuance collapses
    /// into the existing row; a token collision with a *different* (user,
    /// course) pair surfaces as a unique-constraint `DbErr` the caller can
    /// retry with a fresh token.
    pub async fn get_or_create<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: Uuid,
        token: String,
        score: f64,
    ) -> Result<certificate::Model, DbErr> {
        if let Some(existing) = Query::for_user_course(conn, user_id, course_id).await? {
            return Ok(existing);
        }

        let val = certificate::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            course_id: Set(course_id),
            token: Set(token),
            score: Set(score),
            issued_at: Set(Utc::now().naive_utc()),
        };

        let res = conn
            .transaction(|conn| {
                Box::pin(async move {
                    let mut on_conflict =
                        sea_query::OnConflict::columns([certificate::Column::UserId, certificate::Column::CourseId]);
                    on_conflict.do_nothing();
                    CertificateEntity::insert(val)
                        .on_conflict(on_conflict)
                        .do_nothing()
                        .exec(conn)
                        .await
                })
            })
            .await
            .flatten_res()?;
        if matches!(res, TryInsertResult::Empty) {
            return Err(DbErr::RecordNotInserted);
        }

        tracing::debug!(%user_id, %course_id, "getting {} certificate", match res {
            TryInsertResult::Conflicted => "existing",
            _ => "issued",
        });

        Query::for_user_course(conn, user_id, course_id)
            .await
            .require("certificate after insertion")
    }
}
