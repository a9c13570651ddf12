use crate::enrollment::query::Query;
use crate::{FlattenTransactionResultExt, RequireRecord};
use aula_entity::enrollment::{self, Entity as EnrollmentEntity};
use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::{sea_query, ActiveValue::Set, IntoActiveValue, TransactionTrait, TryInsertResult};
use uuid::Uuid;

fn create_on_conflict() -> sea_query::OnConflict {
    sea_query::OnConflict::columns([enrollment::Column::UserId, enrollment::Column::CourseId])
}

pub struct Mutation;

impl Mutation {
    /// Idempotent enroll: insert-or-ignore on the (user, course) key, then
    /// read back whichever row won.
    pub async fn enroll<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<enrollment::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let val = enrollment::ActiveModel {
            user_id: user_id.into_active_value(),
            course_id: course_id.into_active_value(),
            lessons_completed: Set(enrollment::CompletedSet::default()),
            quizzes_completed: Set(enrollment::CompletedSet::default()),
            steps_completed: Set(enrollment::StepProgress::default()),
            enrolled_at: Set(now),
            last_access: Set(now),
        };

        tracing::trace!(%user_id, %course_id, "inserting enrollment");
        let res = conn
            .transaction(|conn| {
                Box::pin(async move {
                    let mut on_conflict = create_on_conflict();
                    on_conflict.do_nothing();
                    EnrollmentEntity::insert(val)
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

        tracing::debug!(%user_id, %course_id, "getting {} enrollment", match res {
            TryInsertResult::Conflicted => "existing",
            _ => "created",
        });

        Query::get(conn, user_id, course_id)
            .await
            .require("enrollment after insertion")
    }

    /// Read-modify-write on the single enrollment row under one transaction,
    /// so two near-simultaneous step marks cannot lose updates.
    pub async fn update<C, F>(
        conn: &C,
        user_id: Uuid,
        course_id: Uuid,
        mutate: F,
    ) -> Result<enrollment::Model, DbErr>
    where
        C: ConnectionTrait + TransactionTrait,
        F: FnOnce(&mut enrollment::Model) + Send + 'static,
    {
        conn.transaction(|txn| {
            Box::pin(async move {
                let mut model = Query::get(txn, user_id, course_id).await.require("enrollment")?;
                mutate(&mut model);

                let val = enrollment::ActiveModel {
                    user_id: sea_orm::ActiveValue::Unchanged(user_id),
                    course_id: sea_orm::ActiveValue::Unchanged(course_id),
                    lessons_completed: Set(model.lessons_completed),
                    quizzes_completed: Set(model.quizzes_completed),
                    steps_completed: Set(model.steps_completed),
                    enrolled_at: sea_orm::ActiveValue::NotSet,
                    last_access: Set(Utc::now().naive_utc()),
                };
                val.update(txn).await
            })
        })
        .await
        .flatten_res()
    }
}
