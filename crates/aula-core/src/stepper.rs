use crate::error::CoreError;
use aula_entity::course::lesson;
use aula_entity::quiz::quiz;
use sea_orm::{ConnectionTrait, TransactionTrait};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub lesson_completed: bool,
}

/// Out-of-range indices clamp to the nearest bound instead of erroring.
fn clamp_step(step_index: u32, total_steps: u32) -> u32 {
    step_index.clamp(1, total_steps)
}

/// Records a content step as viewed. Once the viewed set covers every step of
/// the lesson, the lesson is added to the enrollment's completed set.
/// Re-marking an already-viewed step is a no-op.
pub async fn mark_step_viewed<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    user_id: Uuid,
    lesson_id: Uuid,
    step_index: u32,
) -> Result<StepOutcome, CoreError> {
    let lesson = aula_db::course::lesson::Query::get_by_id(conn, lesson_id)
        .await?
        .ok_or(CoreError::NotFound("lesson"))?;
    let module = aula_db::course::module::Query::get_by_id(conn, lesson.module_id)
        .await?
        .ok_or(CoreError::NotFound("module"))?;

    let total_steps = aula_db::course::content_step::Query::count_for_lesson(conn, lesson_id).await?;
    if total_steps == 0 {
        return Err(CoreError::Validation("lesson has no content steps".to_owned()));
    }
    let step = clamp_step(step_index, u32::try_from(total_steps).unwrap_or(u32::MAX));

    // First touch of a course counts as enrolling in it
    aula_db::enrollment::Mutation::enroll(conn, user_id, module.course_id).await?;

    let total_steps = total_steps as usize;
    let updated = aula_db::enrollment::Mutation::update(conn, user_id, module.course_id, move |enrollment| {
        enrollment.steps_completed.insert(lesson_id, step);
        if enrollment.steps_completed.completed_steps(&lesson_id) >= total_steps {
            enrollment.lessons_completed.insert(lesson_id);
        }
    })
    .await?;

    Ok(StepOutcome {
        lesson_completed: updated.lessons_completed.contains(&lesson_id),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum NextStep {
    Lesson(lesson::Model),
    Quiz(quiz::Model),
}

/// What the user should open after the given lesson: the next lesson in
/// (module position, lesson position) order, the module quiz once the last
/// lesson is reached, or the first lesson of a later module once the quiz is
/// done or absent.
pub async fn next_step<C: ConnectionTrait + TransactionTrait>(
    conn: &C,
    user_id: Uuid,
    lesson_id: Uuid,
) -> Result<Option<NextStep>, CoreError> {
    let lesson = aula_db::course::lesson::Query::get_by_id(conn, lesson_id)
        .await?
        .ok_or(CoreError::NotFound("lesson"))?;
    let module = aula_db::course::module::Query::get_by_id(conn, lesson.module_id)
        .await?
        .ok_or(CoreError::NotFound("module"))?;

    let siblings = aula_db::course::lesson::Query::by_module(conn, module.id).await?;
    if let Some(next) = siblings.into_iter().find(|l| l.position > lesson.position) {
        return Ok(Some(NextStep::Lesson(next)));
    }

    let enrollment = aula_db::enrollment::Query::get(conn, user_id, module.course_id).await?;
    if let Some(quiz) = aula_db::quiz::quiz::Query::by_module(conn, module.id).await? {
        let quiz_done = enrollment
            .as_ref()
            .is_some_and(|e| e.quizzes_completed.contains(&quiz.id));
        if !quiz_done {
            return Ok(Some(NextStep::Quiz(quiz)));
        }
    }

    let modules = aula_db::course::module::Query::by_course(conn, module.course_id).await?;
    for later in modules.into_iter().filter(|m| m.position > module.position) {
        let mut lessons = aula_db::course::lesson::Query::by_module(conn, later.id).await?;
        if !lessons.is_empty() {
            return Ok(Some(NextStep::Lesson(lessons.remove(0))));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::clamp_step;

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(clamp_step(0, 5), 1);
        assert_eq!(clamp_step(1, 5), 1);
        assert_eq!(clamp_step(3, 5), 3);
        assert_eq!(clamp_step(5, 5), 5);
        assert_eq!(clamp_step(99, 5), 5);
    }

    #[test]
    fn single_step_lesson() {
        assert_eq!(clamp_step(0, 1), 1);
        assert_eq!(clamp_step(7, 1), 1);
    }
}
