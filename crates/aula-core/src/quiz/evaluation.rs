use aula_entity::quiz::choice;
use aula_entity::quiz::question::QuestionKind;
use std::collections::BTreeSet;
use uuid::Uuid;

/// Correctness by question kind. No partial credit anywhere.
///
/// `selected` must already be restricted to choices of this question;
/// `text_answer` must already be trimmed.
#[must_use]
pub fn evaluate(
    kind: QuestionKind,
    choices: &[choice::Model],
    selected: &[Uuid],
    text_answer: Option<&str>,
) -> bool {
    match kind {
        // Exactly one selection, and it is the correct one
        QuestionKind::SingleChoice | QuestionKind::TrueFalse => {
            let [only] = selected else {
                return false;
            };
            choices.iter().any(|c| c.id == *only && c.is_correct)
        }
        // The selected set must equal the correct set exactly
        QuestionKind::MultipleChoice => {
            let correct: BTreeSet<Uuid> = choices.iter().filter(|c| c.is_correct).map(|c| c.id).collect();
            let selected: BTreeSet<Uuid> = selected.iter().copied().collect();
            !correct.is_empty() && selected == correct
        }
        // Case-insensitive exact match against any accepted answer. Unicode
        // lowercasing, not ASCII: course content is ru/en/ky.
        QuestionKind::ShortAnswer => {
            let Some(text) = text_answer else {
                return false;
            };
            let text = text.to_lowercase();
            choices
                .iter()
                .filter(|c| c.is_correct)
                .any(|c| c.text.trim().to_lowercase() == text)
        }
    }
}

/// Score as a percentage of the total; zero total scores as 0 (never passed).
#[must_use]
pub fn percentage(score: f64, total_points: f64) -> f64 {
    if total_points <= 0.0 {
        return 0.0;
    }
    score / total_points * 100.0
}
