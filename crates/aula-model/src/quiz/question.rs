use crate::convert::FromDbModel;
use aula_entity::quiz::choice::Model as ChoiceModel;
use aula_entity::quiz::question::{Model as QuestionModel, QuestionKind as QuestionKindModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, Serialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct Choice {
    pub id: Uuid,
    pub text: String,
    // None once the question has been sanitized for an unanswered view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

#[derive(Deserialize, Serialize, ToSchema, Clone)]
pub struct Question {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub text: String,
    pub kind: QuestionKind,
    pub points: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub position: i32,
    pub choices: Vec<Choice>,
}

impl Question {
    #[must_use]
    pub fn from_parts(question: QuestionModel, choices: Vec<ChoiceModel>) -> Self {
        Self {
            id: question.id,
            quiz_id: question.quiz_id,
            text: question.text,
            kind: FromDbModel::from_db_model(question.kind),
            points: question.points,
            explanation: question.explanation,
            position: question.position,
            choices: choices
                .into_iter()
                .map(|choice| Choice {
                    id: choice.id,
                    text: choice.text,
                    is_correct: Some(choice.is_correct),
                })
                .collect(),
        }
    }

    /// Strips grading information before the question is shown to a student
    /// who has not answered it yet.
    pub fn sanitize_for_client(&mut self) {
        self.explanation = None;
        for choice in &mut self.choices {
            choice.is_correct = None;
        }
    }
}

impl FromDbModel<QuestionKindModel> for QuestionKind {
    fn from_db_model(model: QuestionKindModel) -> Self {
        match model {
            QuestionKindModel::SingleChoice => QuestionKind::SingleChoice,
            QuestionKindModel::MultipleChoice => QuestionKind::MultipleChoice,
            QuestionKindModel::TrueFalse => QuestionKind::TrueFalse,
            QuestionKindModel::ShortAnswer => QuestionKind::ShortAnswer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_with_choices() -> Question {
        let question = QuestionModel {
            id: Uuid::new_v4(),
            quiz_id: Uuid::new_v4(),
            text: "Which of these are antibiotics?".to_owned(),
            kind: QuestionKindModel::MultipleChoice,
            points: 2,
            explanation: Some("Ibuprofen is an anti-inflammatory.".to_owned()),
            position: 1,
        };
        let choices = vec![
            ChoiceModel {
                id: Uuid::new_v4(),
                question_id: question.id,
                text: "Penicillin".to_owned(),
                is_correct: true,
            },
            ChoiceModel {
                id: Uuid::new_v4(),
                question_id: question.id,
                text: "Ibuprofen".to_owned(),
                is_correct: false,
            },
        ];
        Question::from_parts(question, choices)
    }

    #[test]
    fn sanitize_hides_correctness_and_explanation() {
        let mut question = question_with_choices();
        assert!(question.choices.iter().all(|c| c.is_correct.is_some()));

        question.sanitize_for_client();

        assert!(question.explanation.is_none());
        assert!(question.choices.iter().all(|c| c.is_correct.is_none()));
    }
}
