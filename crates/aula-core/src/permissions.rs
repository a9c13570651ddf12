use aula_entity::course::course;
use aula_entity::quiz::quiz;
use aula_entity::user::{self, Role};
use std::collections::HashSet;

/// Capabilities granted by role, checked together with ownership and publish
/// flags by the predicates below. Replaces inline role-string comparisons.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Capability {
    // Browse published content and enroll
    Learn,
    // Create and edit courses, lessons and quizzes
    Author,
}

const ROLE_CAPABILITIES: &[(Role, Capability)] = &[
    (Role::Doctor, Capability::Learn),
    (Role::Doctor, Capability::Author),
    (Role::Student, Capability::Learn),
    (Role::Parent, Capability::Learn),
];

#[must_use]
pub fn capabilities(role: Role) -> HashSet<Capability> {
    ROLE_CAPABILITIES
        .iter()
        .filter_map(|(r, capability)| (*r == role).then_some(*capability))
        .collect()
}

#[must_use]
pub fn can_author_content(user: &user::Model) -> bool {
    capabilities(user.role).contains(&Capability::Author)
}

#[must_use]
pub fn can_edit_course(user: &user::Model, course: &course::Model) -> bool {
    can_author_content(user) && course.author_id == user.id
}

#[must_use]
pub fn can_edit_quiz(user: &user::Model, quiz: &quiz::Model) -> bool {
    can_author_content(user) && quiz.author_id == user.id
}

/// Unpublished quizzes are visible to their author only.
#[must_use]
pub fn can_view_quiz(user: &user::Model, quiz: &quiz::Model) -> bool {
    quiz.is_published || quiz.author_id == user.id
}

#[must_use]
pub fn can_view_course(user: &user::Model, course: &course::Model) -> bool {
    course.is_published || course.author_id == user.id
}

#[must_use]
pub fn can_enroll(user: &user::Model, course: &course::Model) -> bool {
    capabilities(user.role).contains(&Capability::Learn) && can_view_course(user, course)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(role: Role) -> user::Model {
        user::Model {
            id: Uuid::new_v4(),
            username: "u".to_owned(),
            first_name: "F".to_owned(),
            last_name: "L".to_owned(),
            role,
            bio: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    fn course(author_id: Uuid, published: bool) -> course::Model {
        course::Model {
            id: Uuid::new_v4(),
            title: "c".to_owned(),
            description: String::new(),
            author_id,
            is_published: published,
            language: course::Language::English,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn only_doctors_author() {
        assert!(can_author_content(&user(Role::Doctor)));
        assert!(!can_author_content(&user(Role::Student)));
        assert!(!can_author_content(&user(Role::Parent)));
    }

    #[test]
    fn author_edits_own_course_only() {
        let doctor = user(Role::Doctor);
        let own = course(doctor.id, false);
        let other = course(Uuid::new_v4(), true);
        assert!(can_edit_course(&doctor, &own));
        assert!(!can_edit_course(&doctor, &other));
    }

    #[test]
    fn unpublished_course_hidden_from_non_authors() {
        let student = user(Role::Student);
        let draft = course(Uuid::new_v4(), false);
        assert!(!can_view_course(&student, &draft));
        assert!(!can_enroll(&student, &draft));
        assert!(can_enroll(&student, &course(Uuid::new_v4(), true)));
    }
}
