use rand::Rng;
use serde::Serialize;

pub const QUESTION_SOURCE: &str = "Glassdoor";
pub const SOLUTION_SOURCE: &str = "Generated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Maps the labels Glassdoor renders on an interview card. Anything else
    /// (including a missing label) is treated as unknown, never an error.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Difficult Interview" => Some(Difficulty::Hard),
            "Average Interview" => Some(Difficulty::Medium),
            "Easy Interview" => Some(Difficulty::Easy),
            _ => None,
        }
    }
}

// Checked in order; role strings often contain several keywords, so "Senior
// Manager" lands in the manager bucket, not the senior one.
const EXPERIENCE_BUCKETS: [(&str, (u8, u8)); 8] = [
    ("intern", (0, 0)),
    ("entry", (0, 2)),
    ("manager", (5, 10)),
    ("director", (10, 15)),
    ("president", (10, 20)),
    ("chief", (10, 20)),
    ("senior", (5, 7)),
    ("principal", (8, 10)),
];

const DEFAULT_EXPERIENCE_RANGE: (u8, u8) = (0, 7);

/// Estimates years of experience from a role title via case-insensitive
/// keyword matching, drawing from the matched bucket's range.
pub fn experience_years(role: &str) -> u8 {
    let role = role.to_lowercase();
    let (low, high) = EXPERIENCE_BUCKETS
        .iter()
        .find(|(keyword, _)| role.contains(keyword))
        .map(|(_, range)| *range)
        .unwrap_or(DEFAULT_EXPERIENCE_RANGE);

    rand::thread_rng().gen_range(low..=high)
}

/// One interview question as it is written to the output CSV. Field order is
/// the column order.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewRecord {
    pub id: String,
    pub created_at: Option<String>,
    pub question: String,
    pub role: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub votes: u32,
    pub reported: u32,
    pub location: String,
    pub experience: u8,
    pub updated_at: String,
    pub question_source: String,
    pub locked: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub solution: String,
    pub solution_source: String,
    pub category: String,
    // Not a column of the target schema; carried to join on the company table.
    pub company_name: String,
}

impl InterviewRecord {
    pub fn new(
        question: String,
        location: String,
        role: Option<String>,
        difficulty: Option<Difficulty>,
        created_at: Option<String>,
        experience: u8,
        company_name: &str,
    ) -> Self {
        InterviewRecord {
            id: String::new(),
            created_at,
            question,
            role,
            difficulty,
            votes: 0,
            reported: 0,
            location,
            experience,
            updated_at: String::new(),
            question_source: QUESTION_SOURCE.to_string(),
            locked: "FALSE".to_string(),
            record_type: String::new(),
            solution: String::new(),
            solution_source: SOLUTION_SOURCE.to_string(),
            category: String::new(),
            company_name: company_name.to_string(),
        }
    }

    /// Guard against a fully blank extraction.
    pub fn is_blank(&self) -> bool {
        self.question.is_empty()
            && self.location.is_empty()
            && self.role.is_none()
            && self.created_at.is_none()
            && self.difficulty.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{experience_years, Difficulty};

    #[test]
    fn difficulty_maps_known_labels() {
        assert_eq!(
            Difficulty::from_label("Difficult Interview"),
            Some(Difficulty::Hard)
        );
        assert_eq!(
            Difficulty::from_label("Average Interview"),
            Some(Difficulty::Medium)
        );
        assert_eq!(
            Difficulty::from_label("Easy Interview"),
            Some(Difficulty::Easy)
        );
    }

    #[test]
    fn difficulty_leaves_unknown_labels_unset() {
        assert_eq!(Difficulty::from_label("Very Hard Interview"), None);
        assert_eq!(Difficulty::from_label(""), None);
    }

    #[test]
    fn intern_roles_get_zero_experience() {
        assert_eq!(experience_years("Software Engineer Intern"), 0);
        assert_eq!(experience_years("INTERN"), 0);
    }

    #[test]
    fn senior_manager_lands_in_manager_bucket() {
        for _ in 0..50 {
            let years = experience_years("Senior Manager");
            assert!((5..=10).contains(&years), "got {}", years);
        }
    }

    #[test]
    fn senior_director_lands_in_director_bucket() {
        for _ in 0..50 {
            let years = experience_years("Senior Director");
            assert!((10..=15).contains(&years), "got {}", years);
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        for _ in 0..50 {
            let years = experience_years("ENTRY Level Analyst");
            assert!(years <= 2, "got {}", years);
        }
    }

    #[test]
    fn unmatched_roles_use_fallback_range() {
        for _ in 0..50 {
            let years = experience_years("Barista");
            assert!(years <= 7, "got {}", years);
        }
    }
}
