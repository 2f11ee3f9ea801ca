use serde::Serialize;

/// Whether a question accepts one selected option or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    Single,
    Multiple,
}

/// One assessment question. Ids are stable across catalog versions.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: i64,
    pub text: &'static str,
    pub options: &'static [&'static str],
    pub cardinality: Cardinality,
}

/// The assessment question catalog — the single source of truth.
///
/// ARCHITECTURAL RULE: every layer that needs question data consumes this
/// table by reference. Do not re-declare questions anywhere else (the UI
/// fetches them via GET /api/v1/questions).
pub const CATALOG: &[Question] = &[
    Question {
        id: 1,
        text: "What are your main interests?",
        options: &[
            "Technology and Innovation",
            "Business and Finance",
            "Healthcare and Medicine",
            "Arts and Creativity",
            "Science and Research",
            "Education and Training",
            "Social Services",
            "Engineering and Construction",
        ],
        cardinality: Cardinality::Multiple,
    },
    Question {
        id: 2,
        text: "What type of work environment do you prefer?",
        options: &[
            "Office setting",
            "Remote work",
            "Outdoor/Field work",
            "Laboratory",
            "Classroom",
            "Healthcare facility",
            "Creative studio",
            "Construction site",
        ],
        cardinality: Cardinality::Single,
    },
    Question {
        id: 3,
        text: "What are your strongest skills?",
        options: &[
            "Analytical thinking",
            "Communication",
            "Leadership",
            "Technical skills",
            "Creative problem-solving",
            "Attention to detail",
            "Team collaboration",
            "Project management",
        ],
        cardinality: Cardinality::Multiple,
    },
    Question {
        id: 4,
        text: "What level of education are you willing to pursue?",
        options: &[
            "High school diploma",
            "Associate's degree",
            "Bachelor's degree",
            "Master's degree",
            "Doctoral degree",
            "Professional certification",
            "Trade school",
            "On-the-job training",
        ],
        cardinality: Cardinality::Single,
    },
    Question {
        id: 5,
        text: "What is your preferred work schedule?",
        options: &[
            "Regular 9-5",
            "Flexible hours",
            "Shift work",
            "Part-time",
            "Freelance/Contract",
            "Seasonal",
            "On-call",
            "Remote with flexible hours",
        ],
        cardinality: Cardinality::Single,
    },
];

pub fn find_question(id: i64) -> Option<&'static Question> {
    CATALOG.iter().find(|q| q.id == id)
}
