//! Built-in interview categories and their questions.

use crate::model::{Category, CategoryId, Question};

static BEHAVIORAL: [Question; 5] = [
    Question::new(
        1,
        "Tell me about a time when you had to handle a difficult situation at work. How did you resolve it?",
        &[
            "Be specific",
            "Use STAR method (Situation, Task, Action, Result)",
            "Focus on your role",
        ],
    ),
    Question::new(
        2,
        "Describe a situation where you worked in a team. What was your contribution?",
        &[
            "Highlight teamwork",
            "Show leadership skills",
            "Mention specific achievements",
        ],
    ),
    Question::new(
        3,
        "Tell me about a time you failed. What did you learn from it?",
        &["Be honest and humble", "Focus on learning", "Show growth mindset"],
    ),
    Question::new(
        4,
        "How do you handle feedback and criticism?",
        &["Show openness", "Give specific example", "Demonstrate improvement"],
    ),
    Question::new(
        5,
        "Describe your biggest professional achievement.",
        &["Be proud but humble", "Quantify results", "Explain the impact"],
    ),
];

static TECHNICAL: [Question; 5] = [
    Question::new(
        1,
        "Explain the difference between REST and GraphQL APIs.",
        &[
            "Compare architecture",
            "Discuss advantages/disadvantages",
            "Give use cases",
        ],
    ),
    Question::new(
        2,
        "What is the difference between SQL and NoSQL databases?",
        &[
            "Explain schema",
            "Discuss scalability",
            "Give examples of use cases",
        ],
    ),
    Question::new(
        3,
        "How would you optimize a slow database query?",
        &["Index strategy", "Query optimization", "Caching mechanisms"],
    ),
    Question::new(
        4,
        "Explain the concept of microservices.",
        &[
            "Architecture benefits",
            "Challenges",
            "Real-world implementation",
        ],
    ),
    Question::new(
        5,
        "What is CI/CD and why is it important?",
        &[
            "Automation benefits",
            "DevOps practices",
            "Tools and implementation",
        ],
    ),
];

static HR: [Question; 5] = [
    Question::new(
        1,
        "Why are you interested in this position?",
        &["Research company", "Match skills with role", "Show enthusiasm"],
    ),
    Question::new(
        2,
        "What are your salary expectations?",
        &["Research market rate", "Consider experience", "Be reasonable"],
    ),
    Question::new(
        3,
        "Where do you see yourself in 5 years?",
        &["Show ambition", "Align with company", "Be realistic"],
    ),
    Question::new(
        4,
        "What are your strengths and weaknesses?",
        &[
            "Be honest",
            "Weakness should be addressable",
            "Give examples",
        ],
    ),
    Question::new(
        5,
        "Do you have any questions for us?",
        &[
            "Ask meaningful questions",
            "Show interest",
            "Avoid salary/benefits initially",
        ],
    ),
];

static CASE: [Question; 5] = [
    Question::new(
        1,
        "How would you estimate the number of gas stations in your city?",
        &[
            "Show methodology",
            "Break into components",
            "Use reasonable assumptions",
        ],
    ),
    Question::new(
        2,
        "What is the market size for coffee in the USA?",
        &["Top-down or bottom-up", "Use data points", "Explain assumptions"],
    ),
    Question::new(
        3,
        "How would you improve Uber's revenue?",
        &["Brainstorm ideas", "Analyze feasibility", "Consider metrics"],
    ),
    Question::new(
        4,
        "Estimate how many hours a week the average person watches Netflix.",
        &["Segment users", "Use research data", "Cross-validate"],
    ),
    Question::new(
        5,
        "How would you value a startup with $1M revenue but no profits?",
        &[
            "Multiple approaches",
            "Justify assumptions",
            "Consider growth potential",
        ],
    ),
];

static CATEGORIES: [Category; 4] = [
    Category::new(
        CategoryId::Behavioral,
        "Behavioral Interview",
        "👤",
        &BEHAVIORAL,
    ),
    Category::new(CategoryId::Technical, "Technical Interview", "💻", &TECHNICAL),
    Category::new(CategoryId::Hr, "HR Interview", "📋", &HR),
    Category::new(CategoryId::Case, "Case Study", "📊", &CASE),
];

/// Read-only access to the built-in categories.
///
/// Every lookup hands out `'static` data, so iterating a category twice always
/// yields the same questions in the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionBank;

impl QuestionBank {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &'static [Category] {
        &CATEGORIES
    }

    #[must_use]
    pub fn category(&self, id: CategoryId) -> &'static Category {
        match id {
            CategoryId::Behavioral => &CATEGORIES[0],
            CategoryId::Technical => &CATEGORIES[1],
            CategoryId::Hr => &CATEGORIES[2],
            CategoryId::Case => &CATEGORIES[3],
        }
    }

    #[must_use]
    pub fn questions(&self, id: CategoryId) -> &'static [Question] {
        self.category(id).questions()
    }
}
