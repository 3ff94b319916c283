use serde::{Deserialize, Serialize};

// Difficulty badge shown on each learning path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" | "b" => Some(Difficulty::Beginner),
            "intermediate" | "i" => Some(Difficulty::Intermediate),
            "advanced" | "a" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: Difficulty,
}

// === Weekly plan ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    pub id: i64,
    pub label: String,
    pub title: String,
    pub lessons: Vec<Lesson>,
}

impl Week {
    /// Display heading, e.g. "Week 1: Programming Fundamentals".
    pub fn heading(&self) -> String {
        format!("{}: {}", self.label, self.title)
    }
}

/// The ordered weekly plan. Built once at startup and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curriculum {
    pub weeks: Vec<Week>,
}

impl Curriculum {
    pub fn total_lessons(&self) -> usize {
        self.weeks.iter().map(|w| w.lessons.len()).sum()
    }

    /// All lessons in plan order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.weeks.iter().flat_map(|w| w.lessons.iter())
    }

    pub fn lesson(&self, id: i64) -> Option<&Lesson> {
        self.lessons().find(|l| l.id == id)
    }

    pub fn week(&self, id: i64) -> Option<&Week> {
        self.weeks.iter().find(|w| w.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.total_lessons() == 0
    }
}

// === Resources and tips ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCategory {
    pub category: String,
    pub items: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tips {
    #[serde(default)]
    pub getting_started: Vec<Tip>,
    #[serde(default)]
    pub strategies: Vec<Tip>,
}

/// Every static table the dashboard shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub paths: Vec<LearningPath>,
    #[serde(default)]
    pub curriculum: Curriculum,
    #[serde(default)]
    pub resources: Vec<ResourceCategory>,
    #[serde(default)]
    pub tips: Tips,
}

// JSON output wrapper for --json mode
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[cfg(test)]
pub(crate) fn lesson(id: i64) -> Lesson {
    Lesson {
        id,
        title: format!("Lesson {}", id),
        duration: "30 min".to_string(),
    }
}

/// Builds a curriculum whose week `n` (1-based) holds `counts[n - 1]` lessons,
/// numbered consecutively from 1.
#[cfg(test)]
pub(crate) fn curriculum_with_counts(counts: &[usize]) -> Curriculum {
    let mut next_id = 1;
    let weeks = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let lessons = (0..count)
                .map(|_| {
                    let l = lesson(next_id);
                    next_id += 1;
                    l
                })
                .collect();
            Week {
                id: i as i64 + 1,
                label: format!("Week {}", i + 1),
                title: format!("Topic {}", i + 1),
                lessons,
            }
        })
        .collect();
    Curriculum { weeks }
}
