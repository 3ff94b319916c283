use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Curriculum, Week};

/// Aggregate completion state measured against a curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub completed_count: usize,
    pub total_count: usize,
    /// Unrounded; 0.0 when the curriculum has no lessons.
    pub percentage: f64,
}

impl Progress {
    /// Nearest whole percent, clamped to 0..=100 for gauges.
    pub fn rounded_percentage(&self) -> u16 {
        self.percentage.round().clamp(0.0, 100.0) as u16
    }

    pub fn ratio(&self) -> f64 {
        (self.percentage / 100.0).clamp(0.0, 1.0)
    }

    pub fn encouragement(&self) -> &'static str {
        match self.percentage {
            p if p <= 0.0 => "Just getting started!",
            p if p < 50.0 => "Keep going!",
            p if p < 100.0 => "Almost there!",
            _ => "All lessons complete!",
        }
    }
}

/// Lessons the user has marked done during this session.
///
/// Ids are never checked against a curriculum, so an unknown id can be
/// toggled like any other and still counts towards `completed_count`.
#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    completed: HashSet<i64>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, lesson_id: i64) {
        if !self.completed.remove(&lesson_id) {
            self.completed.insert(lesson_id);
            log::debug!("lesson {} marked complete", lesson_id);
        } else {
            log::debug!("lesson {} marked incomplete", lesson_id);
        }
    }

    pub fn is_completed(&self, lesson_id: i64) -> bool {
        self.completed.contains(&lesson_id)
    }

    pub fn progress(&self, curriculum: &Curriculum) -> Progress {
        let completed_count = self.completed.len();
        let total_count = curriculum.total_lessons();
        let percentage = if total_count == 0 {
            0.0
        } else {
            completed_count as f64 / total_count as f64 * 100.0
        };

        Progress {
            completed_count,
            total_count,
            percentage,
        }
    }

    pub fn week_completed(&self, week: &Week) -> usize {
        week.lessons
            .iter()
            .filter(|l| self.is_completed(l.id))
            .count()
    }

    pub fn completed_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.completed.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}
