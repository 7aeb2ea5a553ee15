//src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reps seeded into a freshly placed rep exercise.
pub const DEFAULT_REPS: f64 = 10.0;
/// Seconds seeded into a freshly placed hold exercise.
pub const DEFAULT_HOLD_SECONDS: f64 = 30.0;

/// Generates a unique record id.
#[must_use]
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A reusable exercise definition from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Measured in elapsed seconds rather than repetitions.
    #[serde(default)]
    pub is_hold: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or editing a catalog exercise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseInput {
    /// `None` (or an id nothing matches) creates a new record.
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub is_hold: bool,
}

/// One set of an exercise placement. Its number is its position in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<f64>,
    /// 0 means bodyweight.
    #[serde(default)]
    pub weight: f64,
    /// Hold time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_interval: Option<f64>,
}

impl Set {
    /// The single set a newly placed exercise starts with.
    #[must_use]
    pub fn seeded(is_hold: bool) -> Self {
        if is_hold {
            Self {
                id: new_id(),
                reps: None,
                weight: 0.0,
                time_interval: Some(DEFAULT_HOLD_SECONDS),
            }
        } else {
            Self {
                id: new_id(),
                reps: Some(DEFAULT_REPS),
                weight: 0.0,
                time_interval: None,
            }
        }
    }

    /// The value the user edits for this set: hold seconds or reps.
    #[must_use]
    pub fn target(&self, is_hold: bool) -> Option<f64> {
        if is_hold {
            self.time_interval
        } else {
            self.reps
        }
    }
}

/// A catalog exercise as embedded in a plan.
///
/// `name` and `is_hold` are copied from the catalog when the exercise is
/// placed and are never refreshed afterwards, so a plan keeps rendering the
/// same way after its source exercise is renamed or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExercise {
    /// Identifies this placement, not the catalog exercise.
    pub id: String,
    pub exercise_id: String,
    pub name: String,
    #[serde(default)]
    pub is_hold: bool,
    #[serde(default)]
    pub sets: Vec<Set>,
}

impl PlanExercise {
    /// Places a catalog exercise with one seeded set.
    #[must_use]
    pub fn place(exercise: &Exercise) -> Self {
        Self {
            id: new_id(),
            exercise_id: exercise.id.clone(),
            name: exercise.name.clone(),
            is_hold: exercise.is_hold,
            sets: vec![Set::seeded(exercise.is_hold)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<PlanExercise>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|ex| ex.sets.len()).sum()
    }
}

/// One day of a program's repeating cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDay {
    /// 1-based position in the cycle.
    pub day_number: u32,
    pub plan_id: Option<String>,
    pub plan_name: Option<String>,
    #[serde(default)]
    pub is_rest_day: bool,
}

impl ProgramDay {
    /// A work day with no plan assigned yet.
    #[must_use]
    pub const fn unfilled(day_number: u32) -> Self {
        Self {
            day_number,
            plan_id: None,
            plan_name: None,
            is_rest_day: false,
        }
    }

    #[must_use]
    pub const fn is_unfilled(&self) -> bool {
        !self.is_rest_day && self.plan_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cycle_days: u32,
    pub total_days: u32,
    #[serde(default)]
    pub days: Vec<ProgramDay>,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Program {
    /// Maps an absolute (1-based) day of the program onto its cycle day.
    ///
    /// Returns `None` for day 0, for days past `total_days` and for an
    /// empty cycle.
    #[must_use]
    pub fn cycle_day(&self, absolute_day: u32) -> Option<&ProgramDay> {
        if absolute_day == 0 || absolute_day > self.total_days || self.days.is_empty() {
            return None;
        }
        let index = (absolute_day as usize - 1) % self.days.len();
        self.days.get(index)
    }

    #[must_use]
    pub fn rest_day_count(&self) -> usize {
        self.days.iter().filter(|day| day.is_rest_day).count()
    }

    #[must_use]
    pub fn assigned_day_count(&self) -> usize {
        self.days.iter().filter(|day| day.plan_id.is_some()).count()
    }
}
