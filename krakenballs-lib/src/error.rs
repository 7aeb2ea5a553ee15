//src/error.rs
use thiserror::Error;

use crate::store;

/// A required field is missing or out of range. Nothing was persisted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter an exercise name")]
    MissingExerciseName,
    #[error("Please enter a plan name")]
    MissingPlanName,
    #[error("Please add at least one exercise to the plan")]
    EmptyPlan,
    #[error("Exercise '{0}' needs at least one set")]
    ExerciseWithoutSets(String),
    #[error("Please enter a program name")]
    MissingProgramName,
    #[error("Please enter a valid number of cycle days")]
    InvalidCycleDays,
    #[error("A cycle can be at most {max} days long")]
    CycleTooLong { max: u32 },
    #[error("Please enter a valid number of total days")]
    InvalidTotalDays,
    #[error("Day {day} does not exist in a {cycle_days}-day cycle")]
    DayOutOfRange { day: usize, cycle_days: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The write failed. The caller's in-memory draft is untouched and may
    /// now differ from what is stored.
    #[error("Failed to save {collection}: {source}")]
    StorageWrite {
        collection: String,
        #[source]
        source: store::Error,
    },
    #[error("Plan not found: {0}")]
    PlanNotFound(String),
    #[error("Program not found: {0}")]
    ProgramNotFound(String),
}

impl Error {
    pub(crate) fn storage_write(collection: impl Into<String>, source: store::Error) -> Self {
        Self::StorageWrite {
            collection: collection.into(),
            source,
        }
    }
}
