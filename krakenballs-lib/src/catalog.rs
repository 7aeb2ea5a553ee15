//src/catalog.rs
use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::models::{new_id, Exercise, ExerciseInput};

fn clean_optional(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
}

/// Creates or edits an exercise in `exercises`.
///
/// An input whose id matches a record replaces that record's editable
/// fields, keeps `created_at` and bumps `updated_at`. Anything else is
/// appended as a new record. Names are not required to be unique.
pub fn upsert(
    exercises: &mut Vec<Exercise>,
    input: &ExerciseInput,
    now: DateTime<Utc>,
) -> Result<Exercise, ValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingExerciseName);
    }
    let description = clean_optional(input.description.as_deref());
    let video_url = clean_optional(input.video_url.as_deref());

    let existing = input
        .id
        .as_deref()
        .and_then(|id| exercises.iter_mut().find(|ex| ex.id == id));

    if let Some(exercise) = existing {
        exercise.name = name.to_string();
        exercise.description = description;
        exercise.video_url = video_url;
        exercise.is_hold = input.is_hold;
        exercise.updated_at = now;
        return Ok(exercise.clone());
    }

    let exercise = Exercise {
        id: input.id.clone().unwrap_or_else(new_id),
        name: name.to_string(),
        description,
        video_url,
        is_hold: input.is_hold,
        created_at: now,
        updated_at: now,
    };
    exercises.push(exercise.clone());
    Ok(exercise)
}

/// Removes the exercise with `id`. Plans that placed it are not touched.
pub fn remove(exercises: &mut Vec<Exercise>, id: &str) -> bool {
    let before = exercises.len();
    exercises.retain(|ex| ex.id != id);
    exercises.len() != before
}

#[must_use]
pub fn find<'a>(exercises: &'a [Exercise], id: &str) -> Option<&'a Exercise> {
    exercises.iter().find(|ex| ex.id == id)
}

/// Starter catalog seeded on a fresh install.
pub(crate) const STARTER_EXERCISES: [(&str, &str, bool); 4] = [
    ("Push-up", "Hands under shoulders, body in a straight line.", false),
    ("Bodyweight Squat", "Feet shoulder-width apart, hips below knees.", false),
    ("Pull-up", "Full hang to chin over the bar.", false),
    ("Plank", "Forearms down, hold a straight line from head to heels.", true),
];
