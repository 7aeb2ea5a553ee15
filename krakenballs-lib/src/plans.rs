//src/plans.rs
use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::catalog;
use crate::error::ValidationError;
use crate::models::{new_id, Exercise, Plan, PlanExercise, Set};

/// A plan being created or edited. Nothing here is persisted until
/// [`crate::AppService::save_plan`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanDraft {
    /// `None` until the plan has been saved once.
    pub id: Option<String>,
    pub name: String,
    pub exercises: Vec<PlanExercise>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Plan> for PlanDraft {
    fn from(plan: Plan) -> Self {
        let mut exercises = plan.exercises;
        // A placement is never shown without a set to edit.
        for placement in exercises.iter_mut().filter(|p| p.sets.is_empty()) {
            placement.sets.push(Set::seeded(placement.is_hold));
        }
        Self {
            id: Some(plan.id),
            name: plan.name,
            exercises,
            created_at: Some(plan.created_at),
        }
    }
}

impl PlanDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn contains_exercise(&self, exercise_id: &str) -> bool {
        self.exercises.iter().any(|p| p.exercise_id == exercise_id)
    }

    /// Places every selected exercise that isn't in the plan yet, each with
    /// one seeded set. Returns how many were added.
    pub fn add_exercises<'a, I>(&mut self, selected: I) -> usize
    where
        I: IntoIterator<Item = &'a Exercise>,
    {
        let mut present: HashSet<String> = self
            .exercises
            .iter()
            .map(|p| p.exercise_id.clone())
            .collect();
        let before = self.exercises.len();
        for exercise in selected {
            if present.insert(exercise.id.clone()) {
                self.exercises.push(PlanExercise::place(exercise));
            }
        }
        self.exercises.len() - before
    }

    /// Removes a placement by its placement id (not its exercise id).
    pub fn remove_exercise(&mut self, placement_id: &str) -> bool {
        let before = self.exercises.len();
        self.exercises.retain(|p| p.id != placement_id);
        self.exercises.len() != before
    }

    pub fn placement_mut(&mut self, placement_id: &str) -> Option<&mut PlanExercise> {
        self.exercises.iter_mut().find(|p| p.id == placement_id)
    }

    /// Checks what a plan needs before it can be saved.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingPlanName);
        }
        if self.exercises.is_empty() {
            return Err(ValidationError::EmptyPlan);
        }
        if let Some(empty) = self.exercises.iter().find(|p| p.sets.is_empty()) {
            return Err(ValidationError::ExerciseWithoutSets(empty.name.clone()));
        }
        Ok(())
    }
}

/// Catalog exercises that can still be added to `draft`, previewed as
/// placements with one default set each.
#[must_use]
pub fn available_exercises(draft: &PlanDraft, catalog: &[Exercise]) -> Vec<PlanExercise> {
    catalog
        .iter()
        .filter(|ex| !ex.id.is_empty() && !draft.contains_exercise(&ex.id))
        .map(PlanExercise::place)
        .collect()
}

/// Validates `draft` and writes it into `plans`, replacing by id or appending.
pub(crate) fn commit(
    plans: &mut Vec<Plan>,
    draft: &PlanDraft,
    now: DateTime<Utc>,
) -> Result<Plan, ValidationError> {
    draft.validate()?;

    let stored_index = draft
        .id
        .as_deref()
        .and_then(|id| plans.iter().position(|p| p.id == id));
    let created_at = stored_index
        .map(|i| plans[i].created_at)
        .or(draft.created_at)
        .unwrap_or(now);

    let plan = Plan {
        id: draft.id.clone().unwrap_or_else(new_id),
        name: draft.name.trim().to_string(),
        exercises: draft.exercises.clone(),
        created_at,
        updated_at: now,
    };

    match stored_index {
        Some(i) => plans[i] = plan.clone(),
        None => plans.push(plan.clone()),
    }
    Ok(plan)
}

/// Removes the plan with `id`. Programs that reference it keep their
/// `plan_id`/`plan_name`.
pub(crate) fn remove(plans: &mut Vec<Plan>, id: &str) -> bool {
    let before = plans.len();
    plans.retain(|p| p.id != id);
    plans.len() != before
}

/// Looks up the catalog exercise a placement came from. `None` means it was
/// deleted; the placement still renders from its own copied fields.
#[must_use]
pub fn resolve_exercise<'a>(
    placement: &PlanExercise,
    catalog: &'a [Exercise],
) -> Option<&'a Exercise> {
    catalog::find(catalog, &placement.exercise_id)
}
