//src/programs.rs
use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::models::{new_id, Plan, Program, ProgramDay};

/// Longest cycle a program may repeat.
pub const MAX_CYCLE_DAYS: u32 = 365;

/// A program being created or edited.
///
/// `days` always holds exactly `cycle_days` entries numbered from 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramDraft {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub cycle_days: u32,
    pub total_days: u32,
    pub days: Vec<ProgramDay>,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Program> for ProgramDraft {
    fn from(program: Program) -> Self {
        let mut draft = Self {
            id: Some(program.id),
            name: program.name,
            description: program.description.unwrap_or_default(),
            cycle_days: program.cycle_days,
            total_days: program.total_days,
            days: program.days,
            is_active: program.is_active,
            created_at: Some(program.created_at),
        };
        // Stored records are not trusted to respect the cycle limit.
        draft.resize_cycle(program.cycle_days.min(MAX_CYCLE_DAYS));
        draft
    }
}

impl ProgramDraft {
    /// # Errors
    /// `ValidationError::CycleTooLong` if `cycle_days` exceeds [`MAX_CYCLE_DAYS`].
    pub fn new(
        name: impl Into<String>,
        cycle_days: u32,
        total_days: u32,
    ) -> Result<Self, ValidationError> {
        let mut draft = Self {
            name: name.into(),
            total_days,
            ..Self::default()
        };
        draft.set_cycle_length(cycle_days)?;
        Ok(draft)
    }

    /// Resizes the cycle to exactly `n` days.
    ///
    /// Days that survive keep their plan and rest flags; new days are
    /// unfilled work days. Calling it again with the same `n` changes nothing.
    /// # Errors
    /// `ValidationError::CycleTooLong` if `n` exceeds [`MAX_CYCLE_DAYS`]; the
    /// draft is left as it was.
    pub fn set_cycle_length(&mut self, n: u32) -> Result<(), ValidationError> {
        if n > MAX_CYCLE_DAYS {
            return Err(ValidationError::CycleTooLong {
                max: MAX_CYCLE_DAYS,
            });
        }
        self.resize_cycle(n);
        Ok(())
    }

    fn resize_cycle(&mut self, n: u32) {
        let len = n as usize;
        self.days.truncate(len);
        let start = self.days.len();
        self.days
            .extend((start..len).map(|i| ProgramDay::unfilled(day_number(i))));
        for (i, day) in self.days.iter_mut().enumerate() {
            day.day_number = day_number(i);
        }
        self.cycle_days = n;
    }

    fn day_mut(&mut self, index: usize) -> Result<&mut ProgramDay, ValidationError> {
        let cycle_days = self.days.len();
        self.days
            .get_mut(index)
            .ok_or(ValidationError::DayOutOfRange {
                day: index + 1,
                cycle_days,
            })
    }

    /// Flips the rest flag of the day at `index`.
    ///
    /// Making it a rest day clears its plan. Turning rest off again does not
    /// bring the old plan back; the day stays unfilled until reassigned.
    pub fn toggle_rest_day(&mut self, index: usize) -> Result<(), ValidationError> {
        let day = self.day_mut(index)?;
        day.is_rest_day = !day.is_rest_day;
        if day.is_rest_day {
            day.plan_id = None;
            day.plan_name = None;
        }
        Ok(())
    }

    pub fn assign_plan(&mut self, index: usize, plan: &Plan) -> Result<(), ValidationError> {
        let day = self.day_mut(index)?;
        day.plan_id = Some(plan.id.clone());
        day.plan_name = Some(plan.name.clone());
        day.is_rest_day = false;
        Ok(())
    }

    pub fn unassign_plan(&mut self, index: usize) -> Result<(), ValidationError> {
        let day = self.day_mut(index)?;
        day.plan_id = None;
        day.plan_name = None;
        day.is_rest_day = false;
        Ok(())
    }

    /// Other programs are not deactivated; several may be active at once.
    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingProgramName);
        }
        if self.cycle_days == 0 {
            return Err(ValidationError::InvalidCycleDays);
        }
        if self.cycle_days > MAX_CYCLE_DAYS {
            return Err(ValidationError::CycleTooLong {
                max: MAX_CYCLE_DAYS,
            });
        }
        if self.total_days == 0 {
            return Err(ValidationError::InvalidTotalDays);
        }
        Ok(())
    }
}

fn day_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

/// Validates `draft` and writes it into `programs`, replacing by id or appending.
pub(crate) fn commit(
    programs: &mut Vec<Program>,
    draft: &ProgramDraft,
    now: DateTime<Utc>,
) -> Result<Program, ValidationError> {
    draft.validate()?;

    let stored_index = draft
        .id
        .as_deref()
        .and_then(|id| programs.iter().position(|p| p.id == id));
    let created_at = stored_index
        .map(|i| programs[i].created_at)
        .or(draft.created_at)
        .unwrap_or(now);
    let description = draft.description.trim();

    let program = Program {
        id: draft.id.clone().unwrap_or_else(new_id),
        name: draft.name.trim().to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        cycle_days: draft.cycle_days,
        total_days: draft.total_days,
        days: draft.days.clone(),
        is_active: draft.is_active,
        created_at,
        updated_at: now,
    };

    match stored_index {
        Some(i) => programs[i] = program.clone(),
        None => programs.push(program.clone()),
    }
    Ok(program)
}

pub(crate) fn remove(programs: &mut Vec<Program>, id: &str) -> bool {
    let before = programs.len();
    programs.retain(|p| p.id != id);
    programs.len() != before
}

/// Looks up the plan assigned to `day`. `None` for rest days, unfilled days
/// and plans that have since been deleted; callers fall back to `plan_name`.
#[must_use]
pub fn resolve_day_plan<'a>(day: &ProgramDay, plans: &'a [Plan]) -> Option<&'a Plan> {
    let plan_id = day.plan_id.as_deref()?;
    plans.iter().find(|p| p.id == plan_id)
}
