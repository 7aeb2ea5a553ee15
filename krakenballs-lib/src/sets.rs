//src/sets.rs
//! Editing of an ordered set list. Shared by every exercise placement,
//! hold or rep alike: the caller decides which numeric field it shows.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::models::{new_id, Set};

pub const DEFAULT_MIN_SETS: usize = 1;
pub const DEFAULT_MAX_SETS: usize = 10;

// Template for the first set of an empty list.
const EMPTY_LIST_REPS: f64 = 10.0;
const EMPTY_LIST_WEIGHT: f64 = 20.0;
const EMPTY_LIST_SECONDS: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBounds {
    pub min_sets: usize,
    pub max_sets: usize,
}

impl Default for SetBounds {
    fn default() -> Self {
        Self {
            min_sets: DEFAULT_MIN_SETS,
            max_sets: DEFAULT_MAX_SETS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SetField {
    Id,
    Reps,
    Weight,
    TimeInterval,
}

impl SetField {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Reps | Self::Weight | Self::TimeInterval)
    }
}

/// Position-derived set number, as shown to the user.
#[must_use]
pub const fn set_number(index: usize) -> usize {
    index + 1
}

/// Appends a copy of the last set with a fresh id.
/// Returns `false` (and leaves `sets` alone) when the list is full.
pub fn add_set(sets: &mut Vec<Set>, bounds: SetBounds) -> bool {
    if sets.len() >= bounds.max_sets {
        return false;
    }
    let next = match sets.last() {
        Some(last) => Set {
            id: new_id(),
            ..last.clone()
        },
        None => Set {
            id: new_id(),
            reps: Some(EMPTY_LIST_REPS),
            weight: EMPTY_LIST_WEIGHT,
            time_interval: Some(EMPTY_LIST_SECONDS),
        },
    };
    sets.push(next);
    true
}

/// Removes the set at `index`; later sets move up one number.
/// Returns `false` when the list is already at its minimum or `index` is out of range.
pub fn remove_set(sets: &mut Vec<Set>, index: usize, bounds: SetBounds) -> bool {
    if sets.len() <= bounds.min_sets || index >= sets.len() {
        return false;
    }
    sets.remove(index);
    true
}

/// Writes a raw text value into one field of the set at `index`.
///
/// Numeric fields take the leading number of the input and fall back to 0
/// when there is none. `Id` stores the text as given.
pub fn update_field(sets: &mut [Set], index: usize, field: SetField, raw: &str) -> bool {
    let Some(set) = sets.get_mut(index) else {
        return false;
    };
    match field {
        SetField::Id => set.id = raw.to_string(),
        SetField::Reps => set.reps = Some(parse_numeric(raw)),
        SetField::Weight => set.weight = parse_numeric(raw),
        SetField::TimeInterval => set.time_interval = Some(parse_numeric(raw)),
    }
    true
}

/// Parses the longest numeric prefix of `raw` ("12kg" is 12), or 0.
#[must_use]
pub fn parse_numeric(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
