// src/lib.rs
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use tracing::{debug, info};

// --- Declare modules ---
pub mod catalog;
mod config;
mod error;
pub mod events;
pub mod models;
pub mod plans;
pub mod programs;
pub mod sets;
pub mod store;
pub mod theme;

// --- Expose public types ---
pub use config::{
    get_config_path as get_config_path_util, load as load_config_util, parse_color,
    save as save_config_util, validate_set_bounds, Config, Error as ConfigError, StandardColor,
};
pub use error::{Error, ValidationError};
pub use events::{ChangeNotifier, Collection, StoreEvent};
pub use models::{Exercise, ExerciseInput, Plan, PlanExercise, Program, ProgramDay, Set};
pub use plans::PlanDraft;
pub use programs::ProgramDraft;
pub use sets::{SetBounds, SetField};
pub use store::{
    get_db_path as get_db_path_util, Error as StoreError, KeyValueStore, SqliteStore,
};
pub use theme::{builtin_themes, find_builtin_theme, Theme};

/// Entry point for every UI shell.
///
/// Each mutating call loads the whole collection fresh, changes it, writes
/// it back and then publishes a [`StoreEvent`]. There is no locking: two
/// overlapping edits of the same collection are last-write-wins.
pub struct AppService {
    pub config: Config,
    pub config_path: PathBuf,
    pub db_path: PathBuf,
    store: Box<dyn KeyValueStore>,
    notifier: ChangeNotifier,
}

impl AppService {
    /// Loads config, opens local storage and seeds defaults on a fresh install.
    /// # Errors
    /// Returns `anyhow::Error` if config/storage path determination, loading, or opening fails.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load(&config_path)
            .with_context(|| format!("Failed to load config from {config_path:?}"))?;

        let db_path = store::get_db_path().context("Failed to determine storage path")?;
        let store = SqliteStore::open(&db_path)
            .with_context(|| format!("Failed to open storage at {db_path:?}"))?;

        let mut service = Self::from_parts(Box::new(store), config, config_path, db_path);
        service
            .seed_defaults_if_needed()
            .context("Failed to seed default exercises")?;
        Ok(service)
    }

    pub fn from_parts(
        store: Box<dyn KeyValueStore>,
        config: Config,
        config_path: PathBuf,
        db_path: PathBuf,
    ) -> Self {
        Self {
            config,
            config_path,
            db_path,
            store,
            notifier: ChangeNotifier::default(),
        }
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn get_db_path(&self) -> &Path {
        &self.db_path
    }

    /// Receives an event after every successful write.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.notifier.subscribe()
    }

    fn write_collection<T: Serialize + ?Sized>(
        &mut self,
        collection: Collection,
        value: &T,
    ) -> Result<(), Error> {
        store::write(self.store.as_ref(), collection.storage_key(), value)
            .map_err(|e| Error::storage_write(collection.to_string(), e))?;
        self.notifier.publish(StoreEvent::Updated(collection));
        Ok(())
    }

    // --- Configuration ---

    /// Saves the current configuration state.
    /// # Errors
    /// Returns `ConfigError` if saving fails.
    pub fn save_config(&self) -> Result<(), ConfigError> {
        config::save(&self.config_path, &self.config)
    }

    #[must_use]
    pub fn set_bounds(&self) -> SetBounds {
        self.config.set_bounds()
    }

    /// # Errors
    /// - `ConfigError::InvalidSetBounds` unless `1 <= min <= max`.
    /// - `ConfigError` variants if saving fails.
    pub fn set_set_bounds(&mut self, min: usize, max: usize) -> Result<(), ConfigError> {
        let bounds = validate_set_bounds(min, max)?;
        self.config.min_sets = bounds.min_sets;
        self.config.max_sets = bounds.max_sets;
        self.save_config()
    }

    /// # Errors
    /// - `ConfigError::InvalidColor` if the name is not a known color.
    /// - `ConfigError` variants if saving fails.
    pub fn set_header_color(&mut self, color: &str) -> Result<(), ConfigError> {
        let parsed = parse_color(color)?;
        self.config.header_color = format!("{parsed:?}");
        self.save_config()
    }

    /// # Errors
    /// Returns `ConfigError` variants if saving fails.
    pub fn set_auto_seed(&mut self, enabled: bool) -> Result<(), ConfigError> {
        self.config.auto_seed = enabled;
        self.save_config()
    }

    // --- Exercise catalog ---

    #[must_use]
    pub fn list_exercises(&self) -> Vec<Exercise> {
        store::read_collection(self.store.as_ref(), store::keys::EXERCISES)
    }

    #[must_use]
    pub fn get_exercise(&self, id: &str) -> Option<Exercise> {
        self.list_exercises().into_iter().find(|ex| ex.id == id)
    }

    /// Creates an exercise, or edits the one whose id matches `input.id`.
    /// # Errors
    /// - `ValidationError::MissingExerciseName` if the trimmed name is empty.
    /// - `Error::StorageWrite` if the catalog could not be written.
    pub fn upsert_exercise(&mut self, input: &ExerciseInput) -> Result<Exercise, Error> {
        let mut exercises = self.list_exercises();
        let exercise = catalog::upsert(&mut exercises, input, Utc::now())?;
        self.write_collection(Collection::Exercises, &exercises)?;
        debug!(id = %exercise.id, name = %exercise.name, "saved exercise");
        Ok(exercise)
    }

    /// Deletes a catalog exercise. Plans that placed it keep their copy.
    /// Returns whether an exercise was removed; nothing is written otherwise.
    /// # Errors
    /// Returns `Error::StorageWrite` if the catalog could not be written.
    pub fn delete_exercise(&mut self, id: &str) -> Result<bool, Error> {
        let mut exercises = self.list_exercises();
        if !catalog::remove(&mut exercises, id) {
            return Ok(false);
        }
        self.write_collection(Collection::Exercises, &exercises)?;
        Ok(true)
    }

    // --- Plans ---

    #[must_use]
    pub fn list_plans(&self) -> Vec<Plan> {
        store::read_collection(self.store.as_ref(), store::keys::PLANS)
    }

    #[must_use]
    pub fn load_plan_for_edit(&self, plan_id: &str) -> Option<Plan> {
        self.list_plans().into_iter().find(|p| p.id == plan_id)
    }

    /// Catalog exercises not yet in `draft`, each with a default set.
    #[must_use]
    pub fn available_exercises(&self, draft: &PlanDraft) -> Vec<PlanExercise> {
        plans::available_exercises(draft, &self.list_exercises())
    }

    /// Validates and stores `draft`, replacing the plan with the same id or
    /// appending a new one.
    /// # Errors
    /// - `ValidationError` if the name is empty, there are no exercises, or a
    ///   placement has no sets.
    /// - `Error::StorageWrite` if the plans could not be written.
    pub fn save_plan(&mut self, draft: &PlanDraft) -> Result<Plan, Error> {
        let mut plans = self.list_plans();
        let plan = plans::commit(&mut plans, draft, Utc::now())?;
        self.write_collection(Collection::Plans, &plans)?;
        debug!(id = %plan.id, exercises = plan.exercises.len(), "saved plan");
        Ok(plan)
    }

    /// Deletes a plan. Program days pointing at it keep the dangling reference.
    /// # Errors
    /// Returns `Error::StorageWrite` if the plans could not be written.
    pub fn delete_plan(&mut self, id: &str) -> Result<bool, Error> {
        let mut plans = self.list_plans();
        if !plans::remove(&mut plans, id) {
            return Ok(false);
        }
        self.write_collection(Collection::Plans, &plans)?;
        Ok(true)
    }

    // --- Programs ---

    #[must_use]
    pub fn list_programs(&self) -> Vec<Program> {
        store::read_collection(self.store.as_ref(), store::keys::PROGRAMS)
    }

    #[must_use]
    pub fn load_program(&self, id: &str) -> Option<Program> {
        self.list_programs().into_iter().find(|p| p.id == id)
    }

    /// # Errors
    /// - `ValidationError` if the name is empty or either day count is 0.
    /// - `Error::StorageWrite` if the programs could not be written.
    pub fn save_program(&mut self, draft: &ProgramDraft) -> Result<Program, Error> {
        let mut programs = self.list_programs();
        let program = programs::commit(&mut programs, draft, Utc::now())?;
        self.write_collection(Collection::Programs, &programs)?;
        debug!(id = %program.id, cycle_days = program.cycle_days, "saved program");
        Ok(program)
    }

    /// # Errors
    /// Returns `Error::StorageWrite` if the programs could not be written.
    pub fn delete_program(&mut self, id: &str) -> Result<bool, Error> {
        let mut programs = self.list_programs();
        if !programs::remove(&mut programs, id) {
            return Ok(false);
        }
        self.write_collection(Collection::Programs, &programs)?;
        Ok(true)
    }

    /// Flips `is_active` on one stored program. Other programs are left alone.
    /// `updated_at` is not touched.
    /// # Errors
    /// - `Error::ProgramNotFound` if no program has `id`.
    /// - `Error::StorageWrite` if the programs could not be written.
    pub fn toggle_program_active(&mut self, id: &str) -> Result<Program, Error> {
        let mut programs = self.list_programs();
        let program = programs
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::ProgramNotFound(id.to_string()))?;
        program.is_active = !program.is_active;
        let toggled = program.clone();
        self.write_collection(Collection::Programs, &programs)?;
        Ok(toggled)
    }

    // --- Theme ---

    /// The stored theme, or the default one when none is stored or it can't be read.
    #[must_use]
    pub fn theme(&self) -> Theme {
        store::read(self.store.as_ref(), store::keys::THEME).unwrap_or_default()
    }

    /// # Errors
    /// Returns `Error::StorageWrite` if the theme could not be written.
    pub fn set_theme(&mut self, theme: &Theme) -> Result<(), Error> {
        self.write_collection(Collection::Theme, theme)
    }

    /// # Errors
    /// Returns `Error::StorageWrite` if the theme key could not be removed.
    pub fn reset_theme(&mut self) -> Result<(), Error> {
        self.remove_storage_key(store::keys::THEME)
    }

    // --- Storage maintenance ---

    /// Every stored key with its raw value, sorted by key.
    /// # Errors
    /// Returns `StoreError` if the store can't be listed or read.
    pub fn dump_storage(&self) -> Result<Vec<(String, String)>, StoreError> {
        let mut entries = Vec::new();
        for key in self.store.keys()? {
            if let Some(value) = self.store.get(&key)? {
                entries.push((key, value));
            }
        }
        Ok(entries)
    }

    /// # Errors
    /// Returns `Error::StorageWrite` if the key could not be removed.
    pub fn remove_storage_key(&mut self, key: &str) -> Result<(), Error> {
        self.store
            .remove(key)
            .map_err(|e| Error::storage_write(key, e))?;
        if let Some(collection) = Collection::from_storage_key(key) {
            self.notifier.publish(StoreEvent::Updated(collection));
        }
        Ok(())
    }

    /// Wipes every key and records that defaults must not be seeded again.
    /// `StoreEvent::Cleared` is published as soon as the wipe succeeds.
    /// # Errors
    /// Returns `Error::StorageWrite` if clearing or writing the sentinel fails.
    pub fn reset_all_data(&mut self) -> Result<(), Error> {
        self.store
            .clear()
            .map_err(|e| Error::storage_write("storage", e))?;
        self.notifier.publish(StoreEvent::Cleared);
        info!("all stored data cleared");
        store::write(self.store.as_ref(), store::keys::PREVENT_AUTO_CREATE, &true)
            .map_err(|e| Error::storage_write(store::keys::PREVENT_AUTO_CREATE, e))
    }

    #[must_use]
    pub fn auto_create_prevented(&self) -> bool {
        store::read(self.store.as_ref(), store::keys::PREVENT_AUTO_CREATE).unwrap_or(false)
    }

    /// Seeds the starter catalog when nothing has been stored yet, auto-seed is
    /// enabled and storage was never wiped. Returns how many exercises were added.
    /// # Errors
    /// Returns `Error::StorageWrite` if the catalog could not be written.
    pub fn seed_defaults_if_needed(&mut self) -> Result<usize, Error> {
        if !self.config.auto_seed || self.auto_create_prevented() {
            return Ok(0);
        }
        match self.store.get(store::keys::EXERCISES) {
            Ok(None) => {}
            _ => return Ok(0),
        }
        let now = Utc::now();
        let mut exercises = Vec::with_capacity(catalog::STARTER_EXERCISES.len());
        for (name, description, is_hold) in catalog::STARTER_EXERCISES {
            let input = ExerciseInput {
                name: name.to_string(),
                description: Some(description.to_string()),
                is_hold,
                ..ExerciseInput::default()
            };
            catalog::upsert(&mut exercises, &input, now)?;
        }
        self.write_collection(Collection::Exercises, &exercises)?;
        info!(count = exercises.len(), "seeded starter exercises");
        Ok(exercises.len())
    }
}
