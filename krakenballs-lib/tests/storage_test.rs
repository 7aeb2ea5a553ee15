use anyhow::Result;
use tempfile::tempdir;

use krakenballs_lib::sets::{add_set, remove_set};
use krakenballs_lib::store::{self, keys};
use krakenballs_lib::{
    load_config_util, save_config_util, validate_set_bounds, AppService, Config, ConfigError,
    Error, ExerciseInput, KeyValueStore, PlanDraft, Set, SetBounds, SqliteStore, StoreError,
    StoreEvent,
};

/// Serves reads from an inner store and refuses every write.
struct ReadOnlyStore {
    inner: SqliteStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read-only".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read-only".to_string()))
    }

    fn clear(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read-only".to_string()))
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.inner.keys()
    }
}

/// Lets every key be wiped but refuses to store anything new.
struct WipeOnlyStore {
    inner: SqliteStore,
}

impl KeyValueStore for WipeOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk full".to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key)
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.inner.clear()
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.inner.keys()
    }
}

fn exercise_input(name: &str) -> ExerciseInput {
    ExerciseInput {
        name: name.to_string(),
        ..ExerciseInput::default()
    }
}

#[test]
fn test_file_store_persists_across_reopen() -> Result<()> {
    let dir = tempdir()?;
    let db_path = dir.path().join("krakenballs.sqlite");

    let plan_id = {
        let store = SqliteStore::open(&db_path)?;
        let mut service = AppService::from_parts(
            Box::new(store),
            Config::default(),
            dir.path().join("config.toml"),
            db_path.clone(),
        );
        let squat = service.upsert_exercise(&exercise_input("Squat"))?;
        let mut draft = PlanDraft::new("Legs");
        draft.add_exercises([&squat]);
        service.save_plan(&draft)?.id
    };

    let store = SqliteStore::open(&db_path)?;
    let service = AppService::from_parts(
        Box::new(store),
        Config::default(),
        dir.path().join("config.toml"),
        db_path,
    );
    assert_eq!(service.list_exercises().len(), 1);
    let plan = service.load_plan_for_edit(&plan_id).expect("plan persisted");
    assert_eq!(plan.name, "Legs");
    Ok(())
}

#[test]
fn test_failed_write_surfaces_error_and_keeps_draft() -> Result<()> {
    let inner = SqliteStore::open_in_memory()?;
    store::write(&inner, keys::PLANS, &Vec::<krakenballs_lib::Plan>::new())?;
    let mut service = AppService::from_parts(
        Box::new(ReadOnlyStore { inner }),
        Config::default(),
        "test_config.toml".into(),
        ":memory:".into(),
    );
    let events = service.subscribe();

    let result = service.upsert_exercise(&exercise_input("Squat"));
    assert!(matches!(
        result,
        Err(Error::StorageWrite { ref collection, source: StoreError::Unavailable(_) })
            if collection == "exercises"
    ));

    let exercise = krakenballs_lib::Exercise {
        id: "ex-1".to_string(),
        name: "Squat".to_string(),
        description: None,
        video_url: None,
        is_hold: false,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };
    let mut draft = PlanDraft::new("Legs");
    draft.add_exercises([&exercise]);
    let before = draft.clone();

    assert!(matches!(
        service.save_plan(&draft),
        Err(Error::StorageWrite { .. })
    ));
    assert_eq!(draft, before);
    assert!(service.list_plans().is_empty());

    assert!(matches!(
        service.reset_all_data(),
        Err(Error::StorageWrite { .. })
    ));
    assert!(events.try_recv().is_err());
    Ok(())
}

#[test]
fn test_unreadable_store_reads_as_empty() -> Result<()> {
    struct BrokenStore;
    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Ok(())
        }
        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
        fn clear(&self) -> Result<(), StoreError> {
            Ok(())
        }
        fn keys(&self) -> Result<Vec<String>, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }
    }

    let service = AppService::from_parts(
        Box::new(BrokenStore),
        Config::default(),
        "test_config.toml".into(),
        ":memory:".into(),
    );
    assert!(service.list_exercises().is_empty());
    assert!(service.list_programs().is_empty());
    assert!(!service.auto_create_prevented());
    assert!(service.dump_storage().is_err());
    Ok(())
}

#[test]
fn test_reset_publishes_cleared() -> Result<()> {
    let mut service = AppService::from_parts(
        Box::new(SqliteStore::open_in_memory()?),
        Config::default(),
        "test_config.toml".into(),
        ":memory:".into(),
    );
    let events = service.subscribe();
    service.reset_all_data()?;
    assert_eq!(events.try_recv().ok(), Some(StoreEvent::Cleared));
    Ok(())
}

#[test]
fn test_reset_reports_cleared_even_if_sentinel_write_fails() -> Result<()> {
    let inner = SqliteStore::open_in_memory()?;
    inner.set(keys::EXERCISES, "[]")?;
    let mut service = AppService::from_parts(
        Box::new(WipeOnlyStore { inner }),
        Config::default(),
        "test_config.toml".into(),
        ":memory:".into(),
    );
    let events = service.subscribe();

    let result = service.reset_all_data();
    assert!(matches!(
        result,
        Err(Error::StorageWrite { ref collection, .. }) if collection == keys::PREVENT_AUTO_CREATE
    ));
    assert!(service.dump_storage()?.is_empty());
    assert_eq!(events.try_recv().ok(), Some(StoreEvent::Cleared));
    assert!(!service.auto_create_prevented());
    Ok(())
}

// --- Config ---

#[test]
fn test_config_defaults_written_on_first_load() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("nested").join("config.toml");

    let config = load_config_util(&path)?;
    assert_eq!(config, Config::default());
    assert!(path.exists());

    let mut changed = config;
    changed.max_sets = 6;
    changed.header_color = "Cyan".to_string();
    save_config_util(&path, &changed)?;
    assert_eq!(load_config_util(&path)?, changed);
    Ok(())
}

#[test]
fn test_config_missing_fields_use_defaults() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "max_sets = 4\n")?;

    let config = load_config_util(&path)?;
    assert_eq!(config.max_sets, 4);
    assert_eq!(config.min_sets, 1);
    assert!(config.auto_seed);
    Ok(())
}

#[test]
fn test_invalid_bounds_in_config_file_fall_back_to_defaults() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "min_sets = 0\nmax_sets = 0\nauto_seed = false\n")?;

    let config = load_config_util(&path)?;
    assert_eq!(config.set_bounds(), SetBounds::default());
    assert!(!config.auto_seed);

    let bounds = config.set_bounds();
    let mut sets = vec![Set::seeded(false)];
    assert!(!remove_set(&mut sets, 0, bounds));
    assert_eq!(sets.len(), 1);
    assert!(add_set(&mut sets, bounds));
    assert_eq!(sets.len(), 2);

    std::fs::write(&path, "min_sets = 4\nmax_sets = 2\n")?;
    assert_eq!(load_config_util(&path)?.set_bounds(), SetBounds::default());
    Ok(())
}

#[test]
fn test_set_bounds_ignore_invalid_fields() {
    let config = Config {
        min_sets: 0,
        max_sets: 3,
        ..Config::default()
    };
    assert_eq!(config.set_bounds(), SetBounds::default());

    let config = Config {
        min_sets: 2,
        max_sets: 3,
        ..Config::default()
    };
    assert_eq!(
        config.set_bounds(),
        SetBounds {
            min_sets: 2,
            max_sets: 3
        }
    );
}

#[test]
fn test_set_bounds_validation() -> Result<()> {
    assert!(validate_set_bounds(1, 10).is_ok());
    assert!(validate_set_bounds(3, 3).is_ok());
    assert!(matches!(
        validate_set_bounds(0, 5),
        Err(ConfigError::InvalidSetBounds { min: 0, max: 5 })
    ));
    assert!(validate_set_bounds(6, 5).is_err());

    let dir = tempdir()?;
    let config_path = dir.path().join("config.toml");
    let mut service = AppService::from_parts(
        Box::new(SqliteStore::open_in_memory()?),
        Config::default(),
        config_path.clone(),
        ":memory:".into(),
    );
    service.set_set_bounds(2, 4)?;
    assert_eq!(service.set_bounds().max_sets, 4);
    assert!(service.set_set_bounds(5, 4).is_err());
    assert_eq!(service.set_bounds().min_sets, 2);

    service.set_header_color("magenta")?;
    assert_eq!(service.config.header_color, "Magenta");
    assert!(service.set_header_color("chartreuse").is_err());

    let reloaded = load_config_util(&config_path)?;
    assert_eq!(reloaded.min_sets, 2);
    assert_eq!(reloaded.header_color, "Magenta");
    Ok(())
}
