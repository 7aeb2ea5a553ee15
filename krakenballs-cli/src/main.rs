//src/main.rs
mod cli; // Keep cli module for parsing args

use anyhow::{anyhow, bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::io::{self, stdout};
use tracing_subscriber::EnvFilter;

use krakenballs_lib::{
    builtin_themes, find_builtin_theme, plans, programs, sets, AppService, Error, Exercise,
    ExerciseInput, Plan, PlanDraft, PlanExercise, Program, ProgramDay, ProgramDraft, SetField,
    Theme,
};

fn main() -> Result<()> {
    // --- Check for completion generation request FIRST ---
    let cli_args = cli::parse_args(); // Parse arguments once
    let export_csv = cli_args.export_csv;

    if let cli::Commands::GenerateCompletion { shell } = cli_args.command {
        let mut cmd = cli::build_cli_command();
        let bin_name = cmd.get_name().to_string();

        eprintln!("Generating completion script for {shell}...");
        clap_complete::generate(shell, &mut cmd, bin_name, &mut stdout());
        return Ok(());
    }

    init_logging();

    // Initialize the application service (loads config, opens storage)
    let mut service =
        AppService::initialize().context("Failed to initialize application service")?;
    let events = service.subscribe();

    match cli_args.command {
        cli::Commands::GenerateCompletion { .. } => {
            unreachable!("Completion generation should have exited already");
        }
        cli::Commands::Exercise(cmd) => run_exercise_command(&mut service, cmd, export_csv)?,
        cli::Commands::Plan(cmd) => run_plan_command(&mut service, cmd, export_csv)?,
        cli::Commands::Program(cmd) => run_program_command(&mut service, cmd, export_csv)?,
        cli::Commands::Theme(cmd) => run_theme_command(&mut service, cmd)?,
        cli::Commands::Storage(cmd) => run_storage_command(&mut service, cmd)?,
        cli::Commands::Config(cmd) => run_config_command(&mut service, cmd)?,
    }

    for event in events.try_iter() {
        tracing::debug!(?event, "store changed");
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// --- Command handlers ---

fn run_exercise_command(
    service: &mut AppService,
    cmd: cli::ExerciseCommand,
    export_csv: bool,
) -> Result<()> {
    match cmd {
        cli::ExerciseCommand::List => {
            let exercises = service.list_exercises();
            if exercises.is_empty() {
                println!("No exercises defined yet. Use 'exercise add' to create one.");
            } else if export_csv {
                print_exercise_csv(&exercises)?;
            } else {
                print_exercise_table(&exercises, service.config.header_color());
            }
        }
        cli::ExerciseCommand::Add { name, hold, fields } => {
            let input = ExerciseInput {
                id: None,
                name,
                description: fields.description,
                video_url: fields.video_url,
                is_hold: hold,
            };
            match service.upsert_exercise(&input) {
                Ok(ex) => println!(
                    "Successfully defined exercise: '{}' ({}) ID: {}",
                    ex.name,
                    measure_label(ex.is_hold),
                    ex.id
                ),
                Err(e) => bail!("Error creating exercise: {e}"),
            }
        }
        cli::ExerciseCommand::Edit {
            id,
            name,
            hold,
            fields,
        } => {
            let current = service
                .get_exercise(&id)
                .ok_or_else(|| anyhow!("Exercise not found: {id}"))?;
            let input = ExerciseInput {
                id: Some(current.id),
                name: name.unwrap_or(current.name),
                description: fields.description.or(current.description),
                video_url: fields.video_url.or(current.video_url),
                is_hold: hold.unwrap_or(current.is_hold),
            };
            match service.upsert_exercise(&input) {
                Ok(ex) => {
                    println!("Successfully updated exercise '{}'.", ex.name);
                    println!("Note: plans that already use this exercise keep their copy.");
                }
                Err(e) => bail!("Error editing exercise '{id}': {e}"),
            }
        }
        cli::ExerciseCommand::Delete { id } => match service.delete_exercise(&id) {
            Ok(true) => println!("Deleted exercise {id}. Plans that use it were not changed."),
            Ok(false) => println!("No exercise with ID {id}."),
            Err(e) => bail!("Error deleting exercise: {e}"),
        },
    }
    Ok(())
}

fn load_plan_draft(service: &AppService, plan_id: &str) -> Result<PlanDraft> {
    service
        .load_plan_for_edit(plan_id)
        .map(PlanDraft::from)
        .ok_or_else(|| Error::PlanNotFound(plan_id.to_string()).into())
}

fn placement<'a>(draft: &'a mut PlanDraft, placement_id: &str) -> Result<&'a mut PlanExercise> {
    draft
        .placement_mut(placement_id)
        .ok_or_else(|| anyhow!("Plan has no exercise placement {placement_id}"))
}

fn set_index(set_number: usize) -> Result<usize> {
    set_number
        .checked_sub(1)
        .ok_or_else(|| anyhow!("Set numbers start at 1."))
}

fn resolve_catalog_exercises(service: &AppService, ids: &[String]) -> Result<Vec<Exercise>> {
    let catalog = service.list_exercises();
    ids.iter()
        .map(|id| {
            catalog
                .iter()
                .find(|ex| &ex.id == id)
                .cloned()
                .ok_or_else(|| anyhow!("Exercise not found: {id}"))
        })
        .collect()
}

fn save_plan_draft(service: &mut AppService, draft: &PlanDraft) -> Result<Plan> {
    service
        .save_plan(draft)
        .map_err(|e| anyhow!("Error saving plan: {e}"))
}

fn run_plan_command(
    service: &mut AppService,
    cmd: cli::PlanCommand,
    export_csv: bool,
) -> Result<()> {
    let header_color = service.config.header_color();
    let bounds = service.set_bounds();
    match cmd {
        cli::PlanCommand::List => {
            let all = service.list_plans();
            if all.is_empty() {
                println!("No plans yet. Use 'plan create' to build one.");
            } else if export_csv {
                print_plan_csv(&all)?;
            } else {
                print_plan_table(&all, header_color);
            }
        }
        cli::PlanCommand::Show { plan_id } => {
            let plan = service
                .load_plan_for_edit(&plan_id)
                .ok_or_else(|| Error::PlanNotFound(plan_id.clone()))?;
            print_plan_detail(&plan, &service.list_exercises(), header_color);
        }
        cli::PlanCommand::Create { name, exercises } => {
            let selected = resolve_catalog_exercises(service, &exercises)?;
            let mut draft = PlanDraft::new(name);
            draft.add_exercises(&selected);
            let plan = save_plan_draft(service, &draft)?;
            println!(
                "Created plan '{}' with {} exercise(s). ID: {}",
                plan.name,
                plan.exercises.len(),
                plan.id
            );
        }
        cli::PlanCommand::Rename { plan_id, name } => {
            let mut draft = load_plan_draft(service, &plan_id)?;
            draft.name = name;
            let plan = save_plan_draft(service, &draft)?;
            println!("Renamed plan to '{}'.", plan.name);
        }
        cli::PlanCommand::Available { plan_id } => {
            let draft = load_plan_draft(service, &plan_id)?;
            let available = service.available_exercises(&draft);
            if available.is_empty() {
                println!("Every catalog exercise is already in this plan.");
            } else {
                print_available_table(&available, header_color);
            }
        }
        cli::PlanCommand::AddExercise {
            plan_id,
            exercise_ids,
        } => {
            let selected = resolve_catalog_exercises(service, &exercise_ids)?;
            let mut draft = load_plan_draft(service, &plan_id)?;
            let added = draft.add_exercises(&selected);
            if added == 0 {
                println!("Those exercises are already in the plan.");
                return Ok(());
            }
            save_plan_draft(service, &draft)?;
            println!("Added {added} exercise(s) to the plan.");
        }
        cli::PlanCommand::RemoveExercise {
            plan_id,
            placement_id,
        } => {
            let mut draft = load_plan_draft(service, &plan_id)?;
            if !draft.remove_exercise(&placement_id) {
                bail!("Plan has no exercise placement {placement_id}");
            }
            save_plan_draft(service, &draft)?;
            println!("Removed exercise from the plan.");
        }
        cli::PlanCommand::AddSet {
            plan_id,
            placement_id,
        } => {
            let mut draft = load_plan_draft(service, &plan_id)?;
            let target = placement(&mut draft, &placement_id)?;
            if !sets::add_set(&mut target.sets, bounds) {
                println!("'{}' already has the maximum of {} sets.", target.name, bounds.max_sets);
                return Ok(());
            }
            let count = target.sets.len();
            save_plan_draft(service, &draft)?;
            println!("Added set #{count}.");
        }
        cli::PlanCommand::RemoveSet {
            plan_id,
            placement_id,
            set_number,
        } => {
            let index = set_index(set_number)?;
            let mut draft = load_plan_draft(service, &plan_id)?;
            let target = placement(&mut draft, &placement_id)?;
            if !sets::remove_set(&mut target.sets, index, bounds) {
                println!(
                    "Can't remove set #{set_number}: '{}' has {} set(s), minimum is {}.",
                    target.name,
                    target.sets.len(),
                    bounds.min_sets
                );
                return Ok(());
            }
            save_plan_draft(service, &draft)?;
            println!("Removed set #{set_number}. Later sets were renumbered.");
        }
        cli::PlanCommand::SetField {
            plan_id,
            placement_id,
            set_number,
            field,
            value,
        } => {
            let field: SetField = field.parse().map_err(|_| {
                anyhow!("Unknown set field '{field}'. Use reps, weight or timeInterval.")
            })?;
            let index = set_index(set_number)?;
            let mut draft = load_plan_draft(service, &plan_id)?;
            let target = placement(&mut draft, &placement_id)?;
            if !sets::update_field(&mut target.sets, index, field, &value) {
                bail!("'{}' has no set #{set_number}", target.name);
            }
            save_plan_draft(service, &draft)?;
            println!("Updated {field} of set #{set_number}.");
        }
        cli::PlanCommand::Delete { plan_id } => match service.delete_plan(&plan_id) {
            Ok(true) => println!("Deleted plan {plan_id}. Programs keep their day assignments."),
            Ok(false) => println!("No plan with ID {plan_id}."),
            Err(e) => bail!("Error deleting plan: {e}"),
        },
    }
    Ok(())
}

fn load_program_draft(service: &AppService, program_id: &str) -> Result<ProgramDraft> {
    service
        .load_program(program_id)
        .map(ProgramDraft::from)
        .ok_or_else(|| Error::ProgramNotFound(program_id.to_string()).into())
}

fn day_index(day: usize) -> Result<usize> {
    day.checked_sub(1)
        .ok_or_else(|| anyhow!("Cycle days start at 1."))
}

fn save_program_draft(service: &mut AppService, draft: &ProgramDraft) -> Result<Program> {
    service
        .save_program(draft)
        .map_err(|e| anyhow!("Error saving program: {e}"))
}

fn run_program_command(
    service: &mut AppService,
    cmd: cli::ProgramCommand,
    export_csv: bool,
) -> Result<()> {
    let header_color = service.config.header_color();
    match cmd {
        cli::ProgramCommand::List => {
            let all = service.list_programs();
            if all.is_empty() {
                println!("No programs yet. Use 'program create' to set one up.");
            } else if export_csv {
                print_program_csv(&all)?;
            } else {
                print_program_table(&all, header_color);
            }
        }
        cli::ProgramCommand::Show { program_id, day } => {
            let program = service
                .load_program(&program_id)
                .ok_or_else(|| Error::ProgramNotFound(program_id.clone()))?;
            let plans = service.list_plans();
            match day {
                Some(absolute) => match program.cycle_day(absolute) {
                    Some(cycle_day) => println!(
                        "Day {absolute} of '{}' is cycle day {}: {}",
                        program.name,
                        cycle_day.day_number,
                        describe_day(cycle_day, &plans)
                    ),
                    None => println!(
                        "Day {absolute} is outside '{}' (1-{}).",
                        program.name, program.total_days
                    ),
                },
                None => print_program_detail(&program, &plans, header_color),
            }
        }
        cli::ProgramCommand::Create {
            name,
            cycle_days,
            total_days,
            description,
        } => {
            let mut draft = ProgramDraft::new(name, cycle_days, total_days)?;
            draft.description = description.unwrap_or_default();
            let program = save_program_draft(service, &draft)?;
            println!(
                "Created program '{}' ({}-day cycle over {} days). ID: {}",
                program.name, program.cycle_days, program.total_days, program.id
            );
        }
        cli::ProgramCommand::Edit {
            program_id,
            name,
            description,
            cycle_days,
            total_days,
        } => {
            let mut draft = load_program_draft(service, &program_id)?;
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(n) = cycle_days {
                draft.set_cycle_length(n)?;
            }
            if let Some(total) = total_days {
                draft.total_days = total;
            }
            let program = save_program_draft(service, &draft)?;
            println!("Updated program '{}'.", program.name);
        }
        cli::ProgramCommand::Rest { program_id, day } => {
            let mut draft = load_program_draft(service, &program_id)?;
            let index = day_index(day)?;
            draft.toggle_rest_day(index)?;
            let program = save_program_draft(service, &draft)?;
            let now_rest = program.days[index].is_rest_day;
            println!(
                "Day {day} is now a {}.",
                if now_rest { "rest day" } else { "work day with no plan" }
            );
        }
        cli::ProgramCommand::Assign {
            program_id,
            day,
            plan_id,
        } => {
            let plan = service
                .load_plan_for_edit(&plan_id)
                .ok_or_else(|| Error::PlanNotFound(plan_id.clone()))?;
            let mut draft = load_program_draft(service, &program_id)?;
            draft.assign_plan(day_index(day)?, &plan)?;
            save_program_draft(service, &draft)?;
            println!("Assigned '{}' to day {day}.", plan.name);
        }
        cli::ProgramCommand::Unassign { program_id, day } => {
            let mut draft = load_program_draft(service, &program_id)?;
            draft.unassign_plan(day_index(day)?)?;
            save_program_draft(service, &draft)?;
            println!("Cleared the plan for day {day}.");
        }
        cli::ProgramCommand::ToggleActive { program_id } => {
            match service.toggle_program_active(&program_id) {
                Ok(program) => println!(
                    "Program '{}' is now {}.",
                    program.name,
                    if program.is_active { "active" } else { "inactive" }
                ),
                Err(e) => bail!("Error toggling program: {e}"),
            }
        }
        cli::ProgramCommand::Delete { program_id } => {
            match service.delete_program(&program_id) {
                Ok(true) => println!("Deleted program {program_id}."),
                Ok(false) => println!("No program with ID {program_id}."),
                Err(e) => bail!("Error deleting program: {e}"),
            }
        }
    }
    Ok(())
}

fn run_theme_command(service: &mut AppService, cmd: cli::ThemeCommand) -> Result<()> {
    let header_color = service.config.header_color();
    match cmd {
        cli::ThemeCommand::Show => print_theme_table(&[service.theme()], header_color),
        cli::ThemeCommand::List => print_theme_table(&builtin_themes(), header_color),
        cli::ThemeCommand::Set { name } => {
            let theme =
                find_builtin_theme(&name).ok_or_else(|| anyhow!("Unknown theme '{name}'"))?;
            match service.set_theme(&theme) {
                Ok(()) => println!("Theme set to {}.", theme.name),
                Err(e) => bail!("Error saving theme: {e}"),
            }
        }
        cli::ThemeCommand::Reset => match service.reset_theme() {
            Ok(()) => println!("Theme reset to {}.", Theme::default().name),
            Err(e) => bail!("Error resetting theme: {e}"),
        },
    }
    Ok(())
}

fn run_storage_command(service: &mut AppService, cmd: cli::StorageCommand) -> Result<()> {
    match cmd {
        cli::StorageCommand::Dump => {
            let entries = service.dump_storage().context("Failed to read storage")?;
            if entries.is_empty() {
                println!("Storage is empty.");
            } else {
                print_storage_table(&entries, service.config.header_color());
            }
        }
        cli::StorageCommand::Remove { key } => match service.remove_storage_key(&key) {
            Ok(()) => println!("\"{key}\" deleted."),
            Err(e) => bail!("Failed to delete \"{key}\": {e}"),
        },
        cli::StorageCommand::Reset { yes } => {
            if !yes {
                bail!("This deletes every exercise, plan, program and theme. Re-run with --yes.");
            }
            match service.reset_all_data() {
                Ok(()) => println!("All data cleared. Default data will not be recreated."),
                Err(e) => bail!("Failed to clear data: {e}"),
            }
        }
        cli::StorageCommand::Path => println!("{}", service.get_db_path().display()),
    }
    Ok(())
}

fn run_config_command(service: &mut AppService, cmd: cli::ConfigCommand) -> Result<()> {
    match cmd {
        cli::ConfigCommand::Show => {
            println!("Config file: {}", service.get_config_path().display());
            println!("Sets per exercise: {}-{}", service.config.min_sets, service.config.max_sets);
            println!("Auto seed: {}", service.config.auto_seed);
            println!("Header color: {}", service.config.header_color);
        }
        cli::ConfigCommand::SetBounds { min, max } => match service.set_set_bounds(min, max) {
            Ok(()) => println!("Sets per exercise now limited to {min}-{max}. Config updated."),
            Err(e) => bail!("Error setting set bounds: {e}"),
        },
        cli::ConfigCommand::SetHeaderColor { color } => match service.set_header_color(&color) {
            Ok(()) => println!(
                "Header color set to {}. Config updated.",
                service.config.header_color
            ),
            Err(e) => bail!("Error setting header color: {e}"),
        },
        cli::ConfigCommand::SetAutoSeed { enabled } => match service.set_auto_seed(enabled) {
            Ok(()) => println!("Auto seed set to {enabled}. Config updated."),
            Err(e) => bail!("Error setting auto seed: {e}"),
        },
    }
    Ok(())
}

// --- Output helpers ---

const fn measure_label(is_hold: bool) -> &'static str {
    if is_hold {
        "hold"
    } else {
        "reps"
    }
}

fn format_number(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v}"))
}

fn describe_day(day: &ProgramDay, plans: &[Plan]) -> String {
    if day.is_rest_day {
        return "Rest".to_string();
    }
    match (programs::resolve_day_plan(day, plans), day.plan_name.as_deref()) {
        (Some(plan), _) => plan.name.clone(),
        // The plan was deleted after it was assigned.
        (None, Some(name)) => format!("{name} (deleted)"),
        (None, None) => "Unassigned".to_string(),
    }
}

fn new_table(headers: &[&str], header_color: Color) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(header_color))
                .collect::<Vec<_>>(),
        );
    table
}

fn print_exercise_table(exercises: &[Exercise], header_color: Color) {
    let mut table = new_table(&["ID", "Name", "Measure", "Description", "Video"], header_color);
    for exercise in exercises {
        table.add_row(vec![
            Cell::new(&exercise.id),
            Cell::new(&exercise.name),
            Cell::new(measure_label(exercise.is_hold)),
            Cell::new(exercise.description.as_deref().unwrap_or("-")),
            Cell::new(exercise.video_url.as_deref().unwrap_or("-")),
        ]);
    }
    println!("{table}");
}

fn print_exercise_csv(exercises: &[Exercise]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["ID", "Name", "IsHold", "Description", "VideoUrl", "UpdatedAt"])?;
    for exercise in exercises {
        let updated_at = exercise.updated_at.to_rfc3339();
        writer.write_record([
            exercise.id.as_str(),
            exercise.name.as_str(),
            if exercise.is_hold { "true" } else { "false" },
            exercise.description.as_deref().unwrap_or(""),
            exercise.video_url.as_deref().unwrap_or(""),
            updated_at.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn print_plan_table(all: &[Plan], header_color: Color) {
    let mut table = new_table(&["ID", "Name", "Exercises", "Sets", "Updated"], header_color);
    for plan in all {
        table.add_row(vec![
            Cell::new(&plan.id),
            Cell::new(&plan.name),
            Cell::new(plan.exercises.len()),
            Cell::new(plan.total_sets()),
            Cell::new(plan.updated_at.format("%Y-%m-%d %H:%M")),
        ]);
    }
    println!("{table}");
}

fn print_plan_csv(all: &[Plan]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["ID", "Name", "Exercises", "Sets", "UpdatedAt"])?;
    for plan in all {
        writer.write_record([
            plan.id.clone(),
            plan.name.clone(),
            plan.exercises.len().to_string(),
            plan.total_sets().to_string(),
            plan.updated_at.to_rfc3339(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn print_plan_detail(plan: &Plan, catalog: &[Exercise], header_color: Color) {
    println!("{} ({})", plan.name, plan.id);
    let mut table = new_table(
        &["Placement", "Exercise", "Set", "Reps / Secs", "Weight"],
        header_color,
    );
    for placement in &plan.exercises {
        let name = if plans::resolve_exercise(placement, catalog).is_some() {
            placement.name.clone()
        } else {
            format!("{} (removed from catalog)", placement.name)
        };
        for (index, set) in placement.sets.iter().enumerate() {
            let target = set.target(placement.is_hold);
            let target = if placement.is_hold {
                format!("{}s", format_number(target))
            } else {
                format_number(target)
            };
            table.add_row(vec![
                Cell::new(if index == 0 { placement.id.as_str() } else { "" }),
                Cell::new(if index == 0 { name.as_str() } else { "" }),
                Cell::new(sets::set_number(index)),
                Cell::new(target),
                Cell::new(format!("{}", set.weight)),
            ]);
        }
    }
    println!("{table}");
}

fn print_available_table(available: &[PlanExercise], header_color: Color) {
    let mut table = new_table(&["Exercise ID", "Name", "Measure", "Default set"], header_color);
    for candidate in available {
        let default_set = candidate
            .sets
            .first()
            .map(|s| format_number(s.target(candidate.is_hold)))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(&candidate.exercise_id),
            Cell::new(&candidate.name),
            Cell::new(measure_label(candidate.is_hold)),
            Cell::new(default_set),
        ]);
    }
    println!("{table}");
}

fn print_program_table(all: &[Program], header_color: Color) {
    let mut table = new_table(
        &["ID", "Name", "Cycle", "Total days", "Rest days", "Active"],
        header_color,
    );
    for program in all {
        table.add_row(vec![
            Cell::new(&program.id),
            Cell::new(&program.name),
            Cell::new(program.cycle_days),
            Cell::new(program.total_days),
            Cell::new(program.rest_day_count()),
            Cell::new(if program.is_active { "yes" } else { "no" }),
        ]);
    }
    println!("{table}");
}

fn print_program_csv(all: &[Program]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["ID", "Name", "CycleDays", "TotalDays", "IsActive"])?;
    for program in all {
        writer.write_record([
            program.id.clone(),
            program.name.clone(),
            program.cycle_days.to_string(),
            program.total_days.to_string(),
            program.is_active.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn print_program_detail(program: &Program, plans: &[Plan], header_color: Color) {
    println!(
        "{} ({}): {}-day cycle over {} days{}",
        program.name,
        program.id,
        program.cycle_days,
        program.total_days,
        if program.is_active { ", active" } else { "" }
    );
    if let Some(description) = &program.description {
        println!("{description}");
    }
    let mut table = new_table(&["Day", "Plan"], header_color);
    for day in &program.days {
        table.add_row(vec![
            Cell::new(day.day_number),
            Cell::new(describe_day(day, plans)),
        ]);
    }
    println!("{table}");
}

fn print_theme_table(themes: &[Theme], header_color: Color) {
    let mut table = new_table(
        &["Name", "Primary", "Background", "Card", "Text", "Border", "Notification"],
        header_color,
    );
    for theme in themes {
        table.add_row(vec![
            Cell::new(&theme.name),
            Cell::new(&theme.primary),
            Cell::new(&theme.background),
            Cell::new(&theme.card),
            Cell::new(&theme.text),
            Cell::new(&theme.border),
            Cell::new(&theme.notification),
        ]);
    }
    println!("{table}");
}

fn print_storage_table(entries: &[(String, String)], header_color: Color) {
    let mut table = new_table(&["Key", "Value"], header_color);
    for (key, value) in entries {
        table.add_row(vec![Cell::new(key), Cell::new(value)]);
    }
    println!("{table}");
}
