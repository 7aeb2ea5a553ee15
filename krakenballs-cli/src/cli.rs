// src/cli.rs
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Track exercises, workout plans and training programs", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print list output as CSV instead of a table
    #[arg(long, global = true)]
    pub export_csv: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the exercise catalog
    #[command(subcommand)]
    Exercise(ExerciseCommand),
    /// Build and edit workout plans
    #[command(subcommand)]
    Plan(PlanCommand),
    /// Schedule plans across a repeating cycle of days
    #[command(subcommand)]
    Program(ProgramCommand),
    /// Show or change the app theme
    #[command(subcommand)]
    Theme(ThemeCommand),
    /// Inspect or wipe local storage
    #[command(subcommand)]
    Storage(StorageCommand),
    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Generate shell completion scripts
    GenerateCompletion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct ExerciseFields {
    /// Free-text description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Link to a demonstration video
    #[arg(short, long)]
    pub video_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ExerciseCommand {
    /// List catalog exercises
    List,
    /// Define a new exercise
    Add {
        /// Name of the exercise (e.g., "Plank", "Pull-up")
        #[arg(short, long)]
        name: String,
        /// Measured as a timed hold instead of repetitions
        #[arg(long)]
        hold: bool,
        #[command(flatten)]
        fields: ExerciseFields,
    },
    /// Edit an existing exercise (plans keep their copied name)
    Edit {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        /// Switch between hold (true) and reps (false)
        #[arg(long)]
        hold: Option<bool>,
        #[command(flatten)]
        fields: ExerciseFields,
    },
    /// Delete an exercise (plans that use it are not changed)
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum PlanCommand {
    /// List saved plans
    List,
    /// Show a plan with every set
    Show { plan_id: String },
    /// Create a plan from one or more catalog exercises
    Create {
        name: String,
        /// Catalog exercise id to add (repeatable)
        #[arg(short, long = "exercise", required = true)]
        exercises: Vec<String>,
    },
    /// Rename a plan
    Rename { plan_id: String, name: String },
    /// List catalog exercises not yet in the plan
    Available { plan_id: String },
    /// Add catalog exercises to a plan
    AddExercise {
        plan_id: String,
        #[arg(required = true)]
        exercise_ids: Vec<String>,
    },
    /// Remove an exercise placement from a plan
    RemoveExercise { plan_id: String, placement_id: String },
    /// Append a copy of the last set
    AddSet { plan_id: String, placement_id: String },
    /// Remove a set by its number (1-based)
    RemoveSet {
        plan_id: String,
        placement_id: String,
        set_number: usize,
    },
    /// Change one field (reps, weight, timeInterval) of a set
    SetField {
        plan_id: String,
        placement_id: String,
        set_number: usize,
        field: String,
        value: String,
    },
    /// Delete a plan (programs keep their day assignments)
    Delete { plan_id: String },
}

#[derive(Subcommand, Debug)]
pub enum ProgramCommand {
    /// List saved programs
    List,
    /// Show a program's cycle, or the cycle day for one absolute day
    Show {
        program_id: String,
        /// Absolute day of the program (1-based)
        #[arg(long)]
        day: Option<u32>,
    },
    /// Create a program
    Create {
        name: String,
        #[arg(long)]
        cycle_days: u32,
        #[arg(long)]
        total_days: u32,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Change a program's name, description or day counts
    Edit {
        program_id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        cycle_days: Option<u32>,
        #[arg(long)]
        total_days: Option<u32>,
    },
    /// Toggle a cycle day between rest and work (1-based day)
    Rest { program_id: String, day: usize },
    /// Assign a plan to a cycle day (1-based day)
    Assign {
        program_id: String,
        day: usize,
        plan_id: String,
    },
    /// Clear the plan of a cycle day (1-based day)
    Unassign { program_id: String, day: usize },
    /// Toggle whether a program is active
    ToggleActive { program_id: String },
    /// Delete a program
    Delete { program_id: String },
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Show the current theme
    Show,
    /// List built-in themes
    List,
    /// Switch to a built-in theme
    Set { name: String },
    /// Go back to the default theme
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum StorageCommand {
    /// Print every stored key and value
    Dump,
    /// Delete a single key
    Remove { key: String },
    /// Delete all data and stop default data from being created again
    Reset {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
    /// Show the path to the storage file
    Path,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show configuration values and the config file path
    Show,
    /// Set the minimum and maximum number of sets per exercise
    SetBounds { min: usize, max: usize },
    /// Set the table header color (e.g., Green, Cyan)
    SetHeaderColor { color: String },
    /// Enable or disable the starter catalog on first run
    SetAutoSeed {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

// Function to parse CLI arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

// Function to build the command structure (needed for completion generation)
pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
