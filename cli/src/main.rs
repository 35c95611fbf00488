mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eatwise_core::{
    FileKeyValueStore, FoodFilter, PlannerConfig, PlannerError, PlannerSession, Profile,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

const DEFAULT_GRAMS: f64 = 100.0;

#[derive(Parser)]
#[command(name = "eatwise")]
#[command(about = "Plan a day of eating against calorie and macro targets", long_about = None)]
struct Cli {
    /// Directory holding the saved plan (default: ~/.eatwise)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Food catalog JSON file (default: bundled list)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute daily targets from your profile and save them with the plan
    Targets {
        /// male or female
        #[arg(long)]
        sex: String,
        /// Age in years
        #[arg(long)]
        age: u32,
        /// Height in cm
        #[arg(long)]
        height: f64,
        /// Weight in kg
        #[arg(long)]
        weight: f64,
        /// sedentary, light, moderate, very or athlete
        #[arg(long, default_value = "moderate")]
        activity: String,
        /// cut, recomp or bulk
        #[arg(long, default_value = "recomp")]
        goal: String,
    },
    /// List catalog foods (values per 100 g)
    Foods {
        /// Case-insensitive name search
        #[arg(long, short)]
        search: Option<String>,
        /// Only foods with at least 10 g protein
        #[arg(long)]
        high_protein: bool,
        /// Only foods with at most 80 kcal
        #[arg(long)]
        low_cal: bool,
    },
    /// Add a food to the day
    Add {
        /// Exact food name from the catalog
        name: String,
        #[arg(long, short, default_value_t = DEFAULT_GRAMS)]
        grams: f64,
    },
    /// Remove the food at INDEX
    Remove { index: usize },
    /// Change the grams of the food at INDEX
    Grams { index: usize, grams: f64 },
    /// Add or remove workouts
    Workout {
        #[command(subcommand)]
        action: WorkoutAction,
    },
    /// Replace the day's foods with a random breakfast, lunch, dinner and snack
    Sample {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show targets, foods, workouts and totals
    Show,
    /// Delete the saved plan
    Clear,
}

#[derive(Subcommand)]
enum WorkoutAction {
    /// Log a workout
    Add { label: String, calories: f64 },
    /// Remove the workout at INDEX
    Remove { index: usize },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("eatwise=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_profile(
    sex: &str,
    age: u32,
    height: f64,
    weight: f64,
    activity: &str,
    goal: &str,
) -> Result<Profile, PlannerError> {
    Ok(Profile {
        sex: sex.parse()?,
        age,
        height_cm: height,
        weight_kg: weight,
        activity: activity.parse()?,
        goal: goal.parse()?,
    })
}

/// Restores the saved day. A missing plan is normal; anything else is reported.
fn load_session(session: &mut PlannerSession<FileKeyValueStore>) {
    match session.load() {
        Ok(()) | Err(PlannerError::NotFound) => {}
        Err(e) => eprintln!("Warning: {}. Starting from an empty day.", e),
    }
}

fn save_session(session: &PlannerSession<FileKeyValueStore>) {
    if let Err(e) = session.save() {
        eprintln!("Warning: {}. Changes were not saved.", e);
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = PlannerConfig::resolve(cli.data_dir, cli.catalog)?;
    let catalog = config.load_catalog()?;
    let store = FileKeyValueStore::new(config.data_dir.clone())
        .context("Could not open the plan storage")?;
    let mut session = PlannerSession::new(catalog, store);

    match cli.command {
        Some(Commands::Targets {
            sex,
            age,
            height,
            weight,
            activity,
            goal,
        }) => {
            let profile = parse_profile(&sex, age, height, weight, &activity, &goal)?;
            load_session(&mut session);
            let targets = session.calculate_targets(&profile)?;
            render::print_targets(&targets);
            save_session(&session);
        }
        Some(Commands::Foods {
            search,
            high_protein,
            low_cal,
        }) => {
            let filter = FoodFilter {
                query: search.unwrap_or_default(),
                high_protein,
                low_calorie: low_cal,
            };
            render::print_foods(&session.catalog().filter(&filter));
        }
        Some(Commands::Add { name, grams }) => {
            load_session(&mut session);
            let before = session.plan().entries().len();
            session.add_food(&name, grams);
            if session.plan().entries().len() == before {
                println!("No food named '{}' in the catalog.", name);
                return Ok(());
            }
            render::print_day(session.targets(), session.plan());
            save_session(&session);
        }
        Some(Commands::Remove { index }) => {
            load_session(&mut session);
            session.remove_food(index);
            render::print_day(session.targets(), session.plan());
            save_session(&session);
        }
        Some(Commands::Grams { index, grams }) => {
            load_session(&mut session);
            if !session.update_grams(index, grams) {
                println!("No food at index {} or it is no longer in the catalog.", index);
                return Ok(());
            }
            render::print_day(session.targets(), session.plan());
            save_session(&session);
        }
        Some(Commands::Workout { action }) => {
            load_session(&mut session);
            match action {
                WorkoutAction::Add { label, calories } => session.add_workout(&label, calories),
                WorkoutAction::Remove { index } => session.remove_workout(index),
            }
            render::print_day(session.targets(), session.plan());
            save_session(&session);
        }
        Some(Commands::Sample { seed }) => {
            load_session(&mut session);
            match seed {
                Some(seed) => session.generate_sample_day(&mut StdRng::seed_from_u64(seed)),
                None => session.generate_sample_day(&mut rand::thread_rng()),
            }
            render::print_day(session.targets(), session.plan());
            save_session(&session);
        }
        Some(Commands::Show) | None => {
            load_session(&mut session);
            render::print_day(session.targets(), session.plan());
        }
        Some(Commands::Clear) => {
            session.clear_saved()?;
            println!("Saved plan cleared.");
        }
    }
    Ok(())
}
