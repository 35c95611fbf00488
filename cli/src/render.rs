use eatwise_core::{DayPlan, FoodRecord, Targets};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct FoodRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "kcal")]
    calories: String,
    #[tabled(rename = "P (g)")]
    protein: String,
    #[tabled(rename = "C (g)")]
    carbs: String,
    #[tabled(rename = "F (g)")]
    fat: String,
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Food")]
    name: String,
    #[tabled(rename = "Grams")]
    grams: String,
    #[tabled(rename = "kcal")]
    calories: String,
    #[tabled(rename = "P (g)")]
    protein: String,
    #[tabled(rename = "C (g)")]
    carbs: String,
    #[tabled(rename = "F (g)")]
    fat: String,
}

#[derive(Tabled)]
struct WorkoutRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Workout")]
    label: String,
    #[tabled(rename = "kcal burned")]
    burned: String,
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

pub fn print_foods(foods: &[&FoodRecord]) {
    if foods.is_empty() {
        println!("No foods match.");
        return;
    }

    let rows = foods.iter().map(|f| FoodRow {
        name: f.name.clone(),
        category: f
            .category
            .map(|c| c.as_str().to_string())
            .unwrap_or_else(|| "-".to_string()),
        calories: format!("{}", f.calories),
        protein: format!("{}", f.protein),
        carbs: format!("{}", f.carbs),
        fat: format!("{}", f.fat),
    });
    println!("{}", styled(Table::new(rows)));
}

pub fn print_targets(targets: &Targets) {
    println!(
        "\x1b[1;36mTargets\x1b[0m  {} kcal | {} g protein | {} g carbs | {} g fat",
        targets.kcal, targets.protein_g, targets.carbs_g, targets.fat_g
    );
}

pub fn print_day(targets: Option<Targets>, plan: &DayPlan) {
    if let Some(targets) = targets {
        print_targets(&targets);
    }

    if plan.entries().is_empty() {
        println!("No foods planned for today.");
    } else {
        let rows = plan.entries().iter().enumerate().map(|(i, e)| EntryRow {
            index: i,
            name: e.food_name.clone(),
            grams: format!("{}", e.grams),
            calories: format!("{:.1}", e.calories),
            protein: format!("{:.1}", e.protein),
            carbs: format!("{:.1}", e.carbs),
            fat: format!("{:.1}", e.fat),
        });
        println!("{}", styled(Table::new(rows)));
    }

    if !plan.workouts().is_empty() {
        let rows = plan.workouts().iter().enumerate().map(|(i, w)| WorkoutRow {
            index: i,
            label: w.label.clone(),
            burned: format!("{:.0}", w.calories_burned),
        });
        println!("{}", styled(Table::new(rows)));
    }

    let totals = plan.totals();
    println!(
        "\x1b[1mTotals\x1b[0m  {:.0} kcal | {:.0} g P | {:.0} g C | {:.0} g F | burned {:.0} | net {:.0}",
        totals.calories, totals.protein, totals.carbs, totals.fat, totals.burned, totals.net
    );

    if let Some(targets) = targets {
        let remaining = f64::from(targets.kcal) - totals.net;
        println!("Remaining vs target: {:.0} kcal", remaining);
    }
}
