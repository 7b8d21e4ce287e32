use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use grocer_core::{degenerate_ratio, plan_week, stringify_ingredients, WeekPlan};
use grocer_engine::{
    load_structured_recipes, run_blocking, write_grocery_list, GrocerConfig, ListOrganizer,
    LogProgressSink, NotionClient, OpenAiClient, WeeklyPipeline,
};
use grocer_logging::{grocer_info, grocer_warn};

use crate::cli::{Command, LocalArgs, RunArgs};

pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run(args),
        Command::Local(args) => local(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let config = GrocerConfig::from_env().context("loading configuration")?;
    let notion = NotionClient::new(config.notion.clone(), &config.http)?;
    let openai = OpenAiClient::new(config.openai.clone(), &config.http)?;
    let organizer: Option<&dyn ListOrganizer> = if args.no_organize {
        None
    } else {
        Some(&openai)
    };

    let pipeline = WeeklyPipeline {
        source: &notion,
        structurer: &openai,
        organizer,
        sink: &notion,
        publisher: &notion,
        progress: &LogProgressSink,
    };
    let title = list_title(Local::now().date_naive());
    let summary = run_blocking(&pipeline, &title).context("weekly run failed")?;

    if let Some(dir) = args.output {
        let path = write_grocery_list(&dir, &summary.published_list)?;
        grocer_info!("Saved grocery list to {:?}", path);
    }
    println!("{}", summary.published_list);
    Ok(())
}

fn local(args: LocalArgs) -> Result<()> {
    let mut sources = load_structured_recipes(&args.input)?;
    let total = sources.len();
    sources.retain(|recipe| recipe.num_days > 0);
    grocer_info!(
        "Loaded {} scheduled recipes from {:?} ({} unscheduled skipped)",
        sources.len(),
        args.input,
        total - sources.len()
    );
    let plan = plan_week(sources);
    warn_about_data_quality(&plan);

    if !args.list_only {
        for recipe in &plan.recipes {
            println!("## {}\n{}\n", recipe.name, stringify_ingredients(recipe));
        }
    }
    let grocery_list = plan.grocery_list.render();
    println!("{grocery_list}");

    if let Some(dir) = args.output {
        let path = write_grocery_list(&dir, &grocery_list)?;
        grocer_info!("Saved grocery list to {:?}", path);
    }
    Ok(())
}

fn warn_about_data_quality(plan: &WeekPlan) {
    for recipe in &plan.recipes {
        if degenerate_ratio(recipe) {
            grocer_warn!(
                "Recipe \"{}\" has {} servings but {} adjusted servings; left unscaled",
                recipe.name,
                recipe.servings,
                recipe.adjusted_servings
            );
        }
        if recipe.ingredients.is_none() {
            grocer_warn!("Recipe \"{}\" has no structured ingredients", recipe.name);
        }
    }
}

/// Page title for the week's list, e.g. "October 18, 2026".
fn list_title(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::{list_title, local};
    use crate::cli::LocalArgs;

    #[test]
    fn title_uses_full_month_and_padded_day() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(list_title(date), "March 05, 2026");
    }

    #[test]
    fn local_command_writes_list_file() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("week.json");
        std::fs::write(
            &input,
            r#"{"recipes":[{"id":"1","name":"Pilaf","numDays":2,"servings":2,"adjustedServings":4,
                "formatted":true,"ingredientSections":[{"name":null,"ingredients":[
                {"name":"rice","measurement":{"unit":"cup","value":1},"note":null}]}]}]}"#,
        )
        .unwrap();
        let out = temp.path().join("out");

        local(LocalArgs {
            input,
            output: Some(out.clone()),
            list_only: true,
        })
        .unwrap();

        let saved = std::fs::read_to_string(out.join("grocery-list.txt")).unwrap();
        assert_eq!(saved, "Rice: 4 cup\n");
    }

    #[test]
    fn local_command_skips_unscheduled_recipes() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("week.json");
        std::fs::write(
            &input,
            r#"[{"id":"1","name":"Pilaf","numDays":1,"servings":1,"adjustedServings":1,
                "formatted":true,"ingredientSections":[{"name":null,"ingredients":[
                {"name":"rice","measurement":{"unit":"cup","value":1},"note":null}]}]},
               {"id":"2","name":"Risotto","numDays":0,"servings":1,"adjustedServings":1,
                "formatted":true,"ingredientSections":[{"name":null,"ingredients":[
                {"name":"arborio","measurement":{"unit":"cup","value":2},"note":null}]}]}]"#,
        )
        .unwrap();
        let out = temp.path().join("out");

        local(LocalArgs {
            input,
            output: Some(out.clone()),
            list_only: true,
        })
        .unwrap();

        let saved = std::fs::read_to_string(out.join("grocery-list.txt")).unwrap();
        assert_eq!(saved, "Rice: 1 cup\n");
    }
}
