use grocer_core::{degenerate_ratio, plan_week};
use grocer_logging::{grocer_debug, grocer_error, grocer_info, grocer_warn};

use crate::{
    ListOrganizer, ListPublisher, PipelineError, PipelineEvent, RecipeSink, RecipeSource, Stage,
    Structurer, WeekSummary,
};

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: PipelineEvent);
}

/// Reports pipeline progress through the global logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn emit(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::StageStarted(stage) => grocer_info!("Stage: {:?}", stage),
            PipelineEvent::WriteBackFailed { recipe_id, kind } => {
                grocer_warn!("Write-back failed for recipe {}: {}", recipe_id, kind)
            }
            PipelineEvent::Finished(summary) => grocer_info!(
                "Finished: {} recipes, {} updated, {} write-back failures, {} list lines",
                summary.recipe_count,
                summary.updated,
                summary.write_back_failures,
                summary.grocery_list.lines().count()
            ),
        }
    }
}

/// One weekly run: load, structure, scale, write back, aggregate, publish.
pub struct WeeklyPipeline<'a> {
    pub source: &'a dyn RecipeSource,
    pub structurer: &'a dyn Structurer,
    /// `None` publishes the aggregated list as is.
    pub organizer: Option<&'a dyn ListOrganizer>,
    pub sink: &'a dyn RecipeSink,
    pub publisher: &'a dyn ListPublisher,
    pub progress: &'a dyn ProgressSink,
}

impl WeeklyPipeline<'_> {
    pub async fn run(&self, title: &str) -> Result<WeekSummary, PipelineError> {
        self.progress.emit(PipelineEvent::StageStarted(Stage::Loading));
        let mut raw = self
            .source
            .load_recipes()
            .await
            .map_err(|err| fatal(PipelineError::Load(err)))?;
        raw.retain(|recipe| recipe.num_days > 0);

        self.progress
            .emit(PipelineEvent::StageStarted(Stage::Structuring));
        let sources = if raw.is_empty() {
            grocer_warn!("No recipes scheduled this week");
            Vec::new()
        } else {
            self.structurer
                .structure_recipes(&raw)
                .await
                .map_err(|err| fatal(PipelineError::Structure(err)))?
        };

        self.progress.emit(PipelineEvent::StageStarted(Stage::Planning));
        let plan = plan_week(sources);
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

        self.progress
            .emit(PipelineEvent::StageStarted(Stage::WritingBack));
        let mut write_back_failures = 0;
        for update in &plan.updates {
            if let Err(err) = self.sink.write_back(update).await {
                write_back_failures += 1;
                grocer_debug!("Write-back error detail: {}", err.message);
                self.progress.emit(PipelineEvent::WriteBackFailed {
                    recipe_id: update.id.clone(),
                    kind: err.kind,
                });
            }
        }

        let grocery_list = plan.grocery_list.render();
        let (published_list, organized) = match self.organizer {
            Some(organizer) => {
                self.progress
                    .emit(PipelineEvent::StageStarted(Stage::Organizing));
                match organizer.organize(&grocery_list).await {
                    Ok(organized) => (organized, true),
                    Err(err) => {
                        grocer_warn!("Organizing grocery list failed, publishing as is: {}", err);
                        (grocery_list.clone(), false)
                    }
                }
            }
            None => (grocery_list.clone(), false),
        };

        self.progress
            .emit(PipelineEvent::StageStarted(Stage::Publishing));
        self.publisher
            .publish(title, &published_list)
            .await
            .map_err(|err| fatal(PipelineError::Publish(err)))?;

        let summary = WeekSummary {
            recipe_count: plan.recipes.len(),
            unstructured_count: plan
                .recipes
                .iter()
                .filter(|recipe| recipe.ingredients.is_none())
                .count(),
            updated: plan.updates.len() - write_back_failures,
            write_back_failures,
            grocery_list,
            published_list,
            organized,
        };
        self.progress.emit(PipelineEvent::StageStarted(Stage::Done));
        self.progress
            .emit(PipelineEvent::Finished(summary.clone()));
        Ok(summary)
    }
}

fn fatal(err: PipelineError) -> PipelineError {
    grocer_error!("{}", err);
    err
}

/// Drives the pipeline to completion on a fresh tokio runtime.
pub fn run_blocking(pipeline: &WeeklyPipeline<'_>, title: &str) -> Result<WeekSummary, PipelineError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(pipeline.run(title))
}
