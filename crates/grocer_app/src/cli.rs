use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "grocer",
    version,
    about = "Scale the week's recipes and build one consolidated grocery list."
)]
pub struct Cli {
    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal, global = true)]
    pub log: LogTarget,

    /// Log at debug level (overrides GROCER_LOG_LEVEL).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load recipes from Notion, structure them with OpenAI, write them back
    /// and publish the grocery list page.
    Run(RunArgs),
    /// Build the grocery list from a JSON file of already structured recipes.
    Local(LocalArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Publish the aggregated list without grouping it by aisle.
    #[arg(long)]
    pub no_organize: bool,

    /// Also save the published list to DIR/grocery-list.txt.
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct LocalArgs {
    /// JSON file holding an array of recipes, or `{ "recipes": [...] }`.
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Save the list to DIR/grocery-list.txt.
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Print only the grocery list, not each recipe's ingredients.
    #[arg(long)]
    pub list_only: bool,
}
