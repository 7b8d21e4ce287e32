use std::fs;
use std::path::{Path, PathBuf};

use grocer_core::SourceRecipe;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum LocalInputError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid recipe file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StructuredRecipes {
    Wrapped { recipes: Vec<SourceRecipe> },
    Bare(Vec<SourceRecipe>),
}

/// Parses structured recipes given either as a bare array or as `{ "recipes": [...] }`.
pub fn parse_structured_recipes(text: &str) -> Result<Vec<SourceRecipe>, serde_json::Error> {
    Ok(match serde_json::from_str(text)? {
        StructuredRecipes::Wrapped { recipes } | StructuredRecipes::Bare(recipes) => recipes,
    })
}

pub fn load_structured_recipes(path: &Path) -> Result<Vec<SourceRecipe>, LocalInputError> {
    let text = fs::read_to_string(path).map_err(|source| LocalInputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_structured_recipes(&text).map_err(|source| LocalInputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
