//! af-scenario: scenario file format, validation and scripted runs.

pub mod node;
pub mod run;
pub mod schema;
pub mod validate;

pub use node::{NodeRole, ScriptedNode};
pub use run::{ScenarioRun, build_run};
pub use schema::*;
pub use validate::{ValidationError, validate_scenario};

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] af_network::NetworkError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ScenarioResult<ScenarioDef> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn parse_yaml(content: &str) -> ScenarioResult<ScenarioDef> {
    let scenario: ScenarioDef = serde_yaml::from_str(content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_yaml(path: &std::path::Path, scenario: &ScenarioDef) -> ScenarioResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ScenarioResult<ScenarioDef> {
    let content = std::fs::read_to_string(path)?;
    let scenario: ScenarioDef = serde_json::from_str(&content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_json(path: &std::path::Path, scenario: &ScenarioDef) -> ScenarioResult<()> {
    validate_scenario(scenario)?;
    let content = serde_json::to_string_pretty(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, anything else YAML.
pub fn load(path: &std::path::Path) -> ScenarioResult<ScenarioDef> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}
