// Figure out what kind of project lives in a directory and read its dependencies
use crate::models::{DependencyInfo, ProjectType};
use crate::parsers;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Detect the project type from indicator files in `dir`
///
/// Checked in `ProjectType::ALL` order, so a Phoenix app that also ships a
/// `package.json` for its assets is still an Elixir project.
pub fn detect_project_type(dir: &Path) -> Option<ProjectType> {
    let detected = ProjectType::ALL
        .into_iter()
        .find(|project_type| dir.join(project_type.indicator_file()).is_file());

    debug!("Detected project type {:?} in {}", detected, dir.display());
    detected
}

/// Read the dependency list of a `project_type` project rooted at `dir`
pub fn load_dependencies(dir: &Path, project_type: ProjectType) -> Result<DependencyInfo> {
    let path = dir.join(project_type.lock_file());
    debug!("Reading {} dependencies from {}", project_type, path.display());

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let info = match project_type {
        ProjectType::Elixir => parsers::parse_mix_lock(&content),
        ProjectType::Ruby => parsers::parse_gemfile_lock(&content),
        ProjectType::Rust => parsers::parse_cargo_toml(&content),
        ProjectType::Node => parsers::parse_package_json(&content),
        ProjectType::Python => parsers::parse_requirements_txt(&content),
    }
    .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!("Found {} dependencies", info.len());
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detect_nothing_in_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert_eq!(detect_project_type(dir.path()), None);
    }

    #[test]
    fn test_elixir_wins_over_node_assets() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        std::fs::write(dir.path().join("mix.exs"), "defmodule App.MixProject do end").unwrap();

        assert_eq!(detect_project_type(dir.path()), Some(ProjectType::Elixir));
    }

    #[test]
    fn test_missing_lock_file_names_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Gemfile"), "source 'https://rubygems.org'").unwrap();

        let err = load_dependencies(dir.path(), ProjectType::Ruby).unwrap_err();
        assert!(err.to_string().contains("Gemfile.lock"));
    }
}
