use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A package the project depends on, as recorded by its package manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: Option<String>,
}

impl Dependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Package ecosystems pudding knows how to recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Elixir, // mix / hex.pm
    Ruby,   // bundler / rubygems.org
    Rust,   // cargo / crates.io
    Node,   // npm
    Python, // pip
}

impl ProjectType {
    /// Detection order when several indicator files sit in one directory
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Elixir,
        ProjectType::Ruby,
        ProjectType::Rust,
        ProjectType::Node,
        ProjectType::Python,
    ];

    /// Whether pudding has a docs backend for this ecosystem
    pub fn has_docs(&self) -> bool {
        matches!(self, ProjectType::Elixir | ProjectType::Ruby)
    }

    /// File whose presence marks a project of this type
    pub fn indicator_file(&self) -> &'static str {
        match self {
            ProjectType::Elixir => "mix.exs",
            ProjectType::Ruby => "Gemfile",
            ProjectType::Rust => "Cargo.toml",
            ProjectType::Node => "package.json",
            ProjectType::Python => "requirements.txt",
        }
    }

    /// File the dependency list (with versions, where possible) is read from
    pub fn lock_file(&self) -> &'static str {
        match self {
            ProjectType::Elixir => "mix.lock",
            ProjectType::Ruby => "Gemfile.lock",
            ProjectType::Rust => "Cargo.toml",
            ProjectType::Node => "package.json",
            ProjectType::Python => "requirements.txt",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectType::Elixir => write!(f, "elixir"),
            ProjectType::Ruby => write!(f, "ruby"),
            ProjectType::Rust => write!(f, "rust"),
            ProjectType::Node => write!(f, "node"),
            ProjectType::Python => write!(f, "python"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown project type: {0}")]
pub struct ParseProjectTypeError(String);

impl FromStr for ProjectType {
    type Err = ParseProjectTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elixir" | "hex" | "mix" => Ok(ProjectType::Elixir),
            "ruby" | "gem" | "gems" => Ok(ProjectType::Ruby),
            "rust" | "cargo" => Ok(ProjectType::Rust),
            "node" | "npm" => Ok(ProjectType::Node),
            "python" | "pip" => Ok(ProjectType::Python),
            _ => Err(ParseProjectTypeError(s.to_string())),
        }
    }
}

/// Everything pudding read from one project's lockfile or manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyInfo {
    pub project_type: ProjectType,
    pub dependencies: Vec<Dependency>,
}

impl DependencyInfo {
    pub fn new(project_type: ProjectType, dependencies: Vec<Dependency>) -> Self {
        Self {
            project_type,
            dependencies,
        }
    }

    pub fn find(&self, name: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}
