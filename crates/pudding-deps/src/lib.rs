// Dependency lookup for pudding
// Detects the project type and reads dependency names and versions from
// the files the package manager already wrote

pub mod detect;
pub mod models;
pub mod parsers;

pub use detect::{detect_project_type, load_dependencies};
pub use models::{Dependency, DependencyInfo, ParseProjectTypeError, ProjectType};
pub use parsers::{
    parse_cargo_toml, parse_gemfile_lock, parse_mix_lock, parse_package_json,
    parse_requirements_txt,
};
