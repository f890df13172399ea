use crate::models::{Dependency, DependencyInfo, ProjectType};
use anyhow::{Context, Result};
use regex::Regex;

/// Parse mix.lock for Elixir dependencies
///
/// Hex entries look like `"jason": {:hex, :jason, "1.4.1", "<sha>", [:mix], [...], "hexpm", "<sha>"},`.
/// Git and path entries carry no release version, so they come back without one.
pub fn parse_mix_lock(content: &str) -> Result<DependencyInfo> {
    let entry = Regex::new(r#"^\s*"(?P<name>[^"]+)":\s*\{:(?P<scm>\w+),\s*(?P<rest>.*)$"#)?;
    let hex_version = Regex::new(r#"^:[\w.]+,\s*"(?P<version>[^"]+)""#)?;
    let mut dependencies = Vec::new();

    for line in content.lines() {
        let Some(caps) = entry.captures(line) else {
            continue;
        };

        let mut dep = Dependency::new(&caps["name"]);
        if &caps["scm"] == "hex" {
            if let Some(version) = hex_version.captures(&caps["rest"]) {
                dep = dep.with_version(&version["version"]);
            }
        }
        dependencies.push(dep);
    }

    Ok(DependencyInfo::new(ProjectType::Elixir, dependencies))
}

/// Parse Gemfile.lock for Ruby dependencies
///
/// Only the four-space `name (version)` spec lines are taken; the deeper
/// six-space lines are version requirements of those specs.
pub fn parse_gemfile_lock(content: &str) -> Result<DependencyInfo> {
    let spec = Regex::new(r"^    (?P<name>[^\s(]+) \((?P<version>[^)]+)\)\s*$")?;
    let mut dependencies = Vec::new();
    let mut in_sources = false;

    for line in content.lines() {
        if !line.starts_with(' ') && !line.trim().is_empty() {
            // GEM, GIT and PATH are the sections holding installed specs
            in_sources = matches!(line.trim(), "GEM" | "GIT" | "PATH");
            continue;
        }
        if !in_sources {
            continue;
        }

        if let Some(caps) = spec.captures(line) {
            dependencies.push(Dependency::new(&caps["name"]).with_version(&caps["version"]));
        }
    }

    Ok(DependencyInfo::new(ProjectType::Ruby, dependencies))
}

/// Parse Cargo.toml for Rust dependencies
pub fn parse_cargo_toml(content: &str) -> Result<DependencyInfo> {
    let cargo: toml::Value = toml::from_str(content).context("Cargo.toml is not valid TOML")?;
    let mut dependencies = Vec::new();

    for section in ["dependencies", "dev-dependencies", "build-dependencies"] {
        if let Some(deps) = cargo.get(section).and_then(|v| v.as_table()) {
            for (name, value) in deps {
                dependencies.push(Dependency {
                    name: name.clone(),
                    version: cargo_requirement(value),
                });
            }
        }
    }

    Ok(DependencyInfo::new(ProjectType::Rust, dependencies))
}

/// Parse package.json for Node.js dependencies
pub fn parse_package_json(content: &str) -> Result<DependencyInfo> {
    let package: serde_json::Value =
        serde_json::from_str(content).context("package.json is not valid JSON")?;
    let mut dependencies = Vec::new();

    for section in ["dependencies", "devDependencies"] {
        if let Some(deps) = package.get(section).and_then(|v| v.as_object()) {
            for (name, value) in deps {
                dependencies.push(Dependency {
                    name: name.clone(),
                    version: value.as_str().and_then(non_wildcard),
                });
            }
        }
    }

    Ok(DependencyInfo::new(ProjectType::Node, dependencies))
}

/// Parse requirements.txt for Python dependencies
pub fn parse_requirements_txt(content: &str) -> Result<DependencyInfo> {
    let mut dependencies = Vec::new();

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines, comments and pip options like `-r base.txt`
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }

        // Environment markers (`; python_version < "3.8"`) don't pick a version
        let spec = line.split_once(';').map_or(line, |(spec, _)| spec).trim();
        let (name, requirement) = match spec.find(|c| "=<>!~".contains(c)) {
            Some(idx) => (&spec[..idx], &spec[idx..]),
            None => (spec, ""),
        };
        // Extras like `requests[security]` aren't part of the name
        let name = name.split_once('[').map_or(name, |(name, _)| name).trim();
        let requirement = requirement.replace(' ', "");
        let requirement = requirement.strip_prefix("==").unwrap_or(&requirement);

        let dep = Dependency {
            name: name.to_string(),
            version: non_wildcard(requirement),
        };
        dependencies.push(dep);
    }

    Ok(DependencyInfo::new(ProjectType::Python, dependencies))
}

/// Version requirement of a Cargo dependency (string or table form)
fn cargo_requirement(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => non_wildcard(s),
        toml::Value::Table(t) => t.get("version").and_then(|v| v.as_str()).and_then(non_wildcard),
        _ => None,
    }
}

fn non_wildcard(requirement: &str) -> Option<String> {
    let requirement = requirement.trim();
    if requirement.is_empty() || requirement == "*" {
        None
    } else {
        Some(requirement.to_string())
    }
}
