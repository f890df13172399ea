// Ruby docs via `gem rdoc`, read from the gem home's doc directory
use super::doc_url;
use crate::browser::BrowserOpener;
use crate::runner::CommandRunner;
use crate::{Error, Result};
use pudding_deps::Dependency;
use tracing::{debug, info};

/// Generate rdoc for the installed gem and open it
///
/// rdoc lands in `<gem home>/doc/<name>-<version>/rdoc`, so unlike hex a
/// version is required. For native gems the version carries the platform
/// (`1.15.4-x86_64-linux`): the directory keeps it, `gem` only takes the
/// release part.
pub fn fetch_and_open(
    runner: &impl CommandRunner,
    browser: &impl BrowserOpener,
    gem: &str,
    dep: &Dependency,
    keywords: Option<&str>,
) -> Result<String> {
    let version = dep
        .version
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::MissingVersion(dep.name.clone()))?;

    let rdoc_args = [
        "rdoc".to_string(),
        dep.name.clone(),
        "--rdoc".to_string(),
        "--version".to_string(),
        release_version(version).to_string(),
    ];
    runner
        .run(gem, &rdoc_args)
        .map_err(|source| Error::GenerateRdoc {
            name: dep.name.clone(),
            source,
        })?;

    let gem_home = runner
        .run(gem, &["env".to_string(), "home".to_string()])
        .map_err(Error::GemEnvHome)?;
    let gem_home = gem_home.trim();
    if gem_home.is_empty() {
        return Err(Error::EmptyGemHome);
    }
    debug!("Gem home is {}", gem_home);

    let rdoc_dir = format!(
        "{}/doc/{}-{}/rdoc",
        gem_home.trim_end_matches('/'),
        dep.name,
        version
    );
    let url = doc_url(&rdoc_dir, keywords, "index.html", "table_of_contents.html");
    info!("Opening {}", url);

    browser.open(&url).map_err(|source| Error::OpenRdoc {
        name: dep.name.clone(),
        source,
    })?;

    Ok(url)
}

/// Version without the platform suffix Gemfile.lock appends to native gems
///
/// Lockfiles write prereleases with dots (`2.0.0.rc1`), so a `-` always
/// starts the platform.
pub fn release_version(version: &str) -> &str {
    version.split_once('-').map_or(version, |(release, _)| release)
}
