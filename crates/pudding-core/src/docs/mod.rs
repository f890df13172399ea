// Dispatching a dependency to the docs backend of its ecosystem
pub mod gems;
pub mod hex;

use crate::browser::{BrowserOpener, SystemBrowserOpener};
use crate::config::{Config, ToolsConfig};
use crate::runner::{CommandRunner, SystemCommandRunner};
use crate::{Error, Result};
use pudding_deps::{Dependency, ProjectType};

/// Opens local documentation for dependencies
///
/// Generic over the command runner and browser opener so the backends can
/// be exercised with mocks instead of real `mix`/`gem` binaries.
pub struct DocsOpener<R, B> {
    runner: R,
    browser: B,
    tools: ToolsConfig,
}

impl DocsOpener<SystemCommandRunner, SystemBrowserOpener> {
    /// Real runner and browser, with tool paths and browser from `config`
    pub fn from_config(config: &Config) -> Self {
        DocsOpener::new(
            SystemCommandRunner,
            SystemBrowserOpener::new(config.browser.command.clone()),
        )
        .with_tools(config.tools.clone())
    }
}

impl<R: CommandRunner, B: BrowserOpener> DocsOpener<R, B> {
    pub fn new(runner: R, browser: B) -> Self {
        Self {
            runner,
            browser,
            tools: ToolsConfig::default(),
        }
    }

    pub fn with_tools(mut self, tools: ToolsConfig) -> Self {
        self.tools = tools;
        self
    }

    /// Fetch or generate docs for `dep` and open them in the browser
    ///
    /// With `keywords`, the backend's search page is opened instead of its
    /// index. Keywords are escaped as given; blank ones count as none.
    /// Returns the URL that was opened.
    pub fn fetch_and_open(
        &self,
        dep: &Dependency,
        project_type: ProjectType,
        keywords: Option<&str>,
    ) -> Result<String> {
        let keywords = keywords.filter(|k| !k.trim().is_empty());

        match project_type {
            ProjectType::Elixir => {
                hex::fetch_and_open(&self.runner, &self.browser, &self.tools.mix, dep, keywords)
            }
            ProjectType::Ruby => {
                gems::fetch_and_open(&self.runner, &self.browser, &self.tools.gem, dep, keywords)
            }
            other => Err(Error::UnsupportedProjectType(other)),
        }
    }
}

/// Open docs for `dep` using the user's config and the real system tools
pub fn fetch_and_open(
    dep: &Dependency,
    project_type: ProjectType,
    keywords: Option<&str>,
) -> Result<String> {
    let config = Config::load()?;
    DocsOpener::from_config(&config).fetch_and_open(dep, project_type, keywords)
}

/// `file://` URL for a docs directory, pointing at its search page when
/// there are keywords and at its landing page otherwise
pub(crate) fn doc_url(
    docs_dir: &str,
    keywords: Option<&str>,
    search_page: &str,
    index_page: &str,
) -> String {
    let docs_dir = docs_dir.trim_end_matches('/');
    match keywords {
        Some(keywords) => format!(
            "file://{}/{}?q={}",
            docs_dir,
            search_page,
            urlencoding::encode(keywords)
        ),
        None => format!("file://{}/{}", docs_dir, index_page),
    }
}
