// Elixir docs via `mix hex.docs fetch`
use super::doc_url;
use crate::browser::BrowserOpener;
use crate::runner::CommandRunner;
use crate::{Error, Result};
use pudding_deps::Dependency;
use tracing::{debug, info};

/// Fetch the dependency's docs into the local hex cache and open them
pub fn fetch_and_open(
    runner: &impl CommandRunner,
    browser: &impl BrowserOpener,
    mix: &str,
    dep: &Dependency,
    keywords: Option<&str>,
) -> Result<String> {
    let mut args = vec!["hex.docs".to_string(), "fetch".to_string(), dep.name.clone()];
    if let Some(version) = dep.version.as_deref().filter(|v| !v.is_empty()) {
        args.push(version.to_string());
    }

    let output = runner.run(mix, &args).map_err(|source| Error::FetchDocs {
        name: dep.name.clone(),
        source,
    })?;

    let docs_dir = extract_doc_path(&output).ok_or_else(|| Error::DocsPathNotFound {
        name: dep.name.clone(),
        output: output.clone(),
    })?;
    debug!("Docs for {} live in {}", dep.name, docs_dir);

    let url = doc_url(docs_dir, keywords, "search.html", "index.html");
    info!("Opening {}", url);

    browser.open(&url).map_err(|source| Error::OpenDocs {
        name: dep.name.clone(),
        source,
    })?;

    Ok(url)
}

/// Pull the docs directory out of `mix hex.docs fetch` output
///
/// mix prints something like `Docs fetched: /home/me/.hex/docs/hexpm/jason/1.4.1`,
/// so the path runs from the first `/` to the end of that line.
pub fn extract_doc_path(output: &str) -> Option<&str> {
    let start = output.find('/')?;
    let rest = &output[start..];
    let end = rest.find('\n').unwrap_or(rest.len());
    Some(rest[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::MockBrowserOpener;
    use crate::runner::{CommandError, MockCommandRunner};
    use std::io;

    const FETCHED: &str = "Docs fetched: /home/me/.hex/docs/hexpm/jason/1.4.1  \n";

    fn runner_printing(output: &'static str) -> MockCommandRunner {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(move |_, _| Ok(output.to_string()));
        runner
    }

    #[test]
    fn test_extract_doc_path() {
        assert_eq!(
            extract_doc_path(FETCHED),
            Some("/home/me/.hex/docs/hexpm/jason/1.4.1")
        );
    }

    #[test]
    fn test_extract_doc_path_stops_at_first_line() {
        let output = "Docs fetched: /tmp/docs/plug\nSee /other/place\n";
        assert_eq!(extract_doc_path(output), Some("/tmp/docs/plug"));
    }

    #[test]
    fn test_extract_doc_path_without_newline() {
        assert_eq!(extract_doc_path("  /tmp/docs/plug"), Some("/tmp/docs/plug"));
    }

    #[test]
    fn test_extract_doc_path_without_slash() {
        assert_eq!(extract_doc_path("Docs already fetched\n"), None);
        assert_eq!(extract_doc_path(""), None);
    }

    #[test]
    fn test_passes_version_to_mix() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|program: &str, args: &[String]| {
                program == "mix" && args == ["hex.docs", "fetch", "jason", "1.4.1"]
            })
            .times(1)
            .returning(|_, _| Ok(FETCHED.to_string()));

        let mut browser = MockBrowserOpener::new();
        browser
            .expect_open()
            .withf(|url: &str| url == "file:///home/me/.hex/docs/hexpm/jason/1.4.1/index.html")
            .times(1)
            .returning(|_| Ok(()));

        let dep = Dependency::new("jason").with_version("1.4.1");
        let url = fetch_and_open(&runner, &browser, "mix", &dep, None).unwrap();
        assert!(url.ends_with("/index.html"));
    }

    #[test]
    fn test_keywords_open_search_page() {
        let runner = runner_printing(FETCHED);
        let mut browser = MockBrowserOpener::new();
        browser
            .expect_open()
            .withf(|url: &str| {
                url == "file:///home/me/.hex/docs/hexpm/jason/1.4.1/search.html?q=Jason.encode%21"
            })
            .times(1)
            .returning(|_| Ok(()));

        let dep = Dependency::new("jason");
        fetch_and_open(&runner, &browser, "mix", &dep, Some("Jason.encode!")).unwrap();
    }

    #[test]
    fn test_fetch_failure_wraps_command_error() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(|_, _| {
            Err(CommandError::Failed {
                program: "mix".to_string(),
                code: Some(1),
                stdout: "No package with name nope".to_string(),
            })
        });
        let mut browser = MockBrowserOpener::new();
        browser.expect_open().never();

        let err = fetch_and_open(&runner, &browser, "mix", &Dependency::new("nope"), None)
            .unwrap_err();

        assert!(matches!(err, Error::FetchDocs { .. }));
        let message = err.to_string();
        assert!(message.starts_with("failed to fetch docs for nope:"));
        assert!(message.contains("No package with name nope"));
    }

    #[test]
    fn test_output_without_path_is_error() {
        let runner = runner_printing("Couldn't find docs\n");
        let mut browser = MockBrowserOpener::new();
        browser.expect_open().never();

        let err = fetch_and_open(&runner, &browser, "mix", &Dependency::new("plug"), None)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to extract docs path for plug from Couldn't find docs\n"
        );
    }

    #[test]
    fn test_browser_failure_is_reported() {
        let runner = runner_printing(FETCHED);
        let mut browser = MockBrowserOpener::new();
        browser
            .expect_open()
            .times(1)
            .returning(|_| Err(io::Error::new(io::ErrorKind::NotFound, "no browser")));

        let err = fetch_and_open(&runner, &browser, "mix", &Dependency::new("jason"), None)
            .unwrap_err();

        assert!(matches!(err, Error::OpenDocs { .. }));
        assert_eq!(err.to_string(), "failed to open docs for jason: no browser");
    }
}
