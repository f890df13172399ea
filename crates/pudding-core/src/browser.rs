// Handing a docs URL to whatever opens URLs on this machine
use std::io;
use tracing::{debug, warn};

/// Opener tried when the platform default fails (bare Linux desktops, WSL)
pub const FALLBACK_OPENER: &str = "xdg-open";

/// Launches a URL in a browser without waiting for it to close
#[cfg_attr(test, mockall::automock)]
pub trait BrowserOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the configured browser, or the platform default
#[derive(Debug, Clone, Default)]
pub struct SystemBrowserOpener {
    command: Option<String>,
}

impl SystemBrowserOpener {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }
}

impl BrowserOpener for SystemBrowserOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        open_with(
            url,
            self.command.as_deref(),
            |url, app| open::with_detached(url, app),
            |url| open::that_detached(url),
        )
    }
}

/// Try `command` alone if configured, otherwise `default` then the fallback opener
///
/// `with_app` launches the URL with a named program.
fn open_with(
    url: &str,
    command: Option<&str>,
    with_app: impl Fn(&str, &str) -> io::Result<()>,
    default: impl Fn(&str) -> io::Result<()>,
) -> io::Result<()> {
    if let Some(command) = command {
        debug!("Opening {} with {}", url, command);
        return with_app(url, command);
    }

    match default(url) {
        Ok(()) => Ok(()),
        Err(e) => {
            warn!("Default opener failed ({}), trying {}", e, FALLBACK_OPENER);
            with_app(url, FALLBACK_OPENER)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const URL: &str = "file:///tmp/docs/index.html";

    fn failing(message: &'static str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::NotFound, message))
    }

    #[test]
    fn test_default_success_skips_fallback() {
        let apps = RefCell::new(Vec::new());
        let defaults = RefCell::new(0);

        open_with(
            URL,
            None,
            |_, app| {
                apps.borrow_mut().push(app.to_string());
                Ok(())
            },
            |url| {
                assert_eq!(url, URL);
                *defaults.borrow_mut() += 1;
                Ok(())
            },
        )
        .unwrap();

        assert_eq!(*defaults.borrow(), 1);
        assert!(apps.borrow().is_empty());
    }

    #[test]
    fn test_default_failure_uses_fallback() {
        let apps = RefCell::new(Vec::new());

        open_with(
            URL,
            None,
            |url, app| {
                assert_eq!(url, URL);
                apps.borrow_mut().push(app.to_string());
                Ok(())
            },
            |_| failing("no default opener"),
        )
        .unwrap();

        assert_eq!(*apps.borrow(), [FALLBACK_OPENER]);
    }

    #[test]
    fn test_both_failing_returns_fallback_error() {
        let err = open_with(
            URL,
            None,
            |_, _| failing("xdg-open missing"),
            |_| failing("no default opener"),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "xdg-open missing");
    }

    #[test]
    fn test_configured_command_is_used_alone() {
        let apps = RefCell::new(Vec::new());

        let err = open_with(
            URL,
            Some("firefox"),
            |_, app| {
                apps.borrow_mut().push(app.to_string());
                failing("firefox crashed")
            },
            |_| panic!("default opener must not run"),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "firefox crashed");
        assert_eq!(*apps.borrow(), ["firefox"]);
    }
}
