// Running the external documentation tools
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Why an external command did not produce usable output
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run {program}: {} (output: {stdout})", exit_description(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        stdout: String,
    },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status: {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Executes an external program and hands back what it printed
///
/// The docs backends only talk to the outside world through this trait,
/// which keeps them testable without mix or gem installed.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError>;
}

/// Runs commands for real, blocking until they exit
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        debug!("Running {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| CommandError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            return Err(CommandError::Failed {
                program: program.to_string(),
                code: output.status.code(),
                stdout,
            });
        }

        Ok(stdout)
    }
}
