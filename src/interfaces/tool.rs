use std::io;
use std::process::{Command, Stdio};

use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Command '{command}' could not be started: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("Command '{command}' returned {code}!")]
    Failed { command: String, code: i32 },
}

/// Run an external tool to completion and return what it wrote to stdout.
///
/// The tool's stderr is passed through to ours.
pub fn run(command: &mut Command) -> Result<Vec<u8>, ToolError> {
    let command_line = command_line(command);
    log::debug!("Running '{}'", command_line);

    let output = command
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| ToolError::Spawn {
            command: command_line.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(ToolError::Failed {
            command: command_line,
            // Killed by a signal
            code: output.status.code().unwrap_or(-1),
        });
    }
    Ok(output.stdout)
}

fn command_line(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|arg| arg.to_string_lossy())
        .join(" ")
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn stdout_is_returned() {
        let stdout = run(Command::new("echo").arg("hello")).unwrap();
        assert_eq!(stdout, b"hello\n");
    }

    #[test]
    fn nonzero_exit_reports_command_and_code() {
        let err = run(Command::new("sh").args(["-c", "exit 3"])).unwrap_err();
        assert_eq!(err.to_string(), "Command 'sh -c exit 3' returned 3!");
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let err = run(&mut Command::new("/nonexistent/transapi-tool")).unwrap_err();
        assert!(matches!(err, ToolError::Spawn { .. }));
    }
}
