use std::fmt;
use std::process::{ExitStatus, Stdio};

use thiserror::Error;
use tokio::process::Command;

use crate::model::LaunchRequest;
use crate::utils::command_line;

/// How a segmentation run that actually started came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Succeeded,
    Failed { code: i32 },
    /// The process exited without a code, usually because of a signal.
    Terminated,
}

impl RunOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => RunOutcome::Succeeded,
            Some(code) => RunOutcome::Failed { code },
            None => RunOutcome::Terminated,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, RunOutcome::Succeeded)
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Succeeded => write!(f, "Segmentation completed successfully."),
            RunOutcome::Failed { code } => {
                write!(f, "Segmentation failed with exit code {code}.")
            }
            RunOutcome::Terminated => write!(f, "Segmentation was terminated before exiting."),
        }
    }
}

// Cloned through iced messages, so io errors are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("Could not run {program}: {reason}")]
    Spawn { program: String, reason: String },
    #[error("Lost track of {program} while it was running: {reason}")]
    Wait { program: String, reason: String },
}

/// Runs `program` with the request's arguments and waits for it to exit.
///
/// The child inherits stdout and stderr. It is killed if this future is
/// dropped before completion, which is how an aborted task cancels a run.
pub async fn run_segmentation(
    program: String,
    request: LaunchRequest,
) -> Result<RunOutcome, LaunchError> {
    let args = request.args();
    log::info!("Launching {}", command_line(&program, &args));

    let mut child = Command::new(&program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .map_err(|err| {
            let error = LaunchError::Spawn {
                program: program.clone(),
                reason: err.to_string(),
            };
            log::error!("{error}");
            error
        })?;

    let status = child.wait().await.map_err(|err| {
        let error = LaunchError::Wait {
            program: program.clone(),
            reason: err.to_string(),
        };
        log::error!("{error}");
        error
    })?;

    let outcome = RunOutcome::from_status(status);
    if outcome.is_success() {
        log::info!("{outcome}");
    } else {
        log::error!("{outcome}");
    }
    Ok(outcome)
}
