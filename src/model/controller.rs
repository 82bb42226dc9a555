use std::fmt;
use std::path::PathBuf;

use super::{LaunchRequest, SelectionKind, SelectionSet};
use crate::launcher::{LaunchError, RunOutcome};
use crate::utils::selection_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunBlocked {
    MissingTomograms,
    MissingModels,
    MissingBoth,
    AlreadyRunning,
}

impl fmt::Display for RunBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            RunBlocked::MissingTomograms => "Select at least one tomogram before segmenting.",
            RunBlocked::MissingModels => "Select a model checkpoint before segmenting.",
            RunBlocked::MissingBoth => {
                "Select tomograms and a model checkpoint before segmenting."
            }
            RunBlocked::AlreadyRunning => "A segmentation is already running.",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Blocked(RunBlocked),
    Running,
    Finished(RunOutcome),
    Cancelled,
    LaunchFailed(LaunchError),
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    /// Status line text. `None` while nothing has been attempted yet.
    pub fn status_text(&self) -> Option<String> {
        match self {
            RunState::Idle => None,
            RunState::Blocked(reason) => Some(reason.to_string()),
            RunState::Running => Some("Segmentation running...".to_string()),
            RunState::Finished(outcome) => Some(outcome.to_string()),
            RunState::Cancelled => Some("Segmentation cancelled.".to_string()),
            RunState::LaunchFailed(error) => Some(error.to_string()),
        }
    }
}

/// Owns both selections and the state of the current or last run.
///
/// Performs no I/O: the app asks it for a [`LaunchRequest`] and reports back
/// what happened.
#[derive(Debug, Default)]
pub struct Controller {
    tomograms: SelectionSet,
    models: SelectionSet,
    run_state: RunState,
}

impl Controller {
    pub fn selection(&self, kind: SelectionKind) -> &SelectionSet {
        match kind {
            SelectionKind::Tomograms => &self.tomograms,
            SelectionKind::Models => &self.models,
        }
    }

    pub fn label(&self, kind: SelectionKind) -> String {
        selection_label(kind.label_prefix(), self.selection(kind).paths())
    }

    pub fn run_state(&self) -> &RunState {
        &self.run_state
    }

    pub fn can_run(&self) -> bool {
        !self.run_state.is_running()
    }

    /// Applies the result of a file dialog. `None` means the dialog was
    /// cancelled. Returns whether the selection changed.
    pub fn apply_selection(&mut self, kind: SelectionKind, picked: Option<Vec<PathBuf>>) -> bool {
        let Some(paths) = picked else {
            log::debug!("{kind:?} dialog cancelled");
            return false;
        };

        let set = match kind {
            SelectionKind::Tomograms => &mut self.tomograms,
            SelectionKind::Models => &mut self.models,
        };
        let changed = set.replace(paths);
        if changed {
            log::info!("{kind:?} selection replaced with {} file(s)", set.len());
        }
        changed
    }

    /// Moves to `Running` and hands out the request to launch, or records
    /// why no launch may happen.
    pub fn begin_run(&mut self) -> Result<LaunchRequest, RunBlocked> {
        let blocked = if self.run_state.is_running() {
            Some(RunBlocked::AlreadyRunning)
        } else {
            match (self.tomograms.is_empty(), self.models.is_empty()) {
                (true, true) => Some(RunBlocked::MissingBoth),
                (true, false) => Some(RunBlocked::MissingTomograms),
                (false, true) => Some(RunBlocked::MissingModels),
                (false, false) => None,
            }
        };

        if let Some(reason) = blocked {
            log::warn!("Segmentation not started: {reason}");
            // Keep showing the running status instead of the refusal.
            if reason != RunBlocked::AlreadyRunning {
                self.run_state = RunState::Blocked(reason);
            }
            return Err(reason);
        }

        self.run_state = RunState::Running;
        Ok(LaunchRequest::new(
            self.tomograms.paths().to_vec(),
            self.models.paths().to_vec(),
        ))
    }

    pub fn finish_run(&mut self, result: Result<RunOutcome, LaunchError>) {
        if !self.run_state.is_running() {
            log::debug!("Ignoring completion of a run that is no longer tracked");
            return;
        }
        self.run_state = match result {
            Ok(outcome) => RunState::Finished(outcome),
            Err(error) => RunState::LaunchFailed(error),
        };
    }

    /// Returns whether a running segmentation was cancelled.
    pub fn cancel_run(&mut self) -> bool {
        if !self.run_state.is_running() {
            return false;
        }
        log::info!("Segmentation cancelled by user");
        self.run_state = RunState::Cancelled;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&str]) -> Vec<PathBuf> {
        raw.iter().map(PathBuf::from).collect()
    }

    fn ready_controller() -> Controller {
        let mut controller = Controller::default();
        controller.apply_selection(
            SelectionKind::Tomograms,
            Some(paths(&["/data/t1.mrc", "/data/t2.mrc"])),
        );
        controller.apply_selection(SelectionKind::Models, Some(paths(&["/models/ckpt.pt"])));
        controller
    }

    #[test]
    fn latest_confirmed_selection_wins() {
        let mut controller = Controller::default();
        controller.apply_selection(SelectionKind::Tomograms, Some(paths(&["/a.mrc", "/b.mrc"])));
        controller.apply_selection(SelectionKind::Tomograms, Some(paths(&["/c.mrc"])));

        assert_eq!(
            controller.selection(SelectionKind::Tomograms).paths(),
            paths(&["/c.mrc"]).as_slice()
        );
        assert!(controller.selection(SelectionKind::Models).is_empty());
    }

    #[test]
    fn cancelled_or_empty_dialog_keeps_selection_and_label() {
        let mut controller = ready_controller();
        let label_before = controller.label(SelectionKind::Models);

        assert!(!controller.apply_selection(SelectionKind::Models, None));
        assert!(!controller.apply_selection(SelectionKind::Models, Some(Vec::new())));

        assert_eq!(controller.label(SelectionKind::Models), label_before);
        assert_eq!(
            controller.selection(SelectionKind::Models).paths(),
            paths(&["/models/ckpt.pt"]).as_slice()
        );
    }

    #[test]
    fn labels_join_paths_with_commas() {
        let controller = ready_controller();
        assert_eq!(
            controller.label(SelectionKind::Tomograms),
            "Tomograms Selected: /data/t1.mrc, /data/t2.mrc"
        );
        assert_eq!(
            controller.label(SelectionKind::Models),
            "Model Selected: /models/ckpt.pt"
        );
        assert_eq!(
            Controller::default().label(SelectionKind::Tomograms),
            "Tomograms Selected: "
        );
    }

    #[test]
    fn run_without_selections_produces_no_request() {
        let mut controller = Controller::default();
        assert_eq!(controller.begin_run(), Err(RunBlocked::MissingBoth));
        assert_eq!(
            controller.run_state(),
            &RunState::Blocked(RunBlocked::MissingBoth)
        );
    }

    #[test]
    fn run_with_one_selection_reports_the_missing_one() {
        let mut controller = Controller::default();
        controller.apply_selection(SelectionKind::Tomograms, Some(paths(&["/t.mrc"])));
        assert_eq!(controller.begin_run(), Err(RunBlocked::MissingModels));

        let mut controller = Controller::default();
        controller.apply_selection(SelectionKind::Models, Some(paths(&["/c.pt"])));
        assert_eq!(controller.begin_run(), Err(RunBlocked::MissingTomograms));
    }

    #[test]
    fn run_snapshots_both_selections() {
        let mut controller = ready_controller();
        let request = controller.begin_run().expect("both selections present");

        assert_eq!(request.tomograms, paths(&["/data/t1.mrc", "/data/t2.mrc"]));
        assert_eq!(request.checkpoints, paths(&["/models/ckpt.pt"]));
        assert!(controller.run_state().is_running());
        assert!(!controller.can_run());
    }

    #[test]
    fn second_run_is_refused_while_running() {
        let mut controller = ready_controller();
        controller.begin_run().expect("first run starts");

        assert_eq!(controller.begin_run(), Err(RunBlocked::AlreadyRunning));
        assert_eq!(controller.run_state(), &RunState::Running);
    }

    #[test]
    fn selections_survive_every_kind_of_finish() {
        let results = vec![
            Ok(RunOutcome::Succeeded),
            Ok(RunOutcome::Failed { code: 3 }),
            Err(LaunchError::Spawn {
                program: "membrain".to_string(),
                reason: "not found".to_string(),
            }),
        ];

        for result in results {
            let mut controller = ready_controller();
            let before_tomos = controller.selection(SelectionKind::Tomograms).clone();
            let before_models = controller.selection(SelectionKind::Models).clone();

            controller.begin_run().expect("run starts");
            controller.finish_run(result);

            assert_eq!(controller.selection(SelectionKind::Tomograms), &before_tomos);
            assert_eq!(controller.selection(SelectionKind::Models), &before_models);
            assert!(controller.can_run());
        }
    }

    #[test]
    fn failure_is_reported_distinctly_from_success() {
        let mut controller = ready_controller();
        controller.begin_run().expect("run starts");
        controller.finish_run(Ok(RunOutcome::Failed { code: 2 }));

        assert_eq!(
            controller.run_state().status_text().as_deref(),
            Some("Segmentation failed with exit code 2.")
        );
    }

    #[test]
    fn cancel_only_applies_while_running() {
        let mut controller = ready_controller();
        assert!(!controller.cancel_run());

        controller.begin_run().expect("run starts");
        assert!(controller.cancel_run());
        assert_eq!(controller.run_state(), &RunState::Cancelled);

        // A late completion from the aborted task is ignored.
        controller.finish_run(Ok(RunOutcome::Succeeded));
        assert_eq!(controller.run_state(), &RunState::Cancelled);
        assert!(!controller.selection(SelectionKind::Tomograms).is_empty());
    }
}
