use std::path::PathBuf;

use crate::launcher::{LaunchError, RunOutcome};
use crate::model::SelectionKind;

#[derive(Debug, Clone)]
pub enum Message {
    Pick(SelectionKind),
    /// `None` when the dialog was dismissed.
    Picked(SelectionKind, Option<Vec<PathBuf>>),
    RunSegmentation,
    SegmentationFinished(Result<RunOutcome, LaunchError>),
    CancelSegmentation,
    ShowAbout,
    AboutClosed,
}
