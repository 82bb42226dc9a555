use std::ffi::OsString;
use std::path::PathBuf;

pub const SUBCOMMAND: &str = "segment";
pub const TOMOGRAM_FLAG: &str = "--tomogram-path";
pub const CHECKPOINT_FLAG: &str = "--ckpt-path";
pub const CONNECTED_COMPONENTS_FLAG: &str = "--store-connected-components";

/// Snapshot of both selections taken when a run is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub tomograms: Vec<PathBuf>,
    pub checkpoints: Vec<PathBuf>,
}

impl LaunchRequest {
    pub fn new(tomograms: Vec<PathBuf>, checkpoints: Vec<PathBuf>) -> Self {
        Self {
            tomograms,
            checkpoints,
        }
    }

    /// Arguments following the program name. Every path is its own element
    /// so whitespace inside a path never splits it.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(self.tomograms.len() + self.checkpoints.len() + 4);
        args.push(OsString::from(SUBCOMMAND));
        args.push(OsString::from(TOMOGRAM_FLAG));
        args.extend(self.tomograms.iter().map(|path| path.as_os_str().to_owned()));
        args.push(OsString::from(CHECKPOINT_FLAG));
        args.extend(self.checkpoints.iter().map(|path| path.as_os_str().to_owned()));
        args.push(OsString::from(CONNECTED_COMPONENTS_FLAG));
        args
    }
}
