use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Tomograms,
    Models,
}

impl SelectionKind {
    pub fn dialog_title(self) -> &'static str {
        match self {
            SelectionKind::Tomograms => "Select tomograms to segment",
            SelectionKind::Models => "Select model checkpoint",
        }
    }

    /// Dialog filter as `(name, extensions)`. Both kinds accept any file.
    pub fn file_filter(self) -> (&'static str, &'static [&'static str]) {
        ("All files", &["*"])
    }

    pub fn label_prefix(self) -> &'static str {
        match self {
            SelectionKind::Tomograms => "Tomograms Selected: ",
            SelectionKind::Models => "Model Selected: ",
        }
    }
}

/// Ordered list of paths the user confirmed in the last file dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    paths: Vec<PathBuf>,
}

impl SelectionSet {
    /// Replaces the whole set. An empty choice leaves it untouched and
    /// returns `false`.
    pub fn replace(&mut self, paths: Vec<PathBuf>) -> bool {
        if paths.is_empty() {
            return false;
        }
        self.paths = paths;
        true
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}
