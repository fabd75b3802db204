use std::path::PathBuf;

/// Where the track directory comes from.
///
/// The shell does not present a native folder dialog itself; whatever does
/// (a CLI argument, a desktop portal, a test fake) sits behind this trait.
/// Cancellation is `None`, never an error.
pub trait DirectoryPicker {
    fn pick_directory(&self) -> Option<PathBuf>;
}

/// Picker fed from the first CLI argument, the terminal equivalent of a
/// folder dialog. "No argument" reads as the user cancelling the pick.
pub struct ArgsPicker {
    path: Option<PathBuf>,
}

impl ArgsPicker {
    pub fn from_env_args() -> Self {
        Self {
            path: std::env::args_os().nth(1).map(PathBuf::from),
        }
    }

    pub fn with_path(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl DirectoryPicker for ArgsPicker {
    fn pick_directory(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}
