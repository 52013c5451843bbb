use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::types::Platform;

const STREAMLINK_WINDOWS_PATHS: &[&str] = &[
    r"C:\Program Files\Streamlink\bin\streamlink.exe",
    r"C:\Program Files (x86)\Streamlink\bin\streamlink.exe",
];

const VLC_WINDOWS_PATHS: &[&str] = &[
    r"C:\Program Files\VideoLAN\VLC\vlc.exe",
    r"C:\Program Files (x86)\VideoLAN\VLC\vlc.exe",
];

const VLC_MACOS_BUNDLE: &str = "/Applications/VLC.app/Contents/MacOS/VLC";

const VLC_NAMES: &[&str] = &["vlc", "cvlc"];

/// Install locations probed when PATH comes up empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    pub streamlink_windows: Vec<PathBuf>,
    pub vlc_windows: Vec<PathBuf>,
    pub vlc_macos: Vec<PathBuf>,
}

impl Default for InstallPaths {
    fn default() -> Self {
        Self {
            streamlink_windows: STREAMLINK_WINDOWS_PATHS.iter().map(PathBuf::from).collect(),
            vlc_windows: VLC_WINDOWS_PATHS.iter().map(PathBuf::from).collect(),
            vlc_macos: vec![PathBuf::from(VLC_MACOS_BUNDLE)],
        }
    }
}

/// Finds streamlink and VLC on the host
///
/// PATH lookups go through `which_in` with an explicit search path, so the
/// same locator can be pointed at a scratch directory in tests.
pub struct Locator {
    platform: Platform,
    search_path: Option<OsString>,
    cwd: PathBuf,
    install_paths: InstallPaths,
}

impl Locator {
    pub fn new(platform: Platform, search_path: Option<OsString>) -> Self {
        Self {
            platform,
            search_path,
            cwd: std::env::current_dir().unwrap_or_default(),
            install_paths: InstallPaths::default(),
        }
    }

    #[cfg(test)]
    pub fn with_install_paths(mut self, install_paths: InstallPaths) -> Self {
        self.install_paths = install_paths;
        self
    }

    /// Locator for the running host, searching the process PATH
    pub fn from_env() -> Self {
        Self::new(Platform::current(), std::env::var_os("PATH"))
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Resolve the streamlink executable.
    ///
    /// Only Windows gets install-directory fallbacks; elsewhere PATH is the
    /// sole source.
    pub fn find_streamlink(&self) -> Option<PathBuf> {
        if let Some(path) = self.lookup("streamlink") {
            return Some(path);
        }

        if self.platform == Platform::Windows {
            return first_existing(&self.install_paths.streamlink_windows);
        }

        None
    }

    /// Resolve the VLC executable.
    pub fn find_vlc(&self) -> Option<PathBuf> {
        if let Some(path) = self.lookup("vlc") {
            return Some(path);
        }

        let installed = match self.platform {
            Platform::Windows => first_existing(&self.install_paths.vlc_windows),
            Platform::MacOs => first_existing(&self.install_paths.vlc_macos),
            Platform::Unix => None,
        };
        if installed.is_some() {
            return installed;
        }

        VLC_NAMES.iter().find_map(|name| self.lookup(name))
    }

    fn lookup(&self, name: &str) -> Option<PathBuf> {
        match which::which_in(name, self.search_path.as_ref(), &self.cwd) {
            Ok(path) => {
                log::debug!("Found {} on PATH: {}", name, path.display());
                Some(path)
            }
            Err(e) => {
                log::debug!("{} not on PATH: {}", name, e);
                None
            }
        }
    }
}

/// First candidate that exists on disk
pub fn first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates.iter().map(|p| p.as_ref()).find_map(|path| {
        if path.exists() {
            log::debug!("Found install path: {}", path.display());
            Some(path.to_path_buf())
        } else {
            log::debug!("Install path missing: {}", path.display());
            None
        }
    })
}
