use std::path::PathBuf;

use thiserror::Error;

pub const STREAMLINK_INSTALL_URL: &str = "https://streamlink.github.io/install.html";

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("streamlink was not found.\nInstall Streamlink from:\n{}", STREAMLINK_INSTALL_URL)]
    StreamlinkNotFound,

    #[error("VLC was not found.\nInstall VLC, or ensure 'vlc' is on PATH.")]
    PlayerNotFound,

    #[error("Failed to start {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("streamlink exited with status {0}")]
    ChildFailed(i32),
}

impl LaunchError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::StreamlinkNotFound
            | LaunchError::PlayerNotFound
            | LaunchError::Spawn { .. } => 1,
            LaunchError::ChildFailed(code) => *code,
        }
    }
}
