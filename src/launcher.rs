use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::LaunchError;
use crate::types::{LaunchConfig, Platform};

pub const USER_AGENT_ENV: &str = "HLS_UA";

/// Pick the user-agent: a non-empty override wins, otherwise the platform default
pub fn resolve_user_agent(platform: Platform, user_override: Option<String>) -> String {
    match user_override {
        Some(ua) if !ua.is_empty() => ua,
        _ => platform.default_user_agent().to_string(),
    }
}

pub fn user_agent_from_env(platform: Platform) -> String {
    resolve_user_agent(platform, std::env::var(USER_AGENT_ENV).ok())
}

/// A fully assembled streamlink invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl LaunchCommand {
    pub fn new(
        streamlink: &Path,
        player: &Path,
        user_agent: &str,
        url: &str,
        config: &LaunchConfig,
    ) -> Self {
        let args = vec![
            "--http-header".to_string(),
            format!("origin={}", config.origin),
            "--http-header".to_string(),
            format!("referer={}", config.referer),
            "--http-header".to_string(),
            format!("user-agent={}", user_agent),
            "--retry-open".to_string(),
            config.retry_open.to_string(),
            "--retry-streams".to_string(),
            config.retry_streams.to_string(),
            "--player".to_string(),
            player.display().to_string(),
            "--player-args".to_string(),
            format!("--network-caching={}", config.network_caching_ms),
            url.to_string(),
            config.quality.clone(),
        ];

        Self {
            program: streamlink.to_path_buf(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program followed by its arguments
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program().display().to_string())
            .chain(self.args().iter().cloned())
            .collect()
    }

    /// Run streamlink in the foreground and wait for it.
    ///
    /// stdio is inherited. The child's status is returned as-is; deciding
    /// whether it matters is left to the caller.
    pub fn run(&self) -> Result<ExitStatus, LaunchError> {
        log::info!("Spawning {}", self.program.display());

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        log::info!("streamlink finished: {}", status);
        Ok(status)
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}
