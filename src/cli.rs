use anyhow::Result;
use clap::Parser;
use url::Url;

use crate::error::LaunchError;
use crate::launcher::{LaunchCommand, user_agent_from_env};
use crate::locate::Locator;
use crate::types::LaunchConfig;

#[derive(Parser, Debug)]
#[command(name = "hls-launcher")]
#[command(
    about = "Play an HLS stream in VLC through streamlink with spoofed origin headers",
    long_about = "Play an HLS stream in VLC through streamlink with spoofed origin headers.\n\n\
                  Set HLS_UA to override the browser user-agent sent with each request."
)]
pub struct Cli {
    /// HLS playlist URL (e.g. "https://.../playlist.m3u8")
    #[arg(allow_hyphen_values = true)]
    pub url: String,

    /// Stream quality passed to streamlink
    #[arg(long, default_value = "best")]
    pub quality: String,

    /// Print the streamlink command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with streamlink's status instead of always succeeding
    #[arg(long)]
    pub propagate_status: bool,
}

pub fn run_cli() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let url = cli.url.trim().to_string();
    if let Err(e) = Url::parse(&url) {
        log::warn!("{:?} does not look like a URL ({}), passing it on anyway", url, e);
    }

    let locator = Locator::from_env();
    let streamlink = locator
        .find_streamlink()
        .ok_or(LaunchError::StreamlinkNotFound)?;
    let player = locator.find_vlc().ok_or(LaunchError::PlayerNotFound)?;

    let user_agent = user_agent_from_env(locator.platform());
    let config = LaunchConfig {
        quality: cli.quality,
        ..LaunchConfig::default()
    };
    let command = LaunchCommand::new(&streamlink, &player, &user_agent, &url, &config);

    println!("Running: {}", command);
    if cli.dry_run {
        return Ok(());
    }

    let status = command.run()?;
    if cli.propagate_status && !status.success() {
        return Err(LaunchError::ChildFailed(status.code().unwrap_or(1)).into());
    }

    Ok(())
}
