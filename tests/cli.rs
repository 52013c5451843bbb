//! Runs the built binary against a PATH made of scratch directories.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_hls-launcher");
const URL: &str = "https://example.com/playlist.m3u8";

fn launcher(path_dir: &Path) -> Command {
    let mut cmd = Command::new(BIN);
    cmd.env("PATH", path_dir).env_remove("HLS_UA").env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn missing_url_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = launcher(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn missing_streamlink_is_reported_first() {
    let dir = TempDir::new().unwrap();
    let output = launcher(dir.path()).arg(URL).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("streamlink was not found"));
    assert!(err.contains("https://streamlink.github.io/install.html"));
    assert!(!err.contains("VLC"));
}

#[cfg(target_os = "linux")]
#[test]
fn missing_player_is_reported() {
    let dir = TempDir::new().unwrap();
    write_script(dir.path(), "streamlink", "exit 0");
    let output = launcher(dir.path()).arg(URL).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("VLC was not found"));
}

#[cfg(unix)]
#[test]
fn child_failure_is_swallowed_by_default() {
    let dir = TempDir::new().unwrap();
    write_script(dir.path(), "streamlink", "exit 7");
    write_script(dir.path(), "vlc", "exit 0");
    let output = launcher(dir.path()).arg(URL).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    let streamlink = dir.path().join("streamlink");
    let vlc = dir.path().join("vlc");
    assert!(out.starts_with(&format!("Running: {} --http-header origin=", streamlink.display())));
    assert!(out.contains(&format!("--player {} ", vlc.display())));
    assert!(out.contains("--retry-open 3 --retry-streams 3"));
    assert!(out.contains("--player-args --network-caching=1500"));
    assert!(out.trim_end().ends_with(&format!("{} best", URL)));
    if cfg!(target_os = "linux") {
        assert!(out.contains(
            "--http-header user-agent=Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36 --retry-open"
        ));
    }
}

#[cfg(unix)]
#[test]
fn child_receives_arguments_in_order() {
    let dir = TempDir::new().unwrap();
    let record = dir.path().join("argv.txt");
    write_script(
        dir.path(),
        "streamlink",
        &format!("for a in \"$@\"; do echo \"$a\"; done > '{}'", record.display()),
    );
    write_script(dir.path(), "vlc", "exit 0");

    let output = launcher(dir.path())
        .env("HLS_UA", "custom-agent/1.0")
        .arg(URL)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let recorded = std::fs::read_to_string(&record).unwrap();
    let vlc = dir.path().join("vlc").display().to_string();
    let args: Vec<&str> = recorded.lines().collect();
    assert_eq!(
        args,
        [
            "--http-header",
            "origin=https://iframe.mediadelivery.net",
            "--http-header",
            "referer=https://iframe.mediadelivery.net/",
            "--http-header",
            "user-agent=custom-agent/1.0",
            "--retry-open",
            "3",
            "--retry-streams",
            "3",
            "--player",
            vlc.as_str(),
            "--player-args",
            "--network-caching=1500",
            URL,
            "best",
        ]
    );
}

#[cfg(unix)]
#[test]
fn propagate_status_surfaces_child_exit_code() {
    let dir = TempDir::new().unwrap();
    write_script(dir.path(), "streamlink", "exit 7");
    write_script(dir.path(), "vlc", "exit 0");
    let output = launcher(dir.path())
        .args(["--propagate-status", URL])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(7));
    assert!(stderr(&output).contains("exited with status 7"));
}

#[cfg(unix)]
#[test]
fn dry_run_does_not_spawn() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("spawned");
    write_script(
        dir.path(),
        "streamlink",
        &format!(": > '{}'", marker.display()),
    );
    write_script(dir.path(), "vlc", "exit 0");
    let output = launcher(dir.path())
        .args(["--dry-run", "--quality", "720p", URL])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).trim_end().ends_with(&format!("{} 720p", URL)));
    assert!(!marker.exists());
}
