use anyhow::{Result, ensure};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::common::TestEnvironment;

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Build the aurum binary and run it inside the test environment.
pub fn run_aurum(env: &TestEnvironment, args: &[&str]) -> Result<CommandOutput> {
    // Build the binary first; cargo serializes concurrent builds itself.
    let build = Command::new("cargo")
        .args(["build", "--bin", "aurum"])
        .current_dir(env::current_dir()?)
        .output()?;
    ensure!(
        build.status.success(),
        "building aurum failed: {}",
        String::from_utf8_lossy(&build.stderr)
    );

    let binary = env::current_dir()?.join("target/debug/aurum");
    let path_var = format!(
        "{}:{}",
        env.stub_bin().display(),
        env::var("PATH").unwrap_or_default()
    );

    let output = Command::new(&binary)
        .args(args)
        .env("HOME", env.home())
        .env("XDG_CONFIG_HOME", env.home().join(".config"))
        .env("XDG_DATA_HOME", env.home().join(".local/share"))
        .env("PATH", path_var)
        .current_dir(env.path())
        .output()?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}

/// Create a local package repository fixture with a PKGBUILD, usable as
/// a clone source via its file:// URL.
pub fn create_package_repo(env: &TestEnvironment, name: &str) -> Result<PathBuf> {
    let repo_path = env.path().join("fixtures").join(name);
    fs::create_dir_all(&repo_path)?;

    git(&repo_path, &["init", "--initial-branch=main"])?;
    fs::write(
        repo_path.join("PKGBUILD"),
        format!("pkgname={name}\npkgver=1\npkgrel=1\n"),
    )?;
    git(&repo_path, &["add", "."])?;
    commit(&repo_path, "initial import")?;

    Ok(repo_path)
}

/// Turn a fixture path into the URL aurum derives the package name from.
pub fn repo_url(repo_path: &Path) -> String {
    format!("file://{}", repo_path.display())
}

/// Add a commit to a fixture repository so that a later pull sees new
/// content.
pub fn add_commit(repo_path: &Path, file: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(file), content)?;
    git(repo_path, &["add", "."])?;
    commit(repo_path, "update")?;
    Ok(())
}

fn git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    ensure!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}

fn commit(dir: &Path, message: &str) -> Result<()> {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=aurum-test",
            "-c",
            "user.email=aurum-test@localhost",
            "commit",
            "-m",
            message,
        ])
        .current_dir(dir)
        .output()?;
    ensure!(
        output.status.success(),
        "git commit failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}
