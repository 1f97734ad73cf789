use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// A fresh git repository with a local identity configured, so that the
/// commits the tool creates are accepted on any machine.
#[fixture]
pub fn repository_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    run_git_command(dir.path(), &["init"]).assert().success();
    run_git_command(dir.path(), &["config", "user.name", "Draw Bot"])
        .assert()
        .success();
    run_git_command(dir.path(), &["config", "user.email", "draw-bot@example.com"])
        .assert()
        .success();

    dir
}

/// A fresh git repository with no committer identity anywhere in reach,
/// so every `git commit` in it fails while branch creation, log writes
/// and staging still succeed.
#[fixture]
pub fn anonymous_repository_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    run_git_command(dir.path(), &["init"]).assert().success();

    dir
}

/// Strips every identity source git would otherwise fall back on.
pub fn without_git_identity(cmd: &mut Command) -> &mut Command {
    cmd.env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_CONFIG_SYSTEM", "/dev/null")
        .env_remove("GIT_AUTHOR_NAME")
        .env_remove("GIT_AUTHOR_EMAIL")
        .env_remove("GIT_COMMITTER_NAME")
        .env_remove("GIT_COMMITTER_EMAIL")
        .env_remove("EMAIL")
}

pub fn run_draw_command(bitmap_path: &Path, repository_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("github-draw").expect("Failed to find binary");
    cmd.arg(bitmap_path).arg(repository_path);
    cmd
}

pub fn run_git_command(repository_path: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(repository_path).args(args);
    cmd
}

pub fn current_branch(repository_path: &Path) -> String {
    git_stdout(repository_path, &["branch", "--show-current"])
        .trim()
        .to_string()
}

/// Commit subjects on HEAD, oldest first.
pub fn commit_messages(repository_path: &Path) -> Vec<String> {
    git_stdout(repository_path, &["log", "--pretty=%s", "--reverse"])
        .lines()
        .map(str::to_string)
        .collect()
}

/// Author dates on HEAD as `YYYY-MM-DD`, oldest first.
pub fn commit_dates(repository_path: &Path) -> Vec<String> {
    git_stdout(
        repository_path,
        &["log", "--pretty=%ad", "--date=short", "--reverse"],
    )
    .lines()
    .map(str::to_string)
    .collect()
}

fn git_stdout(repository_path: &Path, args: &[&str]) -> String {
    let output = run_git_command(repository_path, args)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
