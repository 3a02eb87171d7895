//! Shared helpers for driving the `tether` binary against real git
//! repositories, hermetic via `GIT_CONFIG_GLOBAL`.
//!
//! Each test binary compiles this module separately and uses a different
//! subset of it.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write a throwaway global git config so commits and branch names are
/// deterministic regardless of the host machine.
pub fn write_git_config(root: &Path) -> PathBuf {
    let path = root.join("test-gitconfig");
    fs::write(
        &path,
        "[user]\n\
         \tname = Tether Tests\n\
         \temail = tether@example.invalid\n\
         [init]\n\
         \tdefaultBranch = main\n\
         [pull]\n\
         \trebase = false\n\
         [core]\n\
         \teditor = true\n",
    )
    .expect("write git config");
    path
}

/// Run a git command in `dir`, asserting success, returning stdout.
pub fn git(dir: &Path, config: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CONFIG_GLOBAL", config)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .output()
        .expect("spawn git");
    assert!(
        output.status.success(),
        "git {args:?} failed:\n{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// The `tether` binary, pointed at `workspace` with the hermetic git config.
pub fn tether_cmd(workspace: &Path, config: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("tether").expect("tether binary");
    cmd.current_dir(workspace)
        .env("GIT_CONFIG_GLOBAL", config)
        .env("GIT_CONFIG_NOSYSTEM", "1");
    cmd
}

/// Create `remote.git` (bare) under `root` and seed its `main` branch with
/// one commit containing `file` → `content`. Returns the bare path.
pub fn seeded_bare_remote(root: &Path, config: &Path, file: &str, content: &str) -> PathBuf {
    let bare = root.join("remote.git");
    git(root, config, &["init", "--bare", "remote.git"]);

    let seed = root.join("seed");
    fs::create_dir(&seed).expect("create seed dir");
    git(&seed, config, &["init", "-b", "main"]);
    fs::write(seed.join(file), content).expect("write seed file");
    git(&seed, config, &["add", "."]);
    git(&seed, config, &["commit", "-m", "remote seed"]);
    git(
        &seed,
        config,
        &["remote", "add", "origin", bare.to_str().expect("utf8 path")],
    );
    git(&seed, config, &["push", "--set-upstream", "origin", "main"]);
    bare
}
