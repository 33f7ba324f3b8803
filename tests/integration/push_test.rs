//! Full `git push` through an installed pre-receive hook

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use assert_cmd::cargo;

use crate::common::git_repo::TempGitRepo;

/// PATH with the freshly built pushgate binary first, so the hook finds it
fn path_with_pushgate() -> OsString {
    let bin_dir = Path::new(cargo::cargo_bin!("pushgate"))
        .parent()
        .unwrap()
        .to_path_buf();
    let mut paths = vec![bin_dir];
    if let Some(existing) = std::env::var_os("PATH") {
        paths.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(paths).unwrap()
}

/// Server repository with the hook installed and `policy` as its config
fn server(policy: &str) -> TempGitRepo {
    let server = TempGitRepo::new_bare();
    fs::create_dir_all(server.path().join("hooks")).unwrap();
    fs::write(server.path().join("pushgate.toml"), policy).unwrap();

    let status = Command::new(cargo::cargo_bin!("pushgate"))
        .args(["install", "--git-dir"])
        .arg(server.path())
        .status()
        .unwrap();
    assert!(status.success());
    server
}

fn push(client: &TempGitRepo, server: &TempGitRepo, refspec: &str) -> Output {
    Command::new("git")
        .args(["push", "--porcelain"])
        .arg(server.path())
        .arg(refspec)
        .current_dir(client.path())
        .env("PATH", path_with_pushgate())
        .env_remove("GIT_DIR")
        .env_remove("PUSHGATE_PUSHER_NAME")
        .env_remove("PUSHGATE_PUSHER_EMAIL")
        .output()
        .unwrap()
}

const POLICY: &str = r#"
commitMessageRegex = "[A-Z]+-[0-9]+ .*"
branchNameRegex = "(feature|bugfix)/.*"
"#;

#[test]
fn test_push_rejected_by_hook() {
    let server = server(POLICY);
    let client = TempGitRepo::new();
    let bad = client.commit_file("a.txt", "a\n", "no ticket here");

    let output = push(&client, &server, "master:master");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("PUSH REJECTED BY PUSHGATE"), "{stderr}");
    assert!(
        stderr.contains(&format!(
            "refs/heads/master: {bad}: commit message doesn't match regex: [A-Z]+-[0-9]+ .*"
        )),
        "{stderr}"
    );
    assert!(!server.git(&["rev-parse", "--verify", "refs/heads/master"]).status.success());
}

#[test]
fn test_push_accepted_by_hook() {
    let server = server(POLICY);
    let client = TempGitRepo::new();
    let good = client.commit_file("a.txt", "a\n", "ABC-1 Add a");

    let output = push(&client, &server, "master:master");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(server.rev_parse("refs/heads/master"), good);
}

#[test]
fn test_only_new_commits_are_checked() {
    let server = server("");
    let client = TempGitRepo::new();
    client.commit_file("a.txt", "a\n", "legacy commit without ticket");
    assert!(push(&client, &server, "master:master").status.success());

    // tighten the policy after history already exists on the server
    fs::write(server.path().join("pushgate.toml"), POLICY).unwrap();
    client.commit_file("b.txt", "b\n", "ABC-2 Add b");

    let output = push(&client, &server, "master:master");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_new_branch_name_is_checked() {
    let server = server(POLICY);
    let client = TempGitRepo::new();
    client.commit_file("a.txt", "a\n", "ABC-1 Add a");
    assert!(push(&client, &server, "master:master").status.success());

    let output = push(&client, &server, "master:refs/heads/random");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Invalid branch name. 'random' does not match regex"), "{stderr}");

    assert!(push(&client, &server, "master:refs/heads/feature/a").status.success());
}
