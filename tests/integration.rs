// Integration tests drive the binary as a subprocess inside a throwaway project tree.
use predicates::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

const LOGO: &[u8] = b"\x89PNG\r\n\x1a\n not really a png";

const MIPMAPS: [&str; 5] = [
    "mipmap-mdpi",
    "mipmap-hdpi",
    "mipmap-xhdpi",
    "mipmap-xxhdpi",
    "mipmap-xxxhdpi",
];

/// `<tmp>/app` is the project root, `<tmp>/image/logo.png` the logo when `with_logo`.
fn workspace(with_logo: bool) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("app");
    fs::create_dir(&root).unwrap();

    if with_logo {
        fs::create_dir(dir.path().join("image")).unwrap();
        fs::write(dir.path().join("image/logo.png"), LOGO).unwrap();
    }

    (dir, root)
}

fn iconprep_in(root: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("iconprep").unwrap();

    cmd.current_dir(root).env("NO_COLOR", "1");

    cmd
}

fn mipmap_dir(root: &Path, name: &str) -> PathBuf {
    root.join("android/app/src/main/res").join(name)
}

#[test]
fn prepares_icon_splash_and_mipmaps() {
    let (_dir, root) = workspace(true);

    iconprep_in(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Source image:"))
        .stdout(predicate::str::contains("icon.png"))
        .stdout(predicate::str::contains("192x192 icons"))
        .stdout(predicate::str::contains("npx @capacitor/assets generate"))
        .stdout(predicate::str::contains("https://www.appicon.co/"));

    assert_eq!(fs::read(root.join("resources/icon.png")).unwrap(), LOGO);
    assert_eq!(fs::read(root.join("resources/splash.png")).unwrap(), LOGO);
    for name in MIPMAPS {
        assert!(mipmap_dir(&root, name).is_dir(), "{} missing", name);
    }
}

#[test]
fn missing_logo_exits_with_one_and_creates_nothing() {
    let (_dir, root) = workspace(false);

    iconprep_in(&root)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("iconprep::source::missing"));

    assert!(!root.join("resources").exists());
    assert!(!root.join("android").exists());
}

#[test]
fn running_twice_is_idempotent() {
    let (_dir, root) = workspace(true);

    iconprep_in(&root).assert().success();
    iconprep_in(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("exists"));

    assert_eq!(fs::read(root.join("resources/icon.png")).unwrap(), LOGO);
    assert_eq!(fs::read_dir(root.join("resources")).unwrap().count(), 2);
    assert_eq!(
        fs::read_dir(root.join("android/app/src/main/res"))
            .unwrap()
            .count(),
        5
    );
}

#[test]
fn dry_run_previews_without_writing() {
    let (_dir, root) = workspace(true);

    iconprep_in(&root)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("mipmap-xxxhdpi"))
        .stdout(predicate::str::contains("Dry run"));

    assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
}

#[test]
fn source_and_project_root_flags() {
    let (dir, root) = workspace(false);
    let custom_logo = dir.path().join("brand.png");
    fs::write(&custom_logo, b"brand").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("iconprep").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("--project-root")
        .arg(&root)
        .arg("--source")
        .arg(&custom_logo)
        .assert()
        .success();

    assert_eq!(fs::read(root.join("resources/splash.png")).unwrap(), b"brand");
}

#[test]
fn invalid_config_fails() {
    let (_dir, root) = workspace(true);
    fs::write(root.join("iconprep.toml"), "densities = [\"ldpi\"]").unwrap();

    iconprep_in(&root)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("iconprep::config::parse"));
}

#[test]
fn source_that_is_the_icon_is_rejected_untouched() {
    let (_dir, root) = workspace(false);
    fs::create_dir(root.join("resources")).unwrap();
    fs::write(root.join("resources/icon.png"), LOGO).unwrap();

    iconprep_in(&root)
        .arg("--source")
        .arg("resources/icon.png")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "iconprep::source::same_as_destination",
        ));

    assert_eq!(fs::read(root.join("resources/icon.png")).unwrap(), LOGO);
    assert!(!root.join("resources/splash.png").exists());
}
