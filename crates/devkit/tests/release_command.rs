use std::fs;

use predicates::str::contains;
use tempfile::TempDir;

fn create_plugin_project() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");

    fs::write(
        dir.path().join("package.json"),
        "{\n  \"name\": \"sample-plugin\",\n  \"version\": \"1.0.0\"\n}\n",
    )
    .expect("failed to write package.json");
    fs::write(
        dir.path().join("manifest.json"),
        "{\n  \"id\": \"sample-plugin\",\n  \"version\": \"1.0.0\"\n}\n",
    )
    .expect("failed to write manifest.json");
    fs::write(dir.path().join("CHANGELOG.md"), "# 1.0.0\n\n- First release\n")
        .expect("failed to write CHANGELOG.md");

    dir
}

#[test]
fn release_outside_a_project_fails_with_hint() {
    let dir = TempDir::new().expect("failed to create temp dir");

    assert_cmd::cargo::cargo_bin_cmd!("devkit")
        .arg("release")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(contains("no devkit.toml or package.json found"));
}

#[test]
fn release_requires_an_interactive_terminal() {
    let project = create_plugin_project();

    assert_cmd::cargo::cargo_bin_cmd!("devkit")
        .arg("release")
        .current_dir(project.path())
        .env("DEVKIT_NO_TTY", "1")
        .env_remove("DEVKIT_FORCE_TTY")
        .assert()
        .failure()
        .stderr(contains("interactive terminal"))
        .stderr(contains("DEVKIT_NO_TTY is set"));
}

#[test]
fn dry_run_also_requires_a_terminal() {
    let project = create_plugin_project();

    assert_cmd::cargo::cargo_bin_cmd!("devkit")
        .args(["release", "--dry-run"])
        .current_dir(project.path())
        .env("DEVKIT_NO_TTY", "1")
        .assert()
        .failure()
        .stderr(contains("interactive terminal"));
}

#[test]
fn path_flag_selects_the_project() {
    let project = create_plugin_project();
    let elsewhere = TempDir::new().expect("failed to create temp dir");

    assert_cmd::cargo::cargo_bin_cmd!("devkit")
        .arg("release")
        .arg("-C")
        .arg(project.path())
        .current_dir(elsewhere.path())
        .env("DEVKIT_NO_TTY", "1")
        .assert()
        .failure()
        .stderr(contains("interactive terminal"));
}

#[test]
fn invalid_config_is_reported_with_its_path() {
    let project = create_plugin_project();
    fs::write(
        project.path().join("devkit.toml"),
        "[release]\nbranch = \"main\"\n",
    )
    .expect("failed to write devkit.toml");

    assert_cmd::cargo::cargo_bin_cmd!("devkit")
        .arg("release")
        .current_dir(project.path())
        .env("DEVKIT_NO_TTY", "1")
        .assert()
        .failure()
        .stderr(contains("devkit.toml"));
}
