//! End-to-end CLI tests for surover

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command running in an empty directory, so no stray surover.toml is picked up.
fn surover(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("surover");
    cmd.current_dir(dir.path());
    cmd
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = TempDir::new().unwrap();
        surover(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("render"));
    }

    #[test]
    fn shows_version() {
        let dir = TempDir::new().unwrap();
        surover(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod routing {
    use super::*;

    #[test]
    fn resolves_known_fragment() {
        let dir = TempDir::new().unwrap();
        surover(&dir)
            .args(["route", "#/team"])
            .assert()
            .success()
            .stdout("team\n");
    }

    #[test]
    fn unknown_fragment_is_home() {
        let dir = TempDir::new().unwrap();
        surover(&dir)
            .args(["route", "#/unknown-path"])
            .assert()
            .success()
            .stdout("home\n");
    }

    #[test]
    fn lists_routes_as_json() {
        let dir = TempDir::new().unwrap();
        let output = surover(&dir).args(["routes", "--json"]).output().unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let files: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["file"].as_str().unwrap())
            .collect();
        assert_eq!(
            files,
            vec!["index.html", "expos.html", "sponsors.html", "programs.html", "team.html"]
        );
    }
}

mod rendering {
    use super::*;

    #[test]
    fn renders_team_page() {
        let dir = TempDir::new().unwrap();
        surover(&dir)
            .args(["render", "#/team"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("Team Captains"))
            .stdout(predicate::str::contains("mailto:mahmut@surover.org"));
    }

    #[test]
    fn logs_stay_off_stdout() {
        let dir = TempDir::new().unwrap();
        surover(&dir)
            .args(["--log-level", "debug", "render"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stderr(predicate::str::contains("Rendering"));
    }
}

mod building {
    use super::*;

    #[test]
    fn writes_site_into_out_dir() {
        let dir = TempDir::new().unwrap();
        surover(&dir)
            .args(["build", "--out", "public", "--link-mode", "static"])
            .assert()
            .success()
            .stdout(predicate::str::contains("team.html"));

        let out = dir.path().join("public");
        let files = [
            "index.html",
            "expos.html",
            "sponsors.html",
            "programs.html",
            "team.html",
            "site.json",
        ];
        for file in files {
            assert!(out.join(file).is_file(), "missing {file}");
        }
        let expos = std::fs::read_to_string(out.join("expos.html")).unwrap();
        assert!(expos.contains("href=\"team.html\""));
    }

    #[test]
    fn default_build_links_work_without_script() {
        let dir = TempDir::new().unwrap();
        surover(&dir).arg("build").assert().success();

        let home = std::fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
        assert!(home.contains("href=\"expos.html\""));
        assert!(!home.contains("href=\"#/expos\""));

        let manifest = std::fs::read_to_string(dir.path().join("dist/site.json")).unwrap();
        assert!(manifest.contains("\"link_mode\": \"static\""));
    }

    #[test]
    fn bundle_build_boots_the_app() {
        let dir = TempDir::new().unwrap();
        surover(&dir)
            .args(["build", "--bundle", "/pkg/surover_web.js"])
            .assert()
            .success();

        let expos = std::fs::read_to_string(dir.path().join("dist/expos.html")).unwrap();
        assert!(expos.contains("href=\"#/team\""));
        assert!(expos.contains("<script type=\"module\">"));
        assert!(expos.contains("data-boot="));
    }

    #[test]
    fn hash_links_without_bundle_warn() {
        let dir = TempDir::new().unwrap();
        surover(&dir)
            .args(["build", "--link-mode", "hash"])
            .assert()
            .success()
            .stderr(predicate::str::contains("without a bundle"));
    }

    #[test]
    fn config_file_sets_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("surover.toml"),
            "brand = \"Rover Lab\"\nout_dir = \"site\"\ncopyright_year = 2025\n",
        )
        .unwrap();

        surover(&dir).arg("build").assert().success();

        let home = std::fs::read_to_string(dir.path().join("site/index.html")).unwrap();
        assert!(home.contains("© 2025 Rover Lab • All rights reserved."));
    }

    #[test]
    fn malformed_config_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("surover.toml"), "brand = [").unwrap();

        surover(&dir)
            .arg("build")
            .assert()
            .failure()
            .stderr(predicate::str::contains("[surover] Error"))
            .stderr(predicate::str::contains("surover.toml"));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let dir = TempDir::new().unwrap();
        surover(&dir)
            .args(["--config", "absent.toml", "routes"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("absent.toml"));
    }
}
