//! Integration tests for the git-get binary.
//!
//! Every test runs against a throwaway workspace root and a throwaway home
//! directory so the user's environment never leaks in. Nothing here touches
//! the network: cloning is exercised only up to the point git is looked up.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A workspace root and home directory for one test.
struct Sandbox {
    root: TempDir,
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            root: TempDir::new().expect("failed to create root"),
            home: TempDir::new().expect("failed to create home"),
        }
    }

    fn root(&self) -> &Path {
        self.root.path()
    }

    /// A git-get command with GITPATH pointing at the sandbox root.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("git-get").unwrap();
        cmd.env("GITPATH", self.root())
            .env("HOME", self.home.path())
            .env_remove("GOPATH")
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("GIT_GET_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Create `<root>/<rel>/.git`.
    fn add_repo(&self, rel: &str) {
        fs::create_dir_all(self.root().join(rel).join(".git")).unwrap();
    }

    fn write_config(&self, contents: &str) -> std::path::PathBuf {
        let path = self.home.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }
}

fn line(s: impl AsRef<str>) -> String {
    format!("{}\n", s.as_ref())
}

mod root {
    use super::*;

    #[test]
    fn prints_gitpath() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .arg("--root")
            .assert()
            .success()
            .stdout(line(sandbox.root().display().to_string()));
    }

    #[test]
    fn falls_back_to_home_src() {
        let sandbox = Sandbox::new();
        let expected = sandbox.home.path().join("src");
        sandbox
            .cmd()
            .env_remove("GITPATH")
            .arg("--root")
            .assert()
            .success()
            .stdout(line(expected.display().to_string()));
    }

    #[test]
    fn gopath_before_home() {
        let sandbox = Sandbox::new();
        let gopath = sandbox.home.path().join("go");
        sandbox
            .cmd()
            .env_remove("GITPATH")
            .env("GOPATH", &gopath)
            .arg("--root")
            .assert()
            .success()
            .stdout(line(gopath.join("src").display().to_string()));
    }

    #[test]
    fn config_root_before_gopath() {
        let sandbox = Sandbox::new();
        let config = sandbox.write_config("root = \"code\"\n");
        sandbox
            .cmd()
            .env_remove("GITPATH")
            .env("GOPATH", "/go")
            .env("GIT_GET_CONFIG", &config)
            .arg("--root")
            .assert()
            .success()
            .stdout(line(
                sandbox.home.path().join("code").display().to_string(),
            ));
    }
}

mod print {
    use super::*;

    #[test]
    fn shorthand() {
        let sandbox = Sandbox::new();
        let dest = sandbox.root().join("github.com/takonomura/git-get");
        sandbox
            .cmd()
            .args(["--print", "takonomura/git-get"])
            .assert()
            .success()
            .stdout(line(format!(
                "git clone --recursive https://github.com/takonomura/git-get.git {}",
                dest.display()
            )));
    }

    #[test]
    fn branch_is_appended() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["-p", "-b", "dev", "https://github.com/takonomura/git-get.git/"])
            .assert()
            .success()
            .stdout(predicate::str::ends_with(" -b dev\n"));
    }

    #[test]
    fn ssh_url_template() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["-p", "-o", "{{ url }}", "git@github.com:takonomura/git-get.git"])
            .assert()
            .success()
            .stdout("ssh://git@github.com:takonomura/git-get.git\n");
    }

    #[test]
    fn abs_template() {
        let sandbox = Sandbox::new();
        let dest = sandbox.root().join("github.com/takonomura/git-get");
        sandbox
            .cmd()
            .args(["-p", "-o", "{{ abs }}", "github.com:takonomura/git-get.git"])
            .assert()
            .success()
            .stdout(line(dest.display().to_string()));
    }

    #[test]
    fn configured_template() {
        let sandbox = Sandbox::new();
        let config = sandbox.write_config("output = \"{{ url }} {{ branch }}\"\n");
        sandbox
            .cmd()
            .env("GIT_GET_CONFIG", &config)
            .args(["-p", "-b", "main", "a/b"])
            .assert()
            .success()
            .stdout("https://github.com/a/b.git main\n");
    }

    #[test]
    fn flag_template_beats_config() {
        let sandbox = Sandbox::new();
        let config = sandbox.write_config("output = \"{{ url }}\"\n");
        sandbox
            .cmd()
            .env("GIT_GET_CONFIG", &config)
            .args(["-p", "-o", "{{ path }}", "a/b"])
            .assert()
            .success()
            .stdout(line(Path::new("github.com/a/b").display().to_string()));
    }

    #[test]
    fn json() {
        let sandbox = Sandbox::new();
        let assert = sandbox
            .cmd()
            .args(["-p", "--json", "-b", "dev", "a/b"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
        assert_eq!(value["url"], "https://github.com/a/b.git");
        assert_eq!(value["branch"], "dev");
        assert_eq!(
            value["path"],
            Path::new("github.com/a/b").display().to_string()
        );
    }
}

mod errors {
    use super::*;

    #[test]
    fn unrecognized_reference() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["-p", "takonomura"])
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains(
                "Cannot parse specified repository",
            ));
    }

    #[test]
    fn https_without_host() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["-p", "https://takonomura/git-get"])
            .assert()
            .code(1);
    }

    #[test]
    fn invalid_template() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["-p", "-o", "{{ nope }}", "a/b"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid output template"));
    }

    #[test]
    fn invalid_config() {
        let sandbox = Sandbox::new();
        let config = sandbox.write_config("level = 0\n");
        sandbox
            .cmd()
            .env("GIT_GET_CONFIG", &config)
            .arg("--root")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to load config"));
    }

    #[test]
    fn missing_repository() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .assert()
            .code(1)
            .stderr(predicate::str::contains("missing repository argument"))
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn invalid_branch() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["-p", "-b", "bad..name", "a/b"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid branch name"));
    }

    #[test]
    fn git_not_on_path() {
        let sandbox = Sandbox::new();
        let empty = TempDir::new().unwrap();
        sandbox
            .cmd()
            .env("PATH", empty.path())
            .arg("a/b")
            .assert()
            .code(1)
            .stdout(predicate::str::starts_with("$ git clone --recursive "))
            .stderr(predicate::str::contains("Failed to clone the repository"))
            .stderr(predicate::str::contains("not found on PATH"));
    }

    #[test]
    fn quiet_hides_the_command() {
        let sandbox = Sandbox::new();
        let empty = TempDir::new().unwrap();
        sandbox
            .cmd()
            .env("PATH", empty.path())
            .args(["-q", "a/b"])
            .assert()
            .code(1)
            .stdout("");
    }
}

mod list {
    use super::*;

    fn native(rel: &str) -> String {
        Path::new(rel).display().to_string()
    }

    #[test]
    fn lists_repositories_in_order() {
        let sandbox = Sandbox::new();
        sandbox.add_repo("github.com/b/two");
        sandbox.add_repo("github.com/a/one");
        sandbox.add_repo("github.com/a/one/nested");

        sandbox
            .cmd()
            .arg("--list")
            .assert()
            .success()
            .stdout(format!(
                "{}\n{}\n",
                native("github.com/a/one"),
                native("github.com/b/two")
            ));
    }

    #[test]
    fn level_limits_depth() {
        let sandbox = Sandbox::new();
        sandbox.add_repo("shallow");
        sandbox.add_repo("github.com/a/deep");

        sandbox
            .cmd()
            .args(["-l", "-L", "1"])
            .assert()
            .success()
            .stdout("shallow\n");
    }

    #[test]
    fn configured_level() {
        let sandbox = Sandbox::new();
        sandbox.add_repo("github.com/a/deep");
        let config = sandbox.write_config("level = 2\n");

        sandbox
            .cmd()
            .env("GIT_GET_CONFIG", &config)
            .arg("-l")
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn abs_template() {
        let sandbox = Sandbox::new();
        sandbox.add_repo("host/a/b");

        sandbox
            .cmd()
            .args(["-l", "-o", "{{ abs }}"])
            .assert()
            .success()
            .stdout(line(sandbox.root().join("host/a/b").display().to_string()));
    }

    #[test]
    fn url_is_not_available() {
        let sandbox = Sandbox::new();
        sandbox.add_repo("host/a/b");

        sandbox
            .cmd()
            .args(["-l", "-o", "{{ url }}"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("not available"));
    }

    #[test]
    fn missing_root_fails() {
        let sandbox = Sandbox::new();
        let missing = sandbox.root().join("missing");

        sandbox
            .cmd()
            .env("GITPATH", &missing)
            .arg("-l")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to find repositories"));
    }

    #[test]
    fn json_lines() {
        let sandbox = Sandbox::new();
        sandbox.add_repo("host/a/b");

        sandbox
            .cmd()
            .args(["-l", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"path\":"))
            .stdout(predicate::str::contains("\"abs\":"));
    }
}

mod misc {
    use super::*;

    #[test]
    fn completions() {
        Command::cargo_bin("git-get")
            .unwrap()
            .args(["--completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("git-get"));
    }

    #[test]
    fn version_flag_works() {
        Command::cargo_bin("git-get")
            .unwrap()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("git-get"));
    }

    #[test]
    fn help_flag_works() {
        Command::cargo_bin("git-get")
            .unwrap()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("workspace"));
    }
}
