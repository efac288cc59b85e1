//! Integration tests for the `workdir` binary.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

/// A scratch home for one test: alias file, output directory, templates.
struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("projects")).unwrap();
        Self { temp }
    }

    fn config(&self) -> PathBuf {
        self.temp.path().join("config").join("config.yaml")
    }

    fn projects(&self) -> PathBuf {
        self.temp.path().join("projects")
    }

    fn templates(&self) -> PathBuf {
        let root = self.temp.path().join("templates");
        fs::create_dir_all(root.join("basic")).unwrap();
        root
    }

    /// `workdir` with an isolated environment.
    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("workdir");
        cmd.current_dir(self.temp.path())
            .env("WORKDIR_CONFIG", self.config())
            .env_remove("WORKDIR_RENDERER")
            .env_remove("WORKDIR_TEMPLATES_DIR")
            .env_remove("RUST_LOG")
            .env_remove("NO_COLOR");
        cmd
    }

    /// Renderer stand-in: creates `<prefix><name>` and records the template.
    #[cfg(unix)]
    fn fake_renderer(&self) -> String {
        let script = self.temp.path().join("fake-cookiecutter.sh");
        fs::write(
            &script,
            r#"out=""; prefix=""; name="work"; template=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    --no-input) shift ;;
    --output-dir) out="$2"; shift 2 ;;
    wkdir_prefix=*) prefix="${1#wkdir_prefix=}"; shift ;;
    name=*) name="${1#name=}"; shift ;;
    *=*) shift ;;
    *) template="$1"; shift ;;
  esac
done
mkdir "$out/$prefix$name"
printf '%s' "$template" > "$out/$prefix$name/template.txt"
echo "rendered $template"
"#,
        )
        .unwrap();
        format!("sh {}", script.display())
    }
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

fn recorded_template(dir: &Path) -> String {
    fs::read_to_string(dir.join("template.txt")).unwrap()
}

// ── meta ──────────────────────────────────────────────────────────────────────

#[test]
fn version_subcommand_prints_name_and_version() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(format!("workdir {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_subcommands() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add-alias"))
        .stdout(predicate::str::contains("remove-alias"));
}

#[test]
fn completions_are_generated_for_bash() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("workdir"));
}

// ── aliases ───────────────────────────────────────────────────────────────────

#[test]
fn alias_lifecycle() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["add-alias", "rep", "gh:me/report-template"])
        .assert()
        .success();
    assert!(sb.config().is_file());

    let table = stdout_of(sb.cmd().arg("list"));
    let lines: Vec<&str> = table.lines().collect();
    assert!(lines[0].starts_with("NAME"));
    assert!(lines[0].contains("TYPE"));
    assert!(lines[1].starts_with("rep"));
    assert!(lines[1].contains("alias"));
    assert!(lines[1].contains("gh:me/report-template"));
    assert!(lines[2].starts_with("basic"));
    assert!(lines[2].contains("builtin"));

    sb.cmd().args(["remove-alias", "rep"]).assert().success();

    let names = stdout_of(sb.cmd().args(["list", "--format", "list"]));
    assert_eq!(names, "basic\n");
}

#[test]
fn removing_unknown_alias_is_not_found() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["remove-alias", "ghost"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Alias 'ghost' does not exist"));
}

#[test]
fn alias_name_with_whitespace_is_rejected() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["add-alias", "my alias", "/tpl"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid alias name"));
}

#[test]
fn config_flag_overrides_environment() {
    let sb = Sandbox::new();
    let other = sb.temp.path().join("other.yaml");

    sb.cmd()
        .args(["--config"])
        .arg(&other)
        .args(["add-alias", "x", "/tpl/x"])
        .assert()
        .success();

    assert!(other.is_file());
    assert!(!sb.config().exists());
}

#[test]
fn list_json_contains_aliases_and_builtins() {
    let sb = Sandbox::new();
    sb.cmd().args(["add-alias", "notes", "~/tpl/notes"]).assert().success();

    let json = stdout_of(sb.cmd().args(["--output-format", "json", "list"]));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rows = value.as_array().unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "notes");
    assert_eq!(rows[0]["kind"], "alias");
    assert_eq!(rows[0]["reference"], "~/tpl/notes");
    assert_eq!(rows[1]["name"], "basic");
    assert_eq!(rows[1]["kind"], "builtin");
}

#[test]
fn global_json_output_overrides_list_layout() {
    let sb = Sandbox::new();

    let json = stdout_of(sb.cmd().args(["list", "--format", "list", "--output-format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["name"], "basic");
    assert_eq!(value[0]["kind"], "builtin");
}

#[test]
fn non_utf8_alias_file_reads_as_empty() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.config().parent().unwrap()).unwrap();
    fs::write(sb.config(), [0xff, 0xfe, b'a', b':', b' ', 0xc3]).unwrap();

    let names = stdout_of(sb.cmd().args(["list", "--format", "list"]));
    assert_eq!(names, "basic\n");

    sb.cmd()
        .args(["add-alias", "rep", "gh:me/rep"])
        .assert()
        .success();
}

#[test]
fn malformed_alias_file_reads_as_empty() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.config().parent().unwrap()).unwrap();
    fs::write(sb.config(), "aliases: [not, a, mapping]\n").unwrap();

    let names = stdout_of(sb.cmd().args(["list", "--format", "list"]));
    assert_eq!(names, "basic\n");
}

// ── new: failures ─────────────────────────────────────────────────────────────

#[test]
fn new_requires_type() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["new", "-o"])
        .arg(sb.projects())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--type"));
}

#[test]
fn new_rejects_missing_output_directory() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["new", "-t", "gh:me/tpl", "-o"])
        .arg(sb.projects().join("missing"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Output directory does not exist"))
        .stderr(predicate::str::contains("ERROR").not());
}

#[test]
fn renderer_that_cannot_start_is_reported() {
    let sb = Sandbox::new();
    sb.cmd()
        .env("WORKDIR_RENDERER", "/nonexistent/cookiecutter")
        .args(["new", "-t", "gh:me/tpl", "-o"])
        .arg(sb.projects())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Template rendering failed"))
        .stderr(predicate::str::contains("ERROR"));
}

#[test]
fn builtin_without_packaged_files_is_not_found() {
    let sb = Sandbox::new();
    let empty_root = sb.temp.path().join("empty-templates");
    fs::create_dir(&empty_root).unwrap();

    sb.cmd()
        .env("WORKDIR_TEMPLATES_DIR", &empty_root)
        .env("WORKDIR_RENDERER", "/nonexistent/cookiecutter")
        .args(["new", "-t", "basic", "-o"])
        .arg(sb.projects())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Builtin template 'basic' is not installed"));
}

// ── new: success (needs a POSIX shell) ────────────────────────────────────────

#[cfg(unix)]
#[test]
fn new_prints_only_the_created_path_on_stdout() {
    let sb = Sandbox::new();
    fs::create_dir(sb.projects().join("01_intro")).unwrap();

    let stdout = stdout_of(
        sb.cmd()
            .env("WORKDIR_RENDERER", sb.fake_renderer())
            .args(["new", "-t", "gh:me/tpl", "-c", "name=analysis", "-o"])
            .arg(sb.projects()),
    );

    let created = sb.projects().join("02_analysis");
    assert_eq!(stdout, format!("{}\n", created.display()));
    assert!(created.is_dir());
    assert_eq!(recorded_template(&created), "gh:me/tpl");
}

#[cfg(unix)]
#[test]
fn new_resolves_alias_before_rendering() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["add-alias", "rep", "gh:me/report-template"])
        .assert()
        .success();

    sb.cmd()
        .env("WORKDIR_RENDERER", sb.fake_renderer())
        .args(["new", "-t", "rep", "-c", "name=q3", "-o"])
        .arg(sb.projects())
        .assert()
        .success();

    assert_eq!(
        recorded_template(&sb.projects().join("q3")),
        "gh:me/report-template"
    );
}

#[cfg(unix)]
#[test]
fn new_uses_packaged_builtin() {
    let sb = Sandbox::new();
    let templates = sb.templates();

    sb.cmd()
        .env("WORKDIR_RENDERER", sb.fake_renderer())
        .env("WORKDIR_TEMPLATES_DIR", &templates)
        .args(["new", "-t", "basic", "-o"])
        .arg(sb.projects())
        .assert()
        .success();

    assert_eq!(
        PathBuf::from(recorded_template(&sb.projects().join("work"))),
        templates.join("basic")
    );
}

#[cfg(unix)]
#[test]
fn malformed_extra_context_is_warned_and_skipped() {
    let sb = Sandbox::new();

    sb.cmd()
        .env("WORKDIR_RENDERER", sb.fake_renderer())
        .args(["new", "-t", "/tpl", "-c", "oops", "-c", "name=kept", "-o"])
        .arg(sb.projects())
        .assert()
        .success()
        .stderr(predicate::str::contains("Malformed context entry 'oops'"));

    assert!(sb.projects().join("kept").is_dir());
}

#[cfg(unix)]
#[test]
fn explicit_prefix_wins_over_allocation() {
    let sb = Sandbox::new();
    fs::create_dir(sb.projects().join("05_old")).unwrap();

    sb.cmd()
        .env("WORKDIR_RENDERER", sb.fake_renderer())
        .args(["new", "-t", "/tpl", "-c", "wkdir_prefix=X-", "-c", "name=y", "-o"])
        .arg(sb.projects())
        .assert()
        .success();

    assert!(sb.projects().join("X-y").is_dir());
}

#[cfg(unix)]
#[test]
fn renderer_output_goes_to_stderr() {
    let sb = Sandbox::new();

    sb.cmd()
        .env("WORKDIR_RENDERER", sb.fake_renderer())
        .args(["new", "-t", "/tpl", "-o"])
        .arg(sb.projects())
        .assert()
        .success()
        .stdout(predicate::str::contains("rendered").not())
        .stderr(predicate::str::contains("rendered /tpl"));
}

#[cfg(unix)]
#[test]
fn dotenv_cannot_choose_the_renderer() {
    let sb = Sandbox::new();
    let renderer = sb.fake_renderer();
    fs::write(
        sb.temp.path().join(".env"),
        format!("WORKDIR_RENDERER=\"{renderer}\"\n"),
    )
    .unwrap();
    let empty_path = sb.temp.path().join("no-bin");
    fs::create_dir(&empty_path).unwrap();

    sb.cmd()
        .env("PATH", &empty_path)
        .args(["new", "-t", "/tpl", "-c", "name=pwned", "-o"])
        .arg(sb.projects())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Template rendering failed"));

    assert!(!sb.projects().join("pwned").exists());
}

#[cfg(unix)]
#[test]
fn json_output_reports_prefix_and_template() {
    let sb = Sandbox::new();
    fs::create_dir(sb.projects().join("09_a")).unwrap();

    let json = stdout_of(
        sb.cmd()
            .env("WORKDIR_RENDERER", sb.fake_renderer())
            .args(["--output-format", "json", "new", "-t", "/tpl", "-c", "name=b", "-o"])
            .arg(sb.projects()),
    );
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["prefix"], "10_");
    assert_eq!(value["template"], "/tpl");
}
