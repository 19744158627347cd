#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::thread;
use std::time::Duration;

use assert_cmd::{assert::Assert, Command};
use predicates::prelude::*;
use tempfile::TempDir;

mod stubs;

const TEMPLATE_FILES: &[&str] = &[
    "install-sh",
    "config.guess",
    "config.sub",
    "ltmain.sh",
    "Makefile.in",
];

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let ws = Workspace {
            dir: tempfile::tempdir().unwrap(),
        };
        let templates = ws.path("templates");
        fs::create_dir(&templates).unwrap();
        for name in TEMPLATE_FILES {
            fs::write(templates.join(name), format!("# {name}\n")).unwrap();
        }
        fs::write(
            templates.join("configure.in"),
            "AC_INIT([$$PROJECTNAME$$], [1.0])\n",
        )
        .unwrap();
        fs::write(ws.path("reboot.yin"), stubs::models::REBOOT_YIN).unwrap();
        fs::write(ws.path("paths.txt"), stubs::PATHS_FILE).unwrap();
        ws
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Executable shell script standing in for an external tool
    fn script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("transapi-gen").unwrap();
        cmd.current_dir(self.dir.path())
            .env("TRANSAPI_PYANG", "true")
            .env("TRANSAPI_XSLTPROC", "true")
            .env_remove("TRANSAPI_TEMPLATE_DIR");
        cmd
    }

    fn transapi(&self, extra: &[&str]) -> Assert {
        self.cmd()
            .arg("transapi")
            .arg("--model")
            .arg(self.path("reboot.yin"))
            .arg("--template-dir")
            .arg(self.path("templates"))
            .arg("--output-dir")
            .arg(self.path("out"))
            .args(extra)
            .assert()
    }
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn transapi_generates_module_directory() {
    let ws = Workspace::new();
    let paths = ws.path("paths.txt");

    ws.transapi(&["--paths", paths.to_str().unwrap()])
        .success()
        .stdout("");

    let module_dir = ws.path("out/reboot");
    assert_eq!(read(module_dir.join("reboot.c")), stubs::REBOOT_C);
    assert_eq!(read(module_dir.join("configure.in")), "AC_INIT([reboot], [1.0])\n");
    for name in TEMPLATE_FILES {
        assert_eq!(read(module_dir.join(name)), format!("# {name}\n"));
    }
}

#[test]
fn name_option_overrides_module_name() {
    let ws = Workspace::new();
    let paths = ws.path("paths.txt");

    ws.transapi(&["--paths", paths.to_str().unwrap(), "--name", "rebooter"])
        .success()
        .stdout("");

    assert!(ws.path("out/rebooter/rebooter.c").is_file());
    assert_eq!(
        read(ws.path("out/rebooter/configure.in")),
        "AC_INIT([rebooter], [1.0])\n"
    );
}

#[test]
fn invalid_definition_is_reported_on_stdout() {
    let ws = Workspace::new();
    fs::write(ws.path("bad.txt"), "/system/clock\nbad line\n").unwrap();
    let bad = ws.path("bad.txt");

    ws.transapi(&["--paths", bad.to_str().unwrap()])
        .success()
        .stdout("Line bad line is not valid namespace definition nor XPath.\n");

    assert!(!ws.path("out/reboot").exists());
}

#[test]
fn missing_paths_file_option_requires_a_path() {
    let ws = Workspace::new();

    ws.transapi(&[])
        .success()
        .stdout("At least one path is required.\n");
}

#[test]
fn unreadable_paths_file_names_the_file() {
    let ws = Workspace::new();

    ws.transapi(&["--paths", "/nonexistent/paths.txt"])
        .success()
        .stdout(predicate::str::contains("/nonexistent/paths.txt"));
}

#[test]
fn failing_tool_reports_command_and_exit_code() {
    let ws = Workspace::new();
    let paths = ws.path("paths.txt");

    ws.cmd()
        .env("TRANSAPI_XSLTPROC", "false")
        .arg("transapi")
        .arg("--model")
        .arg(ws.path("reboot.yin"))
        .arg("--paths")
        .arg(&paths)
        .arg("--template-dir")
        .arg(ws.path("templates"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Command 'false --output"))
        .stdout(predicate::str::ends_with("returned 1!\n"));
}

#[test]
fn templates_are_found_in_working_directory() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("transapi")
        .arg("--model")
        .arg(ws.path("reboot.yin"))
        .arg("--paths")
        .arg(ws.path("paths.txt"))
        .assert()
        .success()
        .stdout("");

    assert_eq!(read(ws.path("reboot/reboot.c")), stubs::REBOOT_C);
    assert_eq!(read(ws.path("reboot/configure.in")), "AC_INIT([reboot], [1.0])\n");
}

#[test]
fn missing_templates_are_reported() {
    let ws = Workspace::new();
    fs::remove_dir_all(ws.path("templates")).unwrap();

    ws.cmd()
        .arg("transapi")
        .arg("--model")
        .arg(ws.path("reboot.yin"))
        .arg("--paths")
        .arg(ws.path("paths.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Template directory not found. Use --template-dir parameter",
        ));

    assert!(!ws.path("reboot").exists());
}

#[test]
fn yang_model_is_converted_before_generation() {
    let ws = Workspace::new();
    fs::write(ws.path("reboot-yin.xml"), stubs::models::REBOOT_YIN).unwrap();
    fs::write(ws.path("reboot.yang"), "module reboot {}").unwrap();
    let source = ws.path("reboot-yin.xml");
    let pyang = ws.script("fake-pyang", &format!("cat '{}'\n", source.display()));
    fs::remove_file(ws.path("reboot.yin")).unwrap();

    ws.cmd()
        .env("TRANSAPI_PYANG", &pyang)
        .arg("transapi")
        .arg("--model")
        .arg(ws.path("reboot.yang"))
        .arg("--paths")
        .arg(ws.path("paths.txt"))
        .arg("--template-dir")
        .arg(ws.path("templates"))
        .arg("--output-dir")
        .arg(ws.path("out"))
        .assert()
        .success()
        .stdout("");

    assert_eq!(read(ws.path("reboot.yin")), stubs::models::REBOOT_YIN);
    assert_eq!(read(ws.path("out/reboot/reboot.c")), stubs::REBOOT_C);
}

#[test]
fn interrupt_prints_notice_and_exits_cleanly() {
    let ws = Workspace::new();
    let pyang = ws.script("slow-pyang", "sleep 3\n");

    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("transapi-gen"))
        .current_dir(ws.dir.path())
        .env("TRANSAPI_PYANG", &pyang)
        .args(["convert", "--model", "slow.yang"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    thread::sleep(Duration::from_millis(500));
    let kill = std::process::Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(kill.success());

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Killed by user!\n");
}

#[test]
fn convert_accepts_yin_model() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("convert")
        .arg("--model")
        .arg(ws.path("reboot.yin"))
        .assert()
        .success()
        .stdout("");
}

#[test]
fn unparsable_model_is_reported() {
    let ws = Workspace::new();
    fs::write(ws.path("broken.yang"), "module broken {}").unwrap();

    // `true` stands in for pyang and prints nothing
    ws.cmd()
        .arg("convert")
        .arg("--model")
        .arg(ws.path("broken.yang"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Can not parse data model: "));
}

#[test]
fn unknown_subcommand_is_rejected() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Subcommand must be one of"));
}

#[test]
fn model_option_is_required() {
    let ws = Workspace::new();

    ws.cmd()
        .arg("validation")
        .assert()
        .success()
        .stdout(predicate::str::contains("--model"));
}
