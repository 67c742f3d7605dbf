//! End-to-end launches against a throwaway root with a fake venv.
//!
//! The fake interpreter is a shell script that hands its arguments to
//! `/bin/sh`, so the "python" task scripts below are plain shell.
#![cfg(unix)]

use dxf2shp_launcher::cli::commands::launch::launch_in;
use dxf2shp_launcher::core::LauncherError;
use dxf2shp_launcher::pipeline::LaunchOutcome;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;
use tokio::sync::Mutex;

// Writing the fake interpreter while another test forks can make exec fail
// with ETXTBSY, so launches in this file run one at a time.
static SERIAL: Mutex<()> = Mutex::const_new(());

fn write_file(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn install_interpreter(root: &Path) {
    let interpreter = root.join("venv").join("bin").join("python");
    write_file(&interpreter, "#!/bin/sh\nexec /bin/sh \"$@\"\n");
    let mut perms = std::fs::metadata(&interpreter).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&interpreter, perms).unwrap();
}

/// Task scripts that leave a marker in the cwd, then exit with `code`.
fn install_tasks(root: &Path, dxf2shp_code: i32, make_prj_code: i32) {
    write_file(
        &root.join("src").join("dxf2shp.py"),
        &format!("echo converted > dxf2shp.marker\nexit {}\n", dxf2shp_code),
    );
    write_file(
        &root.join("src").join("makePrj4shp.py"),
        &format!("echo projected > makePrj4shp.marker\nexit {}\n", make_prj_code),
    );
}

async fn launch(root: &Path, stdin: &[u8]) -> (LaunchOutcome, Vec<u8>) {
    let mut input = stdin;
    let mut output = Vec::new();
    let outcome = launch_in(root, &mut input, &mut output).await.unwrap();
    (outcome, output)
}

#[tokio::test]
async fn missing_interpreter_exits_one_without_running_tasks() {
    let _serial = SERIAL.lock().await;
    let root = TempDir::new().unwrap();
    install_tasks(root.path(), 0, 0);

    let (outcome, output) = launch(root.path(), b"\n").await;

    assert_eq!(outcome, LaunchOutcome::MissingInterpreter);
    assert_eq!(outcome.exit_code(), 1);
    assert!(output.is_empty());
    assert!(!root.path().join("dxf2shp.marker").exists());
    assert!(!root.path().join("makePrj4shp.marker").exists());
}

#[tokio::test]
async fn missing_interpreter_stays_silent_with_broken_launcher_toml() {
    let _serial = SERIAL.lock().await;
    let root = TempDir::new().unwrap();
    install_tasks(root.path(), 0, 0);
    write_file(&root.path().join("launcher.toml"), "[venv\n");

    let (outcome, output) = launch(root.path(), b"\n").await;

    assert_eq!(outcome, LaunchOutcome::MissingInterpreter);
    assert_eq!(outcome.exit_code(), 1);
    assert!(output.is_empty());
    assert!(!root.path().join("dxf2shp.marker").exists());
}

#[tokio::test]
async fn broken_launcher_toml_is_reported_when_interpreter_exists() {
    let _serial = SERIAL.lock().await;
    let root = TempDir::new().unwrap();
    install_interpreter(root.path());
    install_tasks(root.path(), 0, 0);
    write_file(&root.path().join("launcher.toml"), "[venv\n");

    let mut input: &[u8] = b"\n";
    let mut output = Vec::new();
    let err = launch_in(root.path(), &mut input, &mut output)
        .await
        .unwrap_err();

    assert!(matches!(err, LauncherError::Toml(_)));
    assert!(output.is_empty());
    assert!(!root.path().join("dxf2shp.marker").exists());
}

#[tokio::test]
async fn first_task_failure_propagates_and_skips_second() {
    let _serial = SERIAL.lock().await;
    let root = TempDir::new().unwrap();
    install_interpreter(root.path());
    install_tasks(root.path(), 2, 0);

    let (outcome, output) = launch(root.path(), b"\n").await;

    assert_eq!(
        outcome,
        LaunchOutcome::TaskFailed {
            task: "dxf2shp".to_string(),
            code: 2
        }
    );
    assert_eq!(outcome.exit_code(), 2);
    assert!(output.is_empty());
    assert!(root.path().join("dxf2shp.marker").exists());
    assert!(!root.path().join("makePrj4shp.marker").exists());
}

#[tokio::test]
async fn second_task_failure_propagates_without_pause() {
    let _serial = SERIAL.lock().await;
    let root = TempDir::new().unwrap();
    install_interpreter(root.path());
    install_tasks(root.path(), 0, 5);

    let (outcome, output) = launch(root.path(), b"\n").await;

    assert_eq!(outcome.exit_code(), 5);
    assert!(output.is_empty());
    assert!(root.path().join("dxf2shp.marker").exists());
    assert!(root.path().join("makePrj4shp.marker").exists());
}

#[tokio::test]
async fn success_prompts_then_exits_zero() {
    let _serial = SERIAL.lock().await;
    let root = TempDir::new().unwrap();
    install_interpreter(root.path());
    install_tasks(root.path(), 0, 0);

    let (outcome, output) = launch(root.path(), b"\n").await;

    assert_eq!(outcome, LaunchOutcome::Success);
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(String::from_utf8(output).unwrap(), "Press Enter to continue . . .");
    assert!(root.path().join("makePrj4shp.marker").exists());
}

#[tokio::test]
async fn repeated_runs_give_the_same_code() {
    let _serial = SERIAL.lock().await;
    let root = TempDir::new().unwrap();
    install_interpreter(root.path());
    install_tasks(root.path(), 3, 0);

    let (first, _) = launch(root.path(), b"").await;
    let (second, _) = launch(root.path(), b"").await;

    assert_eq!(first.exit_code(), 3);
    assert_eq!(first, second);
}

#[tokio::test]
async fn tasks_see_an_activated_venv() {
    let _serial = SERIAL.lock().await;
    let root = TempDir::new().unwrap();
    install_interpreter(root.path());
    write_file(
        &root.path().join("src").join("dxf2shp.py"),
        "printf '%s' \"$VIRTUAL_ENV\" > venv.txt\npwd -P > cwd.txt\n",
    );
    write_file(&root.path().join("src").join("makePrj4shp.py"), "exit 0\n");

    let (outcome, _) = launch(root.path(), b"\n").await;
    assert_eq!(outcome, LaunchOutcome::Success);

    let venv = std::fs::read_to_string(root.path().join("venv.txt")).unwrap();
    assert_eq!(Path::new(&venv), root.path().join("venv"));

    let cwd = std::fs::read_to_string(root.path().join("cwd.txt")).unwrap();
    assert_eq!(
        Path::new(cwd.trim()),
        root.path().canonicalize().unwrap()
    );
}

#[tokio::test]
async fn launcher_toml_overrides_layout() {
    let _serial = SERIAL.lock().await;
    let root = TempDir::new().unwrap();
    install_interpreter(root.path());
    write_file(
        &root.path().join("launcher.toml"),
        r#"
[[tasks]]
name = "makePrj4shp"
script = "src/makePrj4shp.py"
args = ["ConvertedDXF2SHP"]

[pause]
enabled = false
"#,
    );
    write_file(
        &root.path().join("src").join("makePrj4shp.py"),
        "printf '%s' \"$1\" > arg.txt\nexit 0\n",
    );

    let (outcome, output) = launch(root.path(), b"").await;

    assert_eq!(outcome, LaunchOutcome::Success);
    assert!(output.is_empty());
    let arg = std::fs::read_to_string(root.path().join("arg.txt")).unwrap();
    assert_eq!(arg, "ConvertedDXF2SHP");
}
