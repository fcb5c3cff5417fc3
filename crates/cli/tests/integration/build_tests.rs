//! Interactive build runs end to end.

use predicates::prelude::*;
use serial_test::serial;

use crate::common::{FAILING_GO, RECORDING_GO, TestEnv};

const REJECTION: &str = "Invalid choice. Please enter 1 or 2.";
const DEPLOY_HINT: &str = "scp build/ip_viber erwin@10.8.0.3:/home/erwin/";

#[test]
#[serial]
fn pi3_build_succeeds_and_prints_deploy_hint() {
  let env = TestEnv::with_go(RECORDING_GO);

  env
    .pibuild()
    .write_stdin("1\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Starting cross-compilation for Raspberry Pi..."))
    .stdout(predicate::str::contains("Configuring for Raspberry Pi 3 (arm64)..."))
    .stdout(predicate::str::contains("Build successful!"))
    .stdout(predicate::str::contains("Binary location: build/ip_viber"))
    .stdout(predicate::str::contains(DEPLOY_HINT))
    .stdout(predicate::str::contains(REJECTION).not());

  assert!(env.project_dir().join("build").join("ip_viber").exists());
  assert_eq!(
    env.read("go-env.txt"),
    "GOOS=linux\nGOARCH=arm64\nGOARM=unset\nCGO_ENABLED=0\n"
  );
  assert_eq!(
    env.read("go-args.txt"),
    "build\n-o\nbuild/ip_viber\n-ldflags\n-s -w\nmain.go\n"
  );
}

#[test]
#[serial]
fn explicit_build_subcommand_is_the_default() {
  let env = TestEnv::with_go(RECORDING_GO);

  env
    .pibuild()
    .arg("build")
    .write_stdin("2\n")
    .assert()
    .success()
    .stdout(predicate::str::contains(DEPLOY_HINT));

  assert_eq!(
    env.read("go-env.txt"),
    "GOOS=linux\nGOARCH=arm\nGOARM=7\nCGO_ENABLED=0\n"
  );
}

#[test]
#[serial]
fn inherited_goarm_does_not_reach_arm64_build() {
  let env = TestEnv::with_go(RECORDING_GO);

  env.pibuild().env("GOARM", "6").write_stdin("1\n").assert().success();

  assert!(env.read("go-env.txt").contains("GOARM=unset"));
}

#[test]
#[serial]
fn rejected_choice_then_pi4_then_build_failure() {
  let env = TestEnv::with_go(FAILING_GO);

  let assert = env.pibuild().write_stdin("99\n2\n").assert().failure();
  let output = assert.get_output();
  let stdout = String::from_utf8_lossy(&output.stdout);
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(stdout.matches(REJECTION).count(), 1);
  assert!(stdout.contains("Configuring for Raspberry Pi 4 (armv7)..."));
  assert!(!stdout.contains("Build successful!"));
  assert!(stderr.contains("main.go:12:2: undefined: tracker"));
  assert!(stderr.contains("Build failed with error:"));
  assert!(stderr.contains("returned non-zero exit status 2"));
  assert_eq!(
    env.read("go-env.txt"),
    "GOOS=linux\nGOARCH=arm\nGOARM=7\nCGO_ENABLED=0\n"
  );
}

#[test]
#[serial]
fn many_rejections_before_a_valid_choice() {
  let env = TestEnv::with_go(RECORDING_GO);

  let assert = env.pibuild().write_stdin("3\nPi3\n \n1\n").assert().success();
  let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

  assert_eq!(stdout.matches(REJECTION).count(), 3);
  assert_eq!(stdout.matches("Select Raspberry Pi version:").count(), 4);
}

#[test]
#[serial]
fn missing_go_fails_without_building() {
  let env = TestEnv::empty();

  env
    .pibuild()
    .write_stdin("1\n")
    .assert()
    .failure()
    .stdout(predicate::str::contains("Configuring for").not())
    .stderr(predicate::str::contains("Error: Missing required tools:"))
    .stderr(predicate::str::contains("  - go"))
    .stderr(predicate::str::contains("sudo apt-get install gcc-arm-linux-gnueabihf"));

  assert!(!env.project_dir().join("build").join("ip_viber").exists());
  assert!(!env.project_dir().join("go-args.txt").exists());
}

#[test]
#[serial]
fn existing_build_dir_is_reused() {
  let env = TestEnv::with_go(RECORDING_GO);
  let build_dir = env.project_dir().join("build");
  std::fs::create_dir(&build_dir).unwrap();
  std::fs::write(build_dir.join("README"), "artifacts").unwrap();

  env.pibuild().write_stdin("2\n").assert().success();

  assert_eq!(std::fs::read_to_string(build_dir.join("README")).unwrap(), "artifacts");
  assert!(build_dir.join("ip_viber").exists());
}

#[test]
#[serial]
fn dry_run_prints_command_without_running_it() {
  let env = TestEnv::with_go(RECORDING_GO);

  env
    .pibuild()
    .args(["build", "--dry-run"])
    .write_stdin("1\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Dry run"))
    .stdout(predicate::str::contains("-ldflags \"-s -w\" main.go"))
    .stdout(predicate::str::contains("GOARCH: arm64"))
    .stdout(predicate::str::contains("GOARM: (unset)"));

  assert!(!env.project_dir().join("build").exists());
  assert!(!env.project_dir().join("go-args.txt").exists());
}

#[test]
#[serial]
fn config_file_changes_output_and_deploy_hint() {
  let env = TestEnv::with_go(RECORDING_GO);
  std::fs::write(
    env.project_dir().join("pibuild.toml"),
    r#"
[build]
output_dir = "dist"
binary = "viber"

[deploy]
user = "pi"
host = "raspberrypi.local"
path = "/opt/viber/"
"#,
  )
  .unwrap();

  env
    .pibuild()
    .write_stdin("1\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Binary location: dist/viber"))
    .stdout(predicate::str::contains("scp dist/viber pi@raspberrypi.local:/opt/viber/"));

  assert!(env.project_dir().join("dist").join("viber").exists());
}
