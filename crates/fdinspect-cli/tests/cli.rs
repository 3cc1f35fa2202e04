use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// `fdinspect` running inside `dir` with no ambient config.
fn fdinspect(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fdinspect").unwrap();
    cmd.current_dir(dir)
        .env_remove("FDINSPECT_PATH")
        .env_remove("FDINSPECT_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .arg("--no-color");
    cmd
}

fn workdir_with_readme(content: &[u8]) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), content).unwrap();
    dir
}

/// Byte offset just past the `n`th newline.
fn after_lines(out: &[u8], n: usize) -> usize {
    let mut offset = 0;
    for _ in 0..n {
        offset += out[offset..].iter().position(|&b| b == b'\n').unwrap() + 1;
    }
    offset
}

#[test]
fn hello_readme() {
    let dir = workdir_with_readme(b"hello\n");
    let output = fdinspect(dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    // program name, --no-color, open line, twelve fields, content
    assert_eq!(lines.len(), 2 + 1 + 12 + 1);
    assert!(lines[0].starts_with("0: "));
    assert_eq!(lines[1], "1: --no-color");
    assert!(lines[2].starts_with("open "));
    lines[2]["open ".len()..].parse::<i32>().unwrap();

    let labels = [
        "dev", "ino", "mode", "nlink", "uid", "gid", "size", "blksize", "blocks", "mtime",
        "atime", "ctime",
    ];
    for (line, label) in lines[3..15].iter().zip(labels) {
        let (name, value) = line.split_once(": ").unwrap();
        assert_eq!(name, label);
        value.parse::<i64>().unwrap();
    }
    assert_eq!(lines[9], "size: 6");
    assert_eq!(lines[15], "hello");
    assert!(stdout.ends_with("hello\n"));
}

#[test]
fn echoes_every_argument() {
    let dir = workdir_with_readme(b"");
    fdinspect(dir.path())
        .args(["alpha", "beta gamma", "--weird"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1: --no-color\n2: alpha\n3: beta gamma\n4: --weird\n",
        ));
}

#[test]
fn missing_readme_fails_with_open() {
    let dir = tempdir().unwrap();
    fdinspect(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("open"))
        .stdout(predicate::str::contains("open ").not());
}

#[test]
fn directory_target_fails_with_read() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("README.md")).unwrap();
    fdinspect(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read"));
}

#[test]
fn empty_file_streams_nothing() {
    let dir = workdir_with_readme(b"");
    let output = fdinspect(dir.path()).output().unwrap();
    assert!(output.status.success());
    // two argument lines, open line, twelve fields
    let offset = after_lines(&output.stdout, 15);
    assert_eq!(offset, output.stdout.len());
}

#[test]
fn content_is_byte_exact_across_chunks() {
    for len in [255usize, 256, 257, 512, 4099] {
        let data: Vec<u8> = (0..len).map(|i| (i * 7 % 256) as u8).collect();
        let dir = workdir_with_readme(&data);

        let output = fdinspect(dir.path()).output().unwrap();
        assert!(output.status.success(), "len {len}");
        let offset = after_lines(&output.stdout, 15);
        assert_eq!(&output.stdout[offset..], &data[..], "len {len}");
    }
}

#[test]
fn path_flag_selects_target() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), b"notes\n").unwrap();
    fdinspect(dir.path())
        .args(["--path", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("size: 6\n"))
        .stdout(predicate::str::ends_with("notes\n"));
}

#[test]
fn config_file_sets_defaults() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("other.md"), b"x").unwrap();
    fs::write(dir.path().join("fdinspect.toml"), "path = \"other.md\"\n").unwrap();
    fdinspect(dir.path())
        .args(["--config", "fdinspect.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("size: 1\n"));
}

#[test]
fn missing_config_file_fails() {
    let dir = workdir_with_readme(b"x");
    fdinspect(dir.path())
        .args(["--config", "absent.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config"));
}

#[test]
fn json_metadata() {
    let dir = workdir_with_readme(b"abc");
    fdinspect(dir.path())
        .args(["-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"size\": 3"))
        .stdout(predicate::str::ends_with("}\nabc"));
}

#[test]
fn escaped_content() {
    let dir = workdir_with_readme(b"a\tb\n\x00");
    fdinspect(dir.path())
        .arg("--escape")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("a\\tb\\n\\x00\n"));
}

#[test]
fn random_sample_from_custom_source() {
    let dir = workdir_with_readme(b"abc\n");
    fs::write(dir.path().join("rand.bin"), [0xffu8]).unwrap();
    fdinspect(dir.path())
        .args(["--random-source", "rand.bin"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("abc\nrand -1\n"));
}

#[test]
fn random_source_missing_fails_with_open_rand() {
    let dir = workdir_with_readme(b"abc\n");
    fdinspect(dir.path())
        .args(["--random-source", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("open rand"))
        .stdout(predicate::str::contains("abc\n"));
}

#[test]
fn random_source_empty_fails_with_read_rand() {
    let dir = workdir_with_readme(b"abc\n");
    fs::write(dir.path().join("empty"), b"").unwrap();
    fdinspect(dir.path())
        .args(["--random-source", "empty"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read rand"));
}

#[test]
fn logs_go_to_stderr() {
    let dir = workdir_with_readme(b"abc");
    let output = fdinspect(dir.path()).arg("-vv").output().unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("fstat"));
    assert!(output.stdout.ends_with(b"abc"));
}
