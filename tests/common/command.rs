use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    let mut s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..10 {
        println!("{}: {}", i, s);
    }

    println!("Done");
}"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    let mut s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    println!("All lines printed");
}"#
    .to_string()
}

#[fixture]
pub fn comparison_dir(workspace_dir: TempDir, file_a: String, file_b: String) -> TempDir {
    write_file(FileSpec::new(workspace_dir.path().join("old.txt"), file_a));
    write_file(FileSpec::new(workspace_dir.path().join("new.txt"), file_b));

    workspace_dir
}

pub fn run_tokdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("tokdiff").expect("Failed to find tokdiff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
