use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

mod common;
use common::command::{run_tokdiff_command, workspace_dir};
use common::file::{FileSpec, write_file, write_generated_file};

#[rstest]
fn word_tokenizer_dumps_ids_and_token_texts(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("input.txt"),
        "hello world".to_string(),
    ));

    run_tokdiff_command(workspace_dir.path(), &["tokenize", "input.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hello\""))
        .stdout(predicate::str::contains("\" \""))
        .stdout(predicate::str::contains("\"world\""))
        .stdout(predicate::str::contains("3 tokens"));

    Ok(())
}

#[rstest]
fn whitespace_tokenizer_drops_the_separators(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("input.txt"),
        "hello  world\ttest".to_string(),
    ));

    run_tokdiff_command(
        workspace_dir.path(),
        &["tokenize", "input.txt", "--tokenizer", "whitespace"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("3 tokens"));

    Ok(())
}

#[rstest]
fn generated_text_round_trips_through_the_dump(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_spec = write_generated_file(workspace_dir.path(), "generated.txt");

    let assert = run_tokdiff_command(
        workspace_dir.path(),
        &["tokenize", "generated.txt", "--tokenizer", "character"],
    )
    .assert()
    .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let expected_count = file_spec.content.chars().count();
    assert!(stdout.ends_with(&format!("{expected_count} tokens\n")));

    Ok(())
}

#[rstest]
fn saved_vocabulary_reloads_for_a_second_run(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("input.txt"),
        "alpha beta alpha".to_string(),
    ));

    run_tokdiff_command(
        workspace_dir.path(),
        &[
            "tokenize",
            "input.txt",
            "--tokenizer",
            "whitespace",
            "--save-vocab",
            "words.vocab",
        ],
    )
    .assert()
    .success();

    // Reloading must reproduce the same id assignment
    let first = run_tokdiff_command(
        workspace_dir.path(),
        &["tokenize", "input.txt", "--tokenizer", "whitespace"],
    )
    .assert()
    .success();
    let second = run_tokdiff_command(
        workspace_dir.path(),
        &[
            "tokenize",
            "input.txt",
            "--tokenizer",
            "whitespace",
            "--vocab",
            "words.vocab",
        ],
    )
    .assert()
    .success();

    pretty_assertions::assert_eq!(
        String::from_utf8(first.get_output().stdout.clone())?,
        String::from_utf8(second.get_output().stdout.clone())?,
    );

    Ok(())
}

#[rstest]
fn missing_input_file_fails(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_tokdiff_command(workspace_dir.path(), &["tokenize", "absent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read source file"));

    Ok(())
}
