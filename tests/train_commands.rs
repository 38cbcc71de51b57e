use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

mod common;
use common::command::{run_tokdiff_command, workspace_dir};
use common::file::{FileSpec, write_file};

#[rstest]
fn training_writes_a_vocabulary_with_merges(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("corpus.txt"),
        "low lowest newer wider lower".to_string(),
    ));

    run_tokdiff_command(
        workspace_dir.path(),
        &["train", "corpus.txt", "--vocab-size", "16", "--output", "bpe.vocab"],
    )
    .assert()
    .success()
    .stdout(predicate::str::starts_with("Trained vocabulary with"));

    let saved = std::fs::read_to_string(workspace_dir.path().join("bpe.vocab"))?;
    assert!(saved.contains("<unk>\t0"));
    assert!(saved.contains("# Merges"));

    Ok(())
}

#[rstest]
fn trained_vocabulary_feeds_the_bpe_diff(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("corpus.txt"),
        "lower lowest newer newest wider widest".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("old.txt"),
        "lower newer".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        "lower wider".to_string(),
    ));

    run_tokdiff_command(
        workspace_dir.path(),
        &["train", "corpus.txt", "--vocab-size", "24", "--output", "bpe.vocab"],
    )
    .assert()
    .success();

    run_tokdiff_command(
        workspace_dir.path(),
        &[
            "diff",
            "--tokenizer",
            "bpe",
            "--vocab",
            "bpe.vocab",
            "--format",
            "unified",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::starts_with("Levenshtein distance: "));

    Ok(())
}

#[rstest]
fn training_without_corpus_files_fails(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tokdiff_command(workspace_dir.path(), &["train"])
        .assert()
        .failure();

    Ok(())
}

#[rstest]
fn training_with_a_missing_corpus_file_fails(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tokdiff_command(workspace_dir.path(), &["train", "absent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read corpus file"));

    Ok(())
}
