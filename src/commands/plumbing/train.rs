//! The train command
//!
//! Learns a BPE vocabulary from one or more corpus files and writes it,
//! merge rules included, to a vocabulary file that `diff --vocab` and
//! `tokenize --vocab` can load back.

use crate::areas::workspace::Workspace;
use crate::artifacts::tokenizer::ParserMode;
use crate::artifacts::tokenizer::Tokenizer;
use crate::artifacts::tokenizer::bpe::BpeTokenizer;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct TrainOptions {
    pub parser_mode: ParserMode,
    pub vocab_size: usize,
    pub min_frequency: usize,
    pub output: PathBuf,
}

pub fn train(
    workspace: &Workspace,
    writer: &mut dyn Write,
    corpus_files: &[PathBuf],
    opts: &TrainOptions,
) -> anyhow::Result<()> {
    if corpus_files.is_empty() {
        anyhow::bail!("no corpus files given");
    }

    let corpus = corpus_files
        .iter()
        .map(|file| workspace.read_corpus(Path::new(file)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut tokenizer = BpeTokenizer::new(opts.parser_mode);
    tokenizer.train(&corpus, opts.vocab_size, opts.min_frequency);
    tokenizer.save_vocabulary(&opts.output)?;

    writeln!(
        writer,
        "Trained vocabulary with {} tokens and {} merges, written to {}",
        tokenizer.vocabulary().len(),
        tokenizer.merges().len(),
        opts.output.display(),
    )?;

    Ok(())
}
