//! The tokenize command
//!
//! Dumps the token id sequence of one source file, one `id<TAB>text` line
//! per token, followed by a count summary. Useful for inspecting how a
//! tokenizer variant cuts the input before diffing it.

use crate::areas::workspace::Workspace;
use crate::artifacts::tokenizer::{ParserMode, Tokenizer, TokenizerMode, create_tokenizer};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct TokenizeOptions {
    pub tokenizer_mode: TokenizerMode,
    pub parser_mode: ParserMode,
    pub vocabulary: Option<PathBuf>,
    pub save_vocabulary: Option<PathBuf>,
}

pub fn tokenize(
    workspace: &Workspace,
    writer: &mut dyn Write,
    file: &Path,
    opts: &TokenizeOptions,
) -> anyhow::Result<()> {
    let text = workspace.read_source(file)?;

    let mut tokenizer = create_tokenizer(opts.tokenizer_mode, opts.parser_mode);
    if let Some(vocabulary) = &opts.vocabulary {
        tokenizer.load_vocabulary(vocabulary)?;
    }

    let tokens = tokenizer.encode(&text);
    for &id in &tokens {
        writeln!(writer, "{id}\t{:?}", tokenizer.decode(&[id]))?;
    }
    writeln!(writer, "{} tokens", tokens.len())?;

    if let Some(path) = &opts.save_vocabulary {
        tokenizer.save_vocabulary(path)?;
    }

    Ok(())
}
