use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};
use tokdiff::areas::session::DiffSession;
use tokdiff::areas::workspace::Workspace;
use tokdiff::artifacts::core::PagerWriter;
use tokdiff::artifacts::tokenizer::{ParserMode, Tokenizer, TokenizerMode, create_tokenizer};
use tokdiff::commands::plumbing::tokenize::{TokenizeOptions, tokenize};
use tokdiff::commands::plumbing::train::{TrainOptions, train};
use tokdiff::commands::porcelain::diff::{DiffReportOptions, ReportSelection};

const DEFAULT_OLD_FILE: &str = "old.txt";
const DEFAULT_NEW_FILE: &str = "new.txt";

#[derive(Parser)]
#[command(
    name = "tokdiff",
    version = "0.1.0",
    about = "A token-level text comparison tool",
    long_about = "This tool compares two texts token by token using Myers' \
    shortest edit script algorithm and renders the differences in the three \
    classic diff formats. The tokenizer variant decides what counts as a \
    token: words, characters, whitespace-separated chunks, or BPE subwords.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Compare two files and print the differences",
        long_about = "This command compares two files and reports whether they are \
        identical, the token-level Levenshtein distance, and the rendered diffs. \
        Without file arguments it compares old.txt against new.txt."
    )]
    Diff {
        #[arg(index = 1, help = "The original file")]
        old: Option<String>,
        #[arg(index = 2, help = "The changed file")]
        new: Option<String>,
        #[arg(short, long, value_enum, default_value = "word", help = "The tokenizer variant")]
        tokenizer: TokenizerMode,
        #[arg(short, long, value_enum, default_value = "utf8", help = "How raw input is split")]
        parser: ParserMode,
        #[arg(short, long, value_enum, default_value = "all", help = "The report format")]
        format: ReportSelection,
        #[arg(short, long, default_value_t = 3, help = "Context tokens around each change")]
        context: usize,
        #[arg(long, help = "Vocabulary file to load before encoding")]
        vocab: Option<PathBuf>,
        #[arg(long, help = "Print directly to stdout instead of paging")]
        no_pager: bool,
    },
    #[command(
        name = "tokenize",
        about = "Dump the token sequence of a file",
        long_about = "This command encodes one file with the selected tokenizer and \
        prints one id and token text per line, followed by a count summary."
    )]
    Tokenize {
        #[arg(index = 1, help = "The file to tokenize")]
        file: String,
        #[arg(short, long, value_enum, default_value = "word", help = "The tokenizer variant")]
        tokenizer: TokenizerMode,
        #[arg(short, long, value_enum, default_value = "utf8", help = "How raw input is split")]
        parser: ParserMode,
        #[arg(long, help = "Vocabulary file to load before encoding")]
        vocab: Option<PathBuf>,
        #[arg(long, help = "Write the vocabulary after encoding")]
        save_vocab: Option<PathBuf>,
    },
    #[command(
        name = "train",
        about = "Train a BPE vocabulary from corpus files",
        long_about = "This command learns byte-pair merge rules from the given corpus \
        files and writes the resulting vocabulary, merges included, to a file."
    )]
    Train {
        #[arg(required = true, help = "The corpus files to learn from")]
        corpus: Vec<PathBuf>,
        #[arg(short, long, default_value_t = 1000, help = "Target vocabulary size")]
        vocab_size: usize,
        #[arg(short, long, default_value_t = 2, help = "Minimum pair frequency to merge")]
        min_frequency: usize,
        #[arg(short, long, default_value = "bpe.vocab", help = "The output vocabulary file")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;
    let workspace = Workspace::new(pwd.into_boxed_path());

    match &cli.command {
        Commands::Diff {
            old,
            new,
            tokenizer,
            parser,
            format,
            context,
            vocab,
            no_pager,
        } => {
            let old = old.as_deref().unwrap_or(DEFAULT_OLD_FILE);
            let new = new.as_deref().unwrap_or(DEFAULT_NEW_FILE);

            let from_text = workspace.read_source(Path::new(old))?;
            let to_text = workspace.read_source(Path::new(new))?;

            let mut tokenizer = create_tokenizer(*tokenizer, *parser);
            if let Some(vocab) = vocab {
                tokenizer.load_vocabulary(vocab)?;
            }

            let opts = DiffReportOptions {
                selection: *format,
                context_size: *context,
            };

            let use_pager = !*no_pager
                && std::env::var_os("NO_PAGER").is_none()
                && std::io::stdout().is_terminal();

            if use_pager {
                let pager = minus::Pager::new();
                let writer = Box::new(PagerWriter::new(pager.clone()));
                let session = DiffSession::new(tokenizer, &from_text, &to_text, writer);
                session.report(&opts)?;
                minus::page_all(pager)?;
            } else {
                let session = DiffSession::new(
                    tokenizer,
                    &from_text,
                    &to_text,
                    Box::new(std::io::stdout()),
                );
                session.report(&opts)?;
            }
        }
        Commands::Tokenize {
            file,
            tokenizer,
            parser,
            vocab,
            save_vocab,
        } => {
            let opts = TokenizeOptions {
                tokenizer_mode: *tokenizer,
                parser_mode: *parser,
                vocabulary: vocab.clone(),
                save_vocabulary: save_vocab.clone(),
            };

            tokenize(&workspace, &mut std::io::stdout(), Path::new(file), &opts)?;
        }
        Commands::Train {
            corpus,
            vocab_size,
            min_frequency,
            output,
        } => {
            let opts = TrainOptions {
                parser_mode: ParserMode::default(),
                vocab_size: *vocab_size,
                min_frequency: *min_frequency,
                output: output.clone(),
            };

            train(&workspace, &mut std::io::stdout(), corpus, &opts)?;
        }
    }

    Ok(())
}
