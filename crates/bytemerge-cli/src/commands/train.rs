use std::io::Write;

use bytemerge::{BytePairTrainerOptions, MergeStrategy, TokenType, TrainResults};

use crate::{
    LogArgs,
    input_output::{CorpusArgs, OutputArgs},
};

/// Merge loop implementations for the train command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Incremental pair index with a max-heap.
    Heap,

    /// Recount every pair each round.
    Rescan,
}

impl From<StrategyArg> for MergeStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Heap => MergeStrategy::Heap,
            StrategyArg::Rescan => MergeStrategy::Rescan,
        }
    }
}

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Target vocab size, special tokens included.
    #[arg(long, default_value = "512")]
    vocab_size: usize,

    /// Special token; may be repeated. Ids follow flag order.
    #[arg(long = "special")]
    special_tokens: Vec<String>,

    /// Merge loop implementation.
    #[arg(long, value_enum, default_value = "heap")]
    strategy: StrategyArg,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        log::info!("Reading corpus:");
        let corpus = self.corpus.read_corpus()?;

        let trainer = BytePairTrainerOptions::new(self.vocab_size)
            .with_special_tokens(&self.special_tokens)
            .with_strategy(self.strategy.into())
            .init::<u32>()?;

        log::info!("Training Vocabulary...");
        let results = trainer.train(&corpus)?;

        if results.is_underfilled() {
            log::warn!(
                "Corpus exhausted after {} of {} merges; vocab size {} < {}",
                results.merges.len(),
                results.planned_merges,
                results.vocab_size(),
                results.requested_size
            );
        }

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_listing(&results, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Write a human-readable listing of the vocabulary and merges.
///
/// Spans are printed with non-printable bytes escaped.
pub fn write_listing<T: TokenType, W: Write>(
    results: &TrainResults<T>,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "# vocab: {} tokens (requested {}, seeded {}, merges {}/{})",
        results.vocab_size(),
        results.requested_size,
        results.seeded_size,
        results.merges.len(),
        results.planned_merges
    )?;
    for (token, span) in results.vocab.sorted_entries() {
        writeln!(writer, "{token}\t{}", span.escape_ascii())?;
    }

    writeln!(writer, "# merges: {}", results.merges.len())?;
    for merge in &results.merges {
        writeln!(writer, "{merge}")?;
    }

    Ok(())
}
