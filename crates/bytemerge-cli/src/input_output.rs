use std::{
    fs::File,
    io::{BufWriter, Read, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Corpus argument group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Corpus files, concatenated as raw bytes; "-" may be used to indicate stdin.
    #[arg(required = true)]
    pub files: Vec<String>,
}

impl CorpusArgs {
    /// Read every corpus file, in order, into one buffer.
    pub fn read_corpus(&self) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let mut corpus = Vec::new();
        for (idx, path) in self.files.iter().enumerate() {
            let before = corpus.len();
            if path == "-" {
                std::io::stdin().lock().read_to_end(&mut corpus)?;
            } else {
                File::open(path)?.read_to_end(&mut corpus)?;
            }
            log::info!("{idx}: {path} ({} bytes)", corpus.len() - before);
        }
        Ok(corpus)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
