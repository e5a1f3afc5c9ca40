use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "find-image-dups")]
#[command(about = "A CLI tool to find and quarantine duplicate images in a directory")]
pub struct Cli {
    /// Directory to search for duplicate images
    pub input_dir: PathBuf,

    /// Use the quick comparison method (average hash); this is the default
    #[arg(long)]
    pub quick: bool,

    /// Use the accurate comparison method (DCT perceptual hash); wins over --quick
    #[arg(long)]
    pub accurate: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
