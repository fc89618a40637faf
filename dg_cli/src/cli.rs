use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream a deck outline for a topic
    Outline {
        #[arg()]
        topic: String,
        #[arg(short, long, default_value = "English")]
        language: String,
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Generate slide content from an outline, one JSON slide per line
    Slides {
        #[arg()]
        outline: String,
        #[arg(short, long, default_value = "English")]
        language: String,
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Rewrite content under an instruction
    Rewrite {
        #[arg()]
        content: String,
        #[arg(short, long)]
        command: String,
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Check that the server is up
    Health,
}
