use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "comp-img",
    about = "Recompress JPEG files and folders at a chosen quality",
    long_about = "comp-img asks for files or directories, a confirmation and a quality factor, then \
                  re-encodes every JPEG it finds. A directory is written to a sibling \
                  '<name>_compress' directory, a single file to '<name>_compress.jpg'. \
                  Before/after counts and sizes are reported for every selected item.",
    version,
    after_help = "EXAMPLES:\n  \
    comp-img\n  \
    comp-img --verbose\n  \
    comp-img --frontend dialog"
)]
pub struct Args {
    #[arg(
        short = 'v',
        long,
        conflicts_with = "quiet",
        help = "Log every file and size at debug level"
    )]
    pub verbose: bool,

    #[arg(short = 'q', long, help = "Only log warnings and errors")]
    pub quiet: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value_t = Frontend::Console,
        help = "How selections, confirmations and results are exchanged",
        long_help = "console: prompts on stdin/stdout. \
                     dialog: native file picker and message boxes (requires the \
                     'native-dialogs' build feature)."
    )]
    pub frontend: Frontend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Frontend {
    Console,
    Dialog,
}
