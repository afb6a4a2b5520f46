pub mod batch;
pub mod cli;
pub mod color;
pub mod constants;
#[cfg(feature = "native-dialogs")]
pub mod dialog;
pub mod error;
pub mod logger;
pub mod processing;
pub mod prompt;
pub mod report;
pub mod size;
pub mod utils;
pub mod validation;

pub use batch::{
    classify, directory_output_path, file_output_path, BatchResult, BatchRunner, ItemKind,
    ItemOutcome, ItemReport, JobOutcome, RunSummary, SelectionItem,
};
pub use color::strip_alpha;
pub use error::{CompressionError, Result};
pub use processing::{recompress, CompressionJob};
pub use prompt::{ConsolePrompter, Prompter};
pub use size::{entry_count, human_readable, total_size};
pub use validation::{validate_quality, QualityInput, QualityWarning};
