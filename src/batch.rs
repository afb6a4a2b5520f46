use crate::constants::{CONFIRM_PROMPT, OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::error::{CompressionError, Result};
use crate::processing::CompressionJob;
use crate::prompt::Prompter;
use crate::report::render_plan;
use crate::size::{entry_count, total_size};
use crate::utils::create_progress_bar;
use crate::validation::validate_quality;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    File,
    Directory,
}

/// A path picked at the selection boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionItem {
    pub path: PathBuf,
    pub kind: ItemKind,
}

impl SelectionItem {
    pub fn new(path: PathBuf, kind: ItemKind) -> Self {
        Self { path, kind }
    }

    /// Tags the path by looking at the filesystem; anything that is not a
    /// directory (including a missing path) is tagged as a file.
    pub fn from_path(path: PathBuf) -> Self {
        let kind = if path.is_dir() {
            ItemKind::Directory
        } else {
            ItemKind::File
        };
        Self { path, kind }
    }
}

/// Before/after accounting for one selected item.
///
/// `output_dir` is the output directory for a directory selection and the
/// output file for a single-file selection.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub output_dir: PathBuf,
    pub input_count: usize,
    pub output_count: usize,
    pub quality: f32,
    pub input_bytes: u64,
    pub output_bytes: u64,
}

impl BatchResult {
    /// Measures whatever is actually on disk, so failed jobs simply don't count.
    pub fn measure(input: &Path, output: &Path, quality: f32) -> Self {
        Self {
            output_dir: output.to_path_buf(),
            input_count: entry_count(input),
            output_count: entry_count(output),
            quality,
            input_bytes: total_size(input),
            output_bytes: total_size(output),
        }
    }
}

#[derive(Debug)]
pub struct JobOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Bytes written on success.
    pub result: Result<u64>,
}

impl JobOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// A completed item: the aggregate plus what happened to every job in it.
#[derive(Debug)]
pub struct ItemReport {
    pub item: SelectionItem,
    pub result: BatchResult,
    pub jobs: Vec<JobOutcome>,
}

impl ItemReport {
    pub fn all_succeeded(&self) -> bool {
        self.jobs.iter().all(JobOutcome::is_success)
    }

    pub fn failed_jobs(&self) -> impl Iterator<Item = &JobOutcome> {
        self.jobs.iter().filter(|job| !job.is_success())
    }
}

#[derive(Debug)]
pub enum ItemOutcome {
    Completed(ItemReport),
    Skipped {
        item: SelectionItem,
        error: CompressionError,
    },
    /// Confirmation was refused; nothing after this item runs.
    Declined(SelectionItem),
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub items: Vec<ItemOutcome>,
    pub aborted: bool,
}

impl RunSummary {
    pub fn completed(&self) -> impl Iterator<Item = &ItemReport> {
        self.items.iter().filter_map(|outcome| match outcome {
            ItemOutcome::Completed(report) => Some(report),
            _ => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &CompressionError> {
        self.items.iter().filter_map(|outcome| match outcome {
            ItemOutcome::Skipped { error, .. } => Some(error),
            _ => None,
        })
    }

    fn absorb(&mut self, other: RunSummary) {
        self.items.extend(other.items);
        self.aborted |= other.aborted;
    }
}

/// Where an item's input is and where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPlan {
    pub kind: ItemKind,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Inspect the filesystem for a selected item.
///
/// # Returns
/// * `Err(PathNotFound)` - The path does not exist
/// * `Err(EmptyDirectory)` - The directory has no entries at all
pub fn classify(item: &SelectionItem) -> Result<ItemKind> {
    let path = &item.path;
    if !path.exists() {
        return Err(CompressionError::PathNotFound(path.clone()));
    }

    if path.is_dir() {
        if entry_count(path) == 0 {
            return Err(CompressionError::EmptyDirectory(path.clone()));
        }
        Ok(ItemKind::Directory)
    } else {
        Ok(ItemKind::File)
    }
}

/// `<dir>_compress`, next to the input directory.
pub fn directory_output_path(dir: &Path) -> Result<PathBuf> {
    let name = dir
        .file_name()
        .ok_or_else(|| CompressionError::InvalidPath(dir.to_path_buf()))?;

    let mut output_name = name.to_os_string();
    output_name.push(OUTPUT_SUFFIX);
    Ok(dir.with_file_name(output_name))
}

/// `<parent>/<stem>_compress.jpg`, next to the input file.
pub fn file_output_path(file: &Path) -> Result<PathBuf> {
    let stem = file
        .file_stem()
        .ok_or_else(|| CompressionError::InvalidPath(file.to_path_buf()))?;

    let mut output_name = OsString::from(stem);
    output_name.push(OUTPUT_SUFFIX);
    output_name.push(".");
    output_name.push(OUTPUT_EXTENSION);
    Ok(file.with_file_name(output_name))
}

/// Classify an item and derive its output location.
pub fn plan_item(item: &SelectionItem) -> Result<ItemPlan> {
    let kind = classify(item)?;

    // "." and ".." have no final component to derive a sibling from
    let input = if item.path.file_name().is_some() {
        item.path.clone()
    } else {
        item.path.canonicalize()?
    };

    let output = match kind {
        ItemKind::Directory => directory_output_path(&input)?,
        ItemKind::File => file_output_path(&input)?,
    };

    Ok(ItemPlan {
        kind,
        input,
        output,
    })
}

/// Drives selections through confirmation, recompression and reporting.
///
/// One item is processed completely before the next; every job runs on the
/// calling thread.
pub struct BatchRunner<P> {
    prompter: P,
}

impl<P: Prompter> BatchRunner<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Keep asking for selections until one comes back empty or a
    /// confirmation is declined.
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        loop {
            let items = self.prompter.select_paths()?;
            if items.is_empty() {
                info!("Selection cancelled");
                break;
            }

            summary.absorb(self.process_selection(&items)?);
            if summary.aborted {
                info!("Run aborted by user");
                break;
            }
        }

        Ok(summary)
    }

    pub fn process_selection(&mut self, items: &[SelectionItem]) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for item in items {
            let outcome = self.process_item(item)?;
            let declined = matches!(outcome, ItemOutcome::Declined(_));
            summary.items.push(outcome);

            if declined {
                summary.aborted = true;
                break;
            }
        }

        Ok(summary)
    }

    /// Only interaction failures are returned as `Err`; everything else is
    /// folded into the outcome.
    pub fn process_item(&mut self, item: &SelectionItem) -> Result<ItemOutcome> {
        match item.kind {
            ItemKind::Directory => info!("[directory] {}", item.path.display()),
            ItemKind::File => info!("[file] {}", item.path.display()),
        }

        let plan = match plan_item(item) {
            Ok(plan) => plan,
            Err(e) => return self.skip(item, e),
        };

        self.prompter.message(&render_plan(&plan.input, &plan.output))?;
        if !self.prompter.confirm(CONFIRM_PROMPT)? {
            return Ok(ItemOutcome::Declined(item.clone()));
        }

        let raw_quality = self.prompter.input_quality()?;
        let quality_input = validate_quality(raw_quality.as_deref());
        if let Some(warning) = &quality_input.warning {
            warn!("{}", warning);
            self.prompter.message(&warning.to_string())?;
        }
        let quality = quality_input.quality;

        let jobs = match plan.kind {
            ItemKind::Directory => match run_directory(&plan, quality) {
                Ok(jobs) => jobs,
                Err(e) => return self.skip(item, e),
            },
            ItemKind::File => vec![run_job(CompressionJob::new(
                plan.input.clone(),
                plan.output.clone(),
                quality,
            ))],
        };

        let result = BatchResult::measure(&plan.input, &plan.output, quality);
        let report = ItemReport {
            item: item.clone(),
            result,
            jobs,
        };

        let failed = report.failed_jobs().count();
        if failed > 0 {
            warn!(
                "{} of {} jobs failed for {}",
                failed,
                report.jobs.len(),
                plan.input.display()
            );
        }

        self.prompter.report(&report.result)?;
        Ok(ItemOutcome::Completed(report))
    }

    fn skip(&mut self, item: &SelectionItem, error: CompressionError) -> Result<ItemOutcome> {
        if matches!(error, CompressionError::Interaction(_)) {
            return Err(error);
        }

        warn!("Skipping {}: {}", item.path.display(), error);
        self.prompter.message(&error.to_string())?;
        Ok(ItemOutcome::Skipped {
            item: item.clone(),
            error,
        })
    }
}

/// Recompress every direct child of `plan.input` into `plan.output`.
///
/// Children are visited in file-name order. Entries that are not JPEG files
/// are still submitted so their rejection is recorded.
pub fn run_directory(plan: &ItemPlan, quality: f32) -> Result<Vec<JobOutcome>> {
    fs::create_dir_all(&plan.output)
        .map_err(|_| CompressionError::DirectoryCreationFailed(plan.output.clone()))?;

    let entries: Vec<_> = WalkDir::new(&plan.input)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .collect();

    let progress = create_progress_bar(entries.len() as u64);
    let mut outcomes = Vec::with_capacity(entries.len());

    for entry in entries {
        let outcome = match entry {
            Ok(entry) => {
                progress.set_message(entry.file_name().to_string_lossy().into_owned());
                let output = plan.output.join(entry.file_name());
                run_job(CompressionJob::new(entry.into_path(), output, quality))
            }
            Err(e) => {
                let input = e.path().unwrap_or(plan.input.as_path()).to_path_buf();
                warn!("Cannot read {}: {}", input.display(), e);
                JobOutcome {
                    input,
                    output: plan.output.clone(),
                    result: Err(CompressionError::Io(e.into())),
                }
            }
        };
        outcomes.push(outcome);
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(outcomes)
}

fn run_job(job: CompressionJob) -> JobOutcome {
    let input = job.input_path.clone();
    let output = job.output_path.clone();
    let result = job.run();

    if let Err(e) = &result {
        warn!("Failed to compress {}: {}", input.display(), e);
    }

    JobOutcome {
        input,
        output,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_directory_output_path() {
        assert_eq!(
            directory_output_path(Path::new("/photos/trip")).unwrap(),
            PathBuf::from("/photos/trip_compress")
        );
        assert_eq!(
            directory_output_path(Path::new("/photos/trip/")).unwrap(),
            PathBuf::from("/photos/trip_compress")
        );
        assert!(matches!(
            directory_output_path(Path::new("/")),
            Err(CompressionError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_file_output_path() {
        assert_eq!(
            file_output_path(Path::new("/photos/beach.JPG")).unwrap(),
            PathBuf::from("/photos/beach_compress.jpg")
        );
        assert_eq!(
            file_output_path(Path::new("/photos/my.holiday.jpeg")).unwrap(),
            PathBuf::from("/photos/my.holiday_compress.jpg")
        );
        assert_eq!(
            file_output_path(Path::new("/photos/notes.txt")).unwrap(),
            PathBuf::from("/photos/notes_compress.jpg")
        );
    }

    #[test]
    fn test_selection_item_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.jpg");
        File::create(&file).unwrap();

        assert_eq!(
            SelectionItem::from_path(temp_dir.path().to_path_buf()).kind,
            ItemKind::Directory
        );
        assert_eq!(SelectionItem::from_path(file).kind, ItemKind::File);
    }

    #[test]
    fn test_classify_missing_and_empty() {
        let temp_dir = TempDir::new().unwrap();

        let missing = SelectionItem::new(temp_dir.path().join("gone"), ItemKind::File);
        assert!(matches!(
            classify(&missing),
            Err(CompressionError::PathNotFound(_))
        ));

        let empty = SelectionItem::from_path(temp_dir.path().to_path_buf());
        assert!(matches!(
            classify(&empty),
            Err(CompressionError::EmptyDirectory(_))
        ));
    }

    #[test]
    fn test_classify_uses_filesystem_kind() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("a.jpg")).unwrap();

        // tagged as a file by the boundary, but it is a directory on disk
        let item = SelectionItem::new(temp_dir.path().to_path_buf(), ItemKind::File);
        assert_eq!(classify(&item).unwrap(), ItemKind::Directory);
    }

    #[test]
    fn test_plan_item_paths() {
        let temp_dir = TempDir::new().unwrap();
        let album = temp_dir.path().join("album");
        fs::create_dir(&album).unwrap();
        let photo = album.join("cat.jpg");
        File::create(&photo).unwrap();

        let dir_plan = plan_item(&SelectionItem::from_path(album.clone())).unwrap();
        assert_eq!(dir_plan.kind, ItemKind::Directory);
        assert_eq!(dir_plan.output, temp_dir.path().join("album_compress"));

        let file_plan = plan_item(&SelectionItem::from_path(photo)).unwrap();
        assert_eq!(file_plan.kind, ItemKind::File);
        assert_eq!(file_plan.output, album.join("cat_compress.jpg"));
    }

    #[test]
    fn test_run_directory_records_every_entry() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("b.txt"), b"text").unwrap();
        fs::write(input.join("a.jpg"), b"broken").unwrap();

        let plan = ItemPlan {
            kind: ItemKind::Directory,
            input: input.clone(),
            output: temp_dir.path().join("in_compress"),
        };
        let outcomes = run_directory(&plan, 0.7).unwrap();

        assert!(plan.output.is_dir());
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].input, input.join("a.jpg"));
        assert!(matches!(
            outcomes[0].result,
            Err(CompressionError::Decode { .. })
        ));
        assert!(matches!(
            outcomes[1].result,
            Err(CompressionError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_batch_result_measure_missing_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("x.jpg");
        fs::write(&input, vec![0u8; 10]).unwrap();

        let result = BatchResult::measure(&input, &temp_dir.path().join("x_compress.jpg"), 0.7);
        assert_eq!(result.input_count, 1);
        assert_eq!(result.output_count, 0);
        assert_eq!(result.input_bytes, 10);
        assert_eq!(result.output_bytes, 0);
    }
}
