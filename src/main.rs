use anyhow::Context;
use clap::Parser;
use comp_img::cli::{Args, Frontend};
use comp_img::logger;
use comp_img::prompt::{ConsolePrompter, Prompter};
use comp_img::{BatchRunner, RunSummary};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    let summary = match args.frontend {
        Frontend::Console => run(ConsolePrompter::stdio())?,
        Frontend::Dialog => run(dialog_prompter()?)?,
    };

    let completed = summary.completed().count();
    let failed_jobs: usize = summary.completed().map(|r| r.failed_jobs().count()).sum();
    info!(
        "{} item(s) completed, {} skipped, {} failed job(s)",
        completed,
        summary.skipped().count(),
        failed_jobs
    );

    Ok(())
}

fn run<P: Prompter>(prompter: P) -> anyhow::Result<RunSummary> {
    BatchRunner::new(prompter)
        .run()
        .context("Interaction with the user failed")
}

#[cfg(feature = "native-dialogs")]
fn dialog_prompter() -> anyhow::Result<comp_img::dialog::DialogPrompter> {
    Ok(comp_img::dialog::DialogPrompter::new())
}

#[cfg(not(feature = "native-dialogs"))]
fn dialog_prompter() -> anyhow::Result<ConsolePrompter<std::io::StdinLock<'static>, std::io::Stdout>> {
    anyhow::bail!("this build has no native dialog support; rebuild with --features native-dialogs")
}
