use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, TransformArgs, TransformCommand};
pub use exit_status::ExitStatus;
pub use run::CommandOutcome;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let outcome = run::run(args)?;
    report::print(&outcome, verbose);

    Ok(exit_status(&outcome))
}

fn exit_status(outcome: &CommandOutcome) -> ExitStatus {
    match outcome {
        CommandOutcome::Transform(result) if result.error_count() > 0 => ExitStatus::Failure,
        _ => ExitStatus::Success,
    }
}
