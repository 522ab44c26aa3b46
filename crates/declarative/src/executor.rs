//! Execution engine - applies steps strictly in order, stopping at the first failure

use crate::action::Step;
use crate::context::{ApplyContext, ProgressCallback};
use crate::error::ApplyError;
use crate::types::ExecuteSummary;

/// Execute steps sequentially
///
/// Steps are pulled from `steps` one at a time, so a step that fails to
/// decode is only seen after every earlier step has been applied. The first
/// error, whether from decoding or applying, ends the run and is returned;
/// nothing after it is pulled or applied, and nothing before it is undone.
///
/// # Type Parameters
/// * `I` - Iterator of decoded steps
/// * `E` - Caller's error type (must absorb [`ApplyError`])
/// * `P` - Progress callback type
pub fn execute<I, E, P>(
    steps: I,
    ctx: &mut ApplyContext<'_>,
    progress: &mut P,
) -> Result<ExecuteSummary, E>
where
    I: IntoIterator<Item = Result<Step, E>>,
    E: From<ApplyError>,
    P: ProgressCallback,
{
    let mut summary = ExecuteSummary::default();

    for step in steps {
        let step = step?;
        log::trace!("Applying {:?}", step.action);

        progress.on_step_start(&step.command, &step.description);
        match step.action.apply(ctx) {
            Ok(result) => {
                log::info!("{}: {}", step.command, result.label());
                progress.on_step_complete(&step.command, &result);
                summary.add_result(&result);
            }
            Err(err) => {
                progress.on_step_failed(&step.command, &err);
                return Err(err.into());
            }
        }
    }

    Ok(summary)
}
