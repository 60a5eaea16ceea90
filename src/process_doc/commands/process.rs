use crate::commands::{CmdMessage, CmdResult};
use crate::config::ProcessConfig;
use crate::error::{ProcessError, Result};
use crate::model::{ProcessRequest, ReportKind, ReportOutcome, UserId};
use crate::placeholder::placeholder_pdf;
use crate::store::ReportStore;
use tracing::{debug, info};

pub fn run<S: ReportStore>(
    store: &mut S,
    config: &ProcessConfig,
    request: &ProcessRequest,
) -> Result<CmdResult> {
    let input = &request.input;

    // Checked up front so a bad input never leaves anything behind.
    if !store.is_file(input)? {
        if store.exists(input)? {
            return Err(ProcessError::InputNotAFile(input.clone()));
        }
        return Err(ProcessError::InputNotFound(input.clone()));
    }

    let user_id = UserId::from_folder(
        &request.user_folder,
        &config.input_prefix,
        config.require_prefix,
    )?;
    debug!(folder = %request.user_folder, user_id = %user_id, "derived user id");

    let mut result = CmdResult::default();
    if !user_id.was_prefixed() {
        debug!(prefix = %config.input_prefix, "user folder lacks the expected prefix");
        result.add_message(CmdMessage::warning(format!(
            "User folder '{}' does not start with '{}'; using it as the user id",
            request.user_folder, config.input_prefix
        )));
    }

    let output_dir = config.output_dir(&user_id)?;
    if !store.exists(&output_dir)? {
        result.add_message(CmdMessage::info(format!(
            "Created output directory {}",
            output_dir.display()
        )));
    }
    store.ensure_dir(&output_dir)?;

    let stem = if request.name_from_input {
        input.file_stem().map(|s| s.to_string_lossy().into_owned())
    } else {
        None
    };
    let output = output_dir.join(config.report_file_name_for(stem.as_deref()));

    let kind = ReportKind::detect(input);
    let bytes_written = match kind {
        ReportKind::Copied => store.copy_file(input, &output)?,
        ReportKind::Placeholder => {
            let bytes = placeholder_pdf();
            store.write_file(&output, bytes)?;
            bytes.len() as u64
        }
    };
    info!(output = %output.display(), ?kind, bytes_written, "report written");

    Ok(result.with_report(ReportOutcome {
        user_id,
        input: input.clone(),
        output,
        kind,
        bytes_written,
    }))
}
