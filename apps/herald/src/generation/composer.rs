//! Prompt assembly — deterministic: the same request always produces the
//! same prompt string.
//!
//! Section order is fixed: preamble → task line → job posting → normalized
//! profile → additional instructions (optional) → modification
//! instructions (optional) → output-format directive.

use crate::config::SenderIdentity;
use crate::generation::prompts::{
    ADDITIONAL_HEADER, EMAIL_PREAMBLE_TEMPLATE, JOB_POSTING_HEADER, MODIFICATION_HEADER,
    OUTPUT_DIRECTIVE, PINNED_SIGNOFF_TEMPLATE, PROFILE_HEADER, PROFILE_SIGNOFF_INSTRUCTION,
    TASK_INSTRUCTION,
};

/// Builds the single prompt string sent to the backend.
///
/// The job posting is embedded verbatim. The two optional sections appear
/// only when their source text trims non-empty.
pub fn build_prompt(
    job_posting: &str,
    profile_text: &str,
    additional_context: Option<&str>,
    existing_email: Option<&str>,
    sender: &SenderIdentity,
) -> String {
    let preamble =
        EMAIL_PREAMBLE_TEMPLATE.replace("{signoff_instruction}", &signoff_instruction(sender));

    let mut prompt = String::new();
    prompt.push_str(&preamble);
    prompt.push_str("\n\n");
    prompt.push_str(TASK_INSTRUCTION);
    prompt.push_str("\n\n");
    prompt.push_str(JOB_POSTING_HEADER);
    prompt.push('\n');
    prompt.push_str(job_posting);
    prompt.push_str("\n\n");
    prompt.push_str(PROFILE_HEADER);
    prompt.push('\n');
    prompt.push_str(profile_text);

    if let Some(text) = non_blank(additional_context) {
        prompt.push('\n');
        prompt.push_str(ADDITIONAL_HEADER);
        prompt.push('\n');
        prompt.push_str(text);
        prompt.push('\n');
    }

    if let Some(text) = non_blank(existing_email) {
        prompt.push('\n');
        prompt.push_str(MODIFICATION_HEADER);
        prompt.push('\n');
        prompt.push_str(text);
        prompt.push('\n');
    }

    prompt.push('\n');
    prompt.push_str(OUTPUT_DIRECTIVE);
    prompt
}

fn signoff_instruction(sender: &SenderIdentity) -> String {
    if sender.is_configured() {
        PINNED_SIGNOFF_TEMPLATE.replace("{signoff_block}", &sender.signoff_block())
    } else {
        PROFILE_SIGNOFF_INSTRUCTION.to_string()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
