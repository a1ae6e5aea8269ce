//! Interactive AI review wizard.
//!
//! Walks the reviewable fields one by one, shows the current value as pretty
//! JSON, and lets the user accept, AI-rewrite, AI-regenerate or skip each
//! one. Terminal streams and the AI handle are injected so the loop can be
//! driven by a test harness.

use crate::{
    ai::{Ai, strip_json_fences},
    error::{Error, Result},
    resume::Resume,
};
use serde_json::{Map, Value};
use std::io::{BufRead, Write};
use tracing::info;

/// Fields the wizard walks through, in review order.
pub const REVIEW_FIELDS: [&str; 5] = ["summary", "experience", "projects", "education", "skills"];

/// Runs the review loop over `resume`, mutating it in place.
///
/// The caller owns persistence; nothing is written to disk here.
///
/// # Errors
///
/// Returns an error if the AI collaborator fails or the terminal streams
/// break. An unrecognized menu choice just moves on to the next field.
pub fn run_review(
    resume: &mut Resume,
    ai: &dyn Ai,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    term(writeln!(output, "=== AI REVIEW WIZARD ==="))?;

    for field in REVIEW_FIELDS {
        let value = field_value(resume, field);

        term(writeln!(output, "\n--- {} ---", field.to_uppercase()))?;
        term(writeln!(output, "{}", serde_json::to_string_pretty(&value)?))?;
        term(writeln!(
            output,
            "Options: [a] Accept  [e] Edit (AI rewrite)  [r] Regenerate  [s] Skip"
        ))?;
        term(write!(output, "Choice: "))?;
        term(output.flush())?;

        match read_line(input)?.trim().to_lowercase().as_str() {
            "e" => {
                term(write!(output, "Rewrite instruction: "))?;
                term(output.flush())?;
                let instruction = read_line(input)?;

                let current = serde_json::to_string(&value)?;
                let rewritten = ai.rewrite_text(&current, instruction.trim())?;
                apply_ai_text(resume, field, &rewritten);
                info!("Rewrote field '{}'", field);
            }
            "r" => {
                let regenerated = ai.regenerate_field(field, resume)?;
                apply_ai_text(resume, field, &regenerated);
                info!("Regenerated field '{}'", field);
            }
            // "a", "s" and anything else: keep the current value.
            _ => {}
        }
    }

    term(writeln!(output, "\nAI review complete."))?;
    Ok(())
}

/// Stores AI output into a field: parsed as JSON when possible, otherwise
/// the raw text verbatim. This fallback is the wizard's core contract.
fn apply_ai_text(resume: &mut Resume, field: &str, text: &str) {
    let value = serde_json::from_str::<Value>(strip_json_fences(text))
        .unwrap_or_else(|_| Value::String(text.to_string()));

    let mut updates = Map::new();
    updates.insert(field.to_string(), value);
    resume.merge(&updates);
}

/// Snapshot of a reviewable field as a JSON value.
fn field_value(resume: &Resume, field: &str) -> Value {
    match field {
        "summary" => Value::String(resume.summary.clone()),
        "experience" => resume.experience.clone(),
        "projects" => resume.projects.clone(),
        "education" => resume.education.clone(),
        "skills" => resume.skills.clone(),
        _ => Value::Null,
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    term(input.read_line(&mut line))?;
    Ok(line)
}

fn term<T>(result: std::io::Result<T>) -> Result<T> {
    result.map_err(|e| Error::io("terminal", e))
}
