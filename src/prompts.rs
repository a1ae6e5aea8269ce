//! Prompt text for the AI collaborator.
//!
//! The extraction schema mirrors the résumé wire format exactly; field names
//! must match for the extracted map to merge cleanly.

use crate::resume::Resume;

/// System instruction for structured extraction from raw PDF text.
pub const EXTRACT_SYSTEM: &str = r#"You are a resume analysis AI. Your task is to convert raw text
extracted from a PDF into structured JSON for a resume builder app.

Use this schema:

{
  "name": "",
  "title": "",
  "summary": "",
  "experience": [
    {
      "role": "",
      "company": "",
      "period": "",
      "bullets": []
    }
  ],
  "projects": [
    {
      "name": "",
      "period": "",
      "description": ""
    }
  ],
  "education": [
    {
      "degree": "",
      "school": "",
      "period": ""
    }
  ],
  "skills": [],
  "languages": [],
  "hobbies": [],
  "contact": {
    "phone": "",
    "email": "",
    "location": ""
  }
}

Respond with JSON only."#;

/// System instruction for instructed rewriting of a field value.
pub const REWRITE_SYSTEM: &str =
    "You rewrite text according to instructions. Keep it professional and concise.";

/// System instruction for regenerating a single résumé field.
pub const REGENERATE_SYSTEM: &str = "You generate professional resume text for a single field.";

/// System instruction for writing a professional summary.
pub const SUMMARY_SYSTEM: &str = "You write a compelling professional resume summary.";

/// User prompt asking for extraction of the given PDF text.
#[must_use]
pub fn extract_user(pdf_text: &str) -> String {
    format!("Convert this PDF text to JSON:\n\n{pdf_text}")
}

/// User prompt asking for a rewrite of `text` following `instruction`.
#[must_use]
pub fn rewrite_user(text: &str, instruction: &str) -> String {
    format!("Original text:\n{text}\n\nInstruction:\n{instruction}")
}

/// User prompt asking to regenerate one field from the full résumé.
///
/// # Errors
///
/// Returns a serialization error if the résumé cannot be serialized.
pub fn regenerate_user(field: &str, resume: &Resume) -> crate::Result<String> {
    Ok(format!(
        "Regenerate the field '{field}' based on this resume:\n\n{}",
        resume.to_json()?
    ))
}

/// User prompt asking for a summary of the full résumé.
///
/// # Errors
///
/// Returns a serialization error if the résumé cannot be serialized.
pub fn summary_user(resume: &Resume) -> crate::Result<String> {
    Ok(format!(
        "Write a summary for this person:\n\n{}",
        resume.to_json()?
    ))
}
