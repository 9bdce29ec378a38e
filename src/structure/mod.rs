//! Structurer - extracts a fixed-schema record from a final summary
//!
//! Generation services are not guaranteed to honor format instructions, so
//! the parse has a deterministic fallback. The fallback is a first-class
//! record variant, not a caught error; nothing in this module can fail.

use tracing::{debug, warn};

use crate::clients::GenerateText;
use crate::types::{DocumentMeta, ParsedFields, StructuredRecord};

/// Ask the generation service for structured fields and build the record
pub fn structure<G: GenerateText>(
    summary: &str,
    meta: &DocumentMeta,
    client: &G,
) -> StructuredRecord {
    let prompt = extraction_prompt(summary, meta);
    match client.generate(&prompt, None) {
        Ok(response) => build_record(&response, summary, meta),
        Err(err) => {
            warn!(file = %meta.filename, error = %err, "structured extraction call failed; using fallback record");
            StructuredRecord::fallback(summary, meta)
        }
    }
}

/// Parse a service response into a record, falling back on malformed JSON
///
/// A parsed object that omits title or date gets them from the document
/// metadata, mirroring the hint seeded into the prompt.
pub fn build_record(response: &str, summary: &str, meta: &DocumentMeta) -> StructuredRecord {
    match serde_json::from_str::<ParsedFields>(response) {
        Ok(mut fields) => {
            if fields.title.is_empty() {
                fields.title = meta.title.clone();
            }
            if fields.date.is_empty() {
                fields.date = meta.date.clone();
            }
            StructuredRecord::parsed(fields, summary, meta)
        }
        Err(err) => {
            debug!(file = %meta.filename, error = %err, "extraction response was not valid JSON; using fallback record");
            StructuredRecord::fallback(summary, meta)
        }
    }
}

fn extraction_prompt(summary: &str, meta: &DocumentMeta) -> String {
    format!(
        "From this meeting summary, extract:\n\
         1. Meeting Title/Subject\n\
         2. Date (if mentioned in content): {date}\n\
         3. Participants (list names if mentioned)\n\
         4. Key Topics (list main discussion points)\n\
         5. Decisions Made (list any decisions)\n\
         6. Action Items (list any tasks or follow-ups)\n\
         7. Tags (3-5 relevant keywords)\n\n\
         Meeting Summary:\n{summary}\n\n\
         Respond in JSON format with these fields: \
         title, date, participants, topics, decisions, action_items, tags",
        date = meta.date,
        summary = summary,
    )
}
