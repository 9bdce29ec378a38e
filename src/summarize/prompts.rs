//! Prompt templates for summarization calls

use super::Scope;

pub(super) fn segment_prompt(text: &str, scope: Scope) -> String {
    match scope {
        Scope::Partial => format!(
            "Summarize this portion of a meeting transcript. \
             Focus on key points, decisions, and action items:\n\n\
             {text}\n\n\
             Provide a concise summary covering main topics discussed."
        ),
        Scope::WholeDocument => format!(
            "Summarize this meeting transcript. Focus on:\n\
             - Key topics discussed\n\
             - Decisions made\n\
             - Action items\n\
             - Important insights or concerns\n\n\
             Transcript:\n{text}\n\n\
             Provide a well-organized summary."
        ),
    }
}

pub(super) fn combine_prompt(joined: &str) -> String {
    format!(
        "The following are summaries of different parts of the same meeting transcript.\n\
         Combine them into a single, coherent summary that:\n\
         - Eliminates redundancy\n\
         - Organizes information logically\n\
         - Highlights key decisions and action items\n\
         - Maintains chronological flow where relevant\n\n\
         Partial summaries:\n{joined}\n\n\
         Provide the final combined summary."
    )
}
