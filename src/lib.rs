//! Recap - batch transcription and summarization pipeline
//!
//! Turns recorded media into text transcripts through a Whisper-style ASR
//! webservice, and transcripts into structured meeting summaries through an
//! Ollama-compatible generation service. Long transcripts are handled by
//! splitting into overlapping segments and reducing per-segment summaries
//! into one coherent record.

pub mod chunking;
pub mod clients;
pub mod config;
pub mod document;
pub mod output;
pub mod pipeline;
pub mod structure;
pub mod summarize;
pub mod transcribe;
pub mod types;
