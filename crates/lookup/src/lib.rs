//! Definition lookup pipeline for devdict.
//!
//! The flow both front ends share: a raw question is normalized into a bare
//! search term, the term is tried against an ordered chain of reference
//! sources, and the outcome is rendered into a chat-ready reply.

pub mod format;
pub mod mdn;
pub mod normalize;
pub mod pipeline;
pub mod provider;
pub mod wikipedia;

pub use {
    format::format_reply,
    mdn::MdnProvider,
    normalize::normalize,
    pipeline::LookupPipeline,
    provider::{Definition, DefinitionProvider, LookupOutcome, ProviderReply},
    wikipedia::WikipediaProvider,
};
