//! Anthropic messages API integration for content generation.

mod client;
mod dto;
mod parse;

pub use client::AnthropicContentClient;
pub use dto::{
    AnthropicMessage, AnthropicMessageBuilder, AnthropicRequest, AnthropicRequestBuilder,
    AnthropicResponse,
};
pub(crate) use parse::parse_completion;
