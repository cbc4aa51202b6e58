mod client;
pub mod types;

pub use client::{HttpUpstream, Upstream, UpstreamReply, endpoint};
pub use types::GeminiPayload;

#[cfg(test)]
pub use client::MockUpstream;
