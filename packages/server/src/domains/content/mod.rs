//! Page content: wire types, the built-in fallback table, and the resolver
//! that decides between live backend data and the fallback.

pub mod fallback;
pub mod resolver;
pub mod types;

pub use fallback::fallback_summaries;
pub use resolver::{PageContentResolver, ResolvedSummaries};
pub use types::{ComponentContent, ContentSource, PageLayout, PageSummary, CONTENT_SOURCE_HEADER};
