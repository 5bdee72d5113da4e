//! Request extractors shared by the demo handlers.

mod page;
pub use page::{PageParams, DEFAULT_PAGE_LIMIT, MAX_ITEM_ID, MAX_PAGE_LIMIT};
