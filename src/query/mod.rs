// Pure query operations over stored entries - search filtering and pagination

mod filter;
mod paginate;

pub use filter::{filter_entries, FilterMode};
pub use paginate::{paginate, Page, DEFAULT_PAGE_SIZE};
