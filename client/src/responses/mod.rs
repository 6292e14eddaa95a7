pub mod link_header;
pub mod paginated_response;

pub use link_header::{PageLink, PageLinks};
pub use paginated_response::{PaginatedResponse, PaginationSignal};
