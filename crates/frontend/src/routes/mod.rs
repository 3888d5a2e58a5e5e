pub mod page_host;
pub mod router;
