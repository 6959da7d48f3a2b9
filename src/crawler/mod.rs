pub mod decode;
pub mod errors;
pub mod source;

pub use errors::CrawlError;
pub use source::{LocalSite, PageSource};
