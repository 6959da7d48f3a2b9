pub mod cleaner;
pub mod model;
pub mod reader;

#[cfg(test)]
mod tests;

pub use model::PageRecord;
pub use reader::extract_page;
