pub mod apartments;
pub mod detail;
pub mod dom;
pub mod fetch;
pub mod text;

pub use apartments::ApartmentsScraper;
pub use fetch::{HttpFetcher, PageFetcher};
