mod index;
mod scan;

pub use index::index_handler;
pub use scan::{ScanLine, ScanResponse, scan_handler};
