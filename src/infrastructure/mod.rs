pub mod imaging;
pub mod observability;
pub mod ocr;
pub mod process;
pub mod storage;
