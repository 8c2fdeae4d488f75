pub mod reader_service;

pub use reader_service::ReaderService;
