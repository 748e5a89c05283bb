// Pipeline orchestration: one document in, tagged index record out.

pub mod process;

pub use process::process_document;
