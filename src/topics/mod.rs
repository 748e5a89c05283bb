// Topic inference: preprocessing, TF-IDF extraction, and the topic model.

pub mod extractor;
pub mod model;
pub mod preprocess;
pub mod traits;
