pub mod extractor;
pub mod ids;
pub mod session;
pub mod test_utils;
pub mod token;
