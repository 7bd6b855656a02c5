pub mod settings;
pub mod test_results;
pub mod value;
