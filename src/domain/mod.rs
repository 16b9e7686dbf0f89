pub mod comment;
pub mod errors;
