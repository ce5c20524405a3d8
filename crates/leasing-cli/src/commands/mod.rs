pub mod lease;
pub mod text;
