pub mod endpoint;
pub mod text;
