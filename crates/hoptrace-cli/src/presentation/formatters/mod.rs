pub mod style;
pub mod text;
