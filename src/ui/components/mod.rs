pub mod artwork;
pub mod spinner;
