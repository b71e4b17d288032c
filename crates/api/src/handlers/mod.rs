pub mod entries;
pub mod value_tags;
