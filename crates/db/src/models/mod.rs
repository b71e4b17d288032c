pub mod diary_entry;
pub mod perspective;
pub mod value_tag;
