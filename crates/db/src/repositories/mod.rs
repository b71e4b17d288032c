pub mod diary_entry_repo;
pub mod perspective_repo;
pub mod value_tag_repo;

pub use diary_entry_repo::DiaryEntryRepo;
pub use perspective_repo::PerspectiveRepo;
pub use value_tag_repo::ValueTagRepo;
