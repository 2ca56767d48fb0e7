pub mod file_view_repository;
pub mod view_repository;

pub use file_view_repository::FileViewRepository;
pub use view_repository::ViewRepository;
