//! PostgreSQL adapters

pub mod category_repo;
pub mod post_repo;

pub use category_repo::PostgresCategoryRepository;
pub use post_repo::PostgresPostRepository;
