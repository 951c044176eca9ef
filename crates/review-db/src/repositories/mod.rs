//! PostgreSQL repository implementations

mod category;
mod comment;
mod error;
mod genre;
mod review;
mod title;
mod user;

pub use category::PgCategoryRepository;
pub use comment::PgCommentRepository;
pub use genre::PgGenreRepository;
pub use review::PgReviewRepository;
pub use title::PgTitleRepository;
pub use user::PgUserRepository;
