//! Database models - row structs with SQLx `FromRow` derives

mod category;
mod comment;
mod genre;
mod review;
mod title;
mod user;

pub use category::CategoryModel;
pub use comment::CommentModel;
pub use genre::GenreModel;
pub use review::ReviewModel;
pub use title::TitleModel;
pub use user::UserModel;
