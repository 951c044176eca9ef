//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CategoryRepository, CommentRepository, GenreRepository, RepoResult, ReviewRepository,
    TitleQuery, TitleRepository, UserRepository,
};
