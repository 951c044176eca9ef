//! Mappers converting domain entities into response DTOs

use review_core::entities::{Category, Comment, Genre, Review, Title, User};

use super::responses::{
    CategoryResponse, CommentResponse, GenreResponse, ReviewResponse, TitleResponse, UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            bio: user.bio.clone(),
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
        }
    }
}

impl From<&Genre> for GenreResponse {
    fn from(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
            slug: genre.slug.clone(),
        }
    }
}

/// Title with everything its response needs: resolved category, resolved
/// genres, and the derived rating.
#[derive(Debug)]
pub struct TitleWithDetails {
    pub title: Title,
    pub category: Option<Category>,
    pub genres: Vec<Genre>,
    pub rating: Option<f64>,
}

impl From<TitleWithDetails> for TitleResponse {
    fn from(details: TitleWithDetails) -> Self {
        Self {
            id: details.title.id.to_string(),
            name: details.title.name,
            year: details.title.year,
            rating: details.rating,
            description: details.title.description,
            genre: details.genres.iter().map(GenreResponse::from).collect(),
            category: details.category.as_ref().map(CategoryResponse::from),
        }
    }
}

/// Review paired with its author's username
#[derive(Debug)]
pub struct ReviewWithAuthor {
    pub review: Review,
    pub author_username: String,
}

impl From<ReviewWithAuthor> for ReviewResponse {
    fn from(details: ReviewWithAuthor) -> Self {
        Self {
            id: details.review.id.to_string(),
            author: details.author_username,
            text: details.review.text,
            score: details.review.score,
            pub_date: details.review.created_at,
        }
    }
}

/// Comment paired with its author's username
#[derive(Debug)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_username: String,
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(details: CommentWithAuthor) -> Self {
        Self {
            id: details.comment.id.to_string(),
            author: details.author_username,
            text: details.comment.text,
            pub_date: details.comment.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_core::value_objects::Snowflake;

    #[test]
    fn test_user_response_mapping() {
        let mut user = User::new(
            Snowflake::new(1),
            "alice".to_string(),
            "a@example.com".to_string(),
        );
        user.bio = Some("reader".to_string());

        let response = UserResponse::from(&user);
        assert_eq!(response.username, "alice");
        assert_eq!(response.role, "user");
        assert_eq!(response.bio.as_deref(), Some("reader"));
    }

    #[test]
    fn test_title_response_mapping() {
        let genre = Genre::new(Snowflake::new(2), "Drama".to_string(), "drama".to_string());
        let category = Category::new(Snowflake::new(3), "Movies".to_string(), "movies".to_string());
        let mut title = Title::new(Snowflake::new(10), "Solaris".to_string(), 1972);
        title.category_id = Some(category.id);
        title.genre_ids = vec![genre.id];

        let response = TitleResponse::from(TitleWithDetails {
            title,
            category: Some(category),
            genres: vec![genre],
            rating: Some(8.5),
        });

        assert_eq!(response.id, "10");
        assert_eq!(response.rating, Some(8.5));
        assert_eq!(response.genre.len(), 1);
        assert_eq!(response.category.as_ref().unwrap().slug, "movies");
    }
}
