use super::entity::Post;
use crate::domain::{DomainError, DomainResult};

/// Validates all Post invariants
pub fn validate_post(post: &Post) -> DomainResult<()> {
    if post.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Post title cannot be empty".to_string(),
        ));
    }
    if post.content.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Post content cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_post() {
        let post = Post::new("Title".to_string(), "Body".to_string());
        assert!(validate_post(&post).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let post = Post::new("  ".to_string(), "Body".to_string());
        assert!(validate_post(&post).is_err());
    }

    #[test]
    fn test_empty_content_fails() {
        let post = Post::new("Title".to_string(), "".to_string());
        assert!(validate_post(&post).is_err());
    }
}
