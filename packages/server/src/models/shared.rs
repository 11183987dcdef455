use crate::entity::entry::TITLE_MAX_LENGTH;
use crate::error::AppError;

pub const USERNAME_MAX_LENGTH: usize = 150;

/// Validate a trimmed title (1-500 Unicode characters).
pub fn validate_title(title: &str) -> Result<(), AppError> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > TITLE_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "Title must be 1-{TITLE_MAX_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a trimmed username (1-150 chars, letters, digits and `@.+-_`).
pub fn validate_username(username: &str) -> Result<(), AppError> {
    let username = username.trim();
    if username.is_empty() || username.chars().count() > USERNAME_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "Username must be 1-{USERNAME_MAX_LENGTH} characters"
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(AppError::Validation(
            "Username may contain only letters, digits and @/./+/-/_".into(),
        ));
    }
    Ok(())
}
