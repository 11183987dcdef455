pub mod email;
pub mod gravatar;
pub mod slug;

pub use email::is_valid_email;
pub use gravatar::gravatar_url;
pub use slug::slugify;
