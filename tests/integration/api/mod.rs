//! API integration tests

pub mod articles_test;
pub mod comments_test;
pub mod errors_test;
pub mod friends_test;
pub mod letters_test;
