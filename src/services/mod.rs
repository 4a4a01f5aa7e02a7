pub mod post_service;
pub mod response;
pub mod user_service;

pub use post_service::PostService;
pub use user_service::UserService;
