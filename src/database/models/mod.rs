pub mod pokemon;
pub mod review;
pub mod user;

pub use pokemon::Pokemon;
pub use review::Review;
pub use user::User;
