pub mod auth;
pub mod error;
pub mod models;
pub mod password;
pub mod resource;
pub mod testutil;
pub mod token;
pub mod traits;

pub use auth::AuthService;
pub use error::AppError;
pub use models::{Collection, Document, InsertResult, NewUser, User};
pub use resource::ResourceService;
pub use token::{Claims, TokenIssuer, parse_expires_in};
pub use traits::{DocumentStore, UserStore};
