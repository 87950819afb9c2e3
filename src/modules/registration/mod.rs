pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_pg;
pub mod route;
pub mod schema;
pub mod service;

pub use model::{NewUser, RegisterRequest};
pub use repository::UserRepository;
pub use repository_pg::UserPgRepository;
pub use schema::{RegisterResponse, UserEntity, UserResponse};
pub use service::RegistrationService;
