//! Authentication request and response models

mod error_response;
mod login_request;
mod login_response;
mod user_info;
mod verify_response;

pub use error_response::AuthErrorResponse;
pub use login_request::LoginRequest;
pub use login_response::LoginResponse;
pub use user_info::UserInfo;
pub use verify_response::VerifyResponse;
