//! 인증 관련 요청 DTO

pub mod reset_password_request;

pub use reset_password_request::ResetPasswordRequest;
