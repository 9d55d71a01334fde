//! 역할 관련 요청 DTO

pub mod role_update_request;

pub use role_update_request::RoleUpdateRequest;
