//! 공통 유틸리티 모듈
//!
//! # Modules
//!
//! - [`id_generator`] - 식별자 생성 trait, UUID 구현체, 테스트용 고정 생성기
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::id_generator::{IdGenerator, UuidGenerator};
//!
//! let request_id = UuidGenerator.v4();
//! ```

pub mod id_generator;

pub use id_generator::{FixedIdGenerator, IdGenerator, UuidGenerator};
