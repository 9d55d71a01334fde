//! # Domain Layer Module
//!
//! 요청/응답 계약을 담는 도메인 계층입니다.
//!
//! - [`dto`] - 입력 검증 스키마 (비밀번호 재설정, 역할 수정)

pub mod dto;
