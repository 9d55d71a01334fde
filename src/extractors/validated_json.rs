//! 검증된 JSON 본문 추출자
//!
//! `web::Json<T>` 으로 역직렬화한 뒤 `validator::Validate` 규칙을 평가합니다.
//! 검증을 통과하지 못하면 핸들러는 호출되지 않습니다.

use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, Error, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::core::errors::AppError;

/// 역직렬화와 규칙 검증을 모두 통과한 요청 본문
///
/// ```rust,ignore
/// #[post("/password/reset")]
/// async fn reset_password(
///     payload: ValidatedJson<ResetPasswordRequest>,
/// ) -> Result<HttpResponse, AppError> {
///     let request = payload.into_inner();
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            // 형식 오류, 필드 누락
            let value = json
                .await
                .map_err(|e| AppError::ValidationError(e.to_string()))?
                .into_inner();

            // 규칙 위반
            if let Err(errors) = value.validate() {
                log::debug!("요청 본문 검증 실패: {}", errors);
                return Err(Error::from(AppError::InvalidFields(errors)));
            }

            Ok::<Self, Error>(ValidatedJson(value))
        })
    }
}
