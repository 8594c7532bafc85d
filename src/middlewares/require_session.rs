/*!
 * 会话中间件
 *
 * 从 `Authorization: Bearer <token>` 提取会话并放入请求扩展，供后续处理程序使用。
 * 令牌的真正校验由上游后端完成：上游返回 401 时同样走统一的未认证响应。
 *
 * ```rust,ignore
 * web::scope("/api/v1/kelas")
 *     .wrap(RequireSession)
 *     .route("", web::get().to(list_kelas))
 * ```
 *
 * 处理程序中可以直接声明 `session: Session` 参数，或调用
 * [`RequireSession::extract_session`]。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::AUTHORIZATION,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

use crate::errors::MSG_SESSION_EXPIRED;
use crate::session::{Session, unauthenticated_response};

#[derive(Clone)]
pub struct RequireSession;

fn extract_from_header(req: &ServiceRequest) -> Result<Session, &'static str> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or("Missing Authorization header")?
        .to_str()
        .map_err(|_| "Malformed Authorization header")?;
    Session::from_authorization(header).ok_or("Authorization header is not a bearer token")
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(
                    req.into_response(HttpResponse::NoContent().finish().map_into_right_body())
                );
            }

            match extract_from_header(&req) {
                Ok(session) => {
                    debug!("Session attached for {}", req.path());
                    req.extensions_mut().insert(session);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(reason) => {
                    info!("Rejected unauthenticated request to {}: {}", req.path(), reason);
                    Ok(req.into_response(
                        unauthenticated_response(MSG_SESSION_EXPIRED).map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireSession {
    /// 从请求扩展中取出会话
    /// 此函数应该在应用了 RequireSession 中间件的路由处理程序中使用
    pub fn extract_session(req: &actix_web::HttpRequest) -> Option<Session> {
        req.extensions().get::<Session>().cloned()
    }
}
