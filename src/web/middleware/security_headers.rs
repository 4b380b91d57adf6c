use poem::http::HeaderValue;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

const HEADERS: &[(&str, &str)] = &[
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "deny"),
    ("Referrer-Policy", "same-origin"),
    ("Strict-Transport-Security", "max-age=5184000"),
];

pub struct SecurityHeaders;

impl<E: Endpoint> Middleware<E> for SecurityHeaders {
    type Output = SecurityHeadersImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        SecurityHeadersImpl { ep }
    }
}

pub struct SecurityHeadersImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for SecurityHeadersImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let mut response = self.ep.call(request).await?.into_response();
        let headers = response.headers_mut();
        headers.remove("Server");
        for (name, value) in HEADERS {
            headers.insert(*name, HeaderValue::from_static(*value));
        }
        Ok(response)
    }
}
