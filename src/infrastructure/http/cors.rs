//! CORS 来源校验
//!
//! 放行规则：
//! - 配置中精确列出的来源
//! - `https://{trusted_domain}` 及其任意子域名（不含端口）

use axum::http::{header, request::Parts, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// 判断来源是否放行
pub fn origin_allowed(origin: &str, config: &CorsConfig) -> bool {
    if config.allowed_origins.iter().any(|o| o == origin) {
        return true;
    }

    let Some(domain) = config.trusted_domain.as_deref() else {
        return false;
    };
    let Some(host) = origin.strip_prefix("https://") else {
        return false;
    };

    if host == domain {
        return true;
    }
    match host.strip_suffix(domain) {
        Some(prefix) => prefix.ends_with('.') && prefix.len() > 1 && !prefix.contains('/'),
        None => false,
    }
}

/// 构建 CORS 层
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let config = config.clone();
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|o| origin_allowed(o, &config))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600))
}
