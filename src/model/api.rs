use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every plain status response, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Bearer token issued on successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
}

/// Every documented API path, sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SitemapDto {
    pub endpoints: Vec<String>,
}
