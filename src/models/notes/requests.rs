use serde::Deserialize;

// 创建便签请求
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    pub color: Option<String>,
    pub priority: Option<String>,
    pub is_pinned: Option<bool>,
}

// 更新便签请求
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<String>,
    pub priority: Option<String>,
    pub is_pinned: Option<bool>,
}
