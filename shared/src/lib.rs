use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_SCHEME: &str = "Bearer";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 文档输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    Docx,
    Pptx,
}

impl Default for DocType {
    fn default() -> Self {
        DocType::Docx
    }
}

impl DocType {
    /// 导出文件的扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            DocType::Docx => "docx",
            DocType::Pptx => "pptx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocType::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
        }
    }

    /// UI 下拉框里的显示名称
    pub fn label(&self) -> &'static str {
        match self {
            DocType::Docx => "Word Document (.docx)",
            DocType::Pptx => "PowerPoint (.pptx)",
        }
    }

    /// 解析 `<select>` 的 value（序列化值的逆向）
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "docx" => Some(DocType::Docx),
            "pptx" => Some(DocType::Pptx),
            _ => None,
        }
    }
}

/// 项目内的一个章节
///
/// `content` 在后台生成完成前为空或占位文本，客户端原样展示。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Section {
    pub id: i64,
    pub heading: String,
    #[serde(default)]
    pub content: Option<String>,
    pub order: i64,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl Section {
    /// 内容是否仍在等待生成
    pub fn is_pending(&self) -> bool {
        self.content.as_deref().is_none_or(|c| c.trim().is_empty())
    }
}

/// 文档项目
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub doc_type: DocType,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Project {
    /// 导出时的文件名：`<标题>.<扩展名>`
    pub fn export_file_name(&self) -> String {
        format!("{}.{}", self.title, self.doc_type.extension())
    }

    /// 按 `order` 排序章节
    ///
    /// 后端已排序，这里兜底保证展示顺序。
    pub fn sort_sections(&mut self) {
        self.sections.sort_by_key(|s| s.order);
    }
}

/// 章节反馈类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    Like,
    Dislike,
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::Like => "like",
            FeedbackType::Dislike => "dislike",
        }
    }
}

// =========================================================
// 请求/响应载荷 (Payloads)
// =========================================================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// 登录成功返回的凭据
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateProjectRequest {
    pub title: String,
    pub doc_type: DocType,
    pub context: String,
    pub outline: Vec<String>,
}

/// 创建项目的响应：后台异步生成内容，仅返回 id
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatedProject {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefineRequest {
    pub section_id: i64,
    pub instruction: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefineResponse {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FeedbackRequest {
    pub section_id: i64,
    pub feedback_type: FeedbackType,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutlineResponse {
    pub outline: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StatusResponse {
    pub status: String,
}

/// 后端错误响应体：`{"detail": "..."}`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn doc_type_wire_values() {
        assert_eq!(serde_json::to_value(DocType::Docx).unwrap(), json!("docx"));
        assert_eq!(serde_json::to_value(DocType::Pptx).unwrap(), json!("pptx"));
        assert_eq!(DocType::from_value("pptx"), Some(DocType::Pptx));
        assert_eq!(DocType::from_value("pdf"), None);
    }

    #[test]
    fn export_file_name_uses_extension() {
        let project = Project {
            id: 1,
            title: "Market Analysis".to_string(),
            doc_type: DocType::Pptx,
            context: None,
            sections: Vec::new(),
        };
        assert_eq!(project.export_file_name(), "Market Analysis.pptx");
    }

    #[test]
    fn sections_sort_by_order() {
        let mut project: Project = serde_json::from_value(json!({
            "id": 7,
            "title": "T",
            "doc_type": "docx",
            "sections": [
                {"id": 3, "heading": "Conclusion", "order": 2},
                {"id": 1, "heading": "Introduction", "order": 0},
                {"id": 2, "heading": "Body", "order": 1},
            ],
        }))
        .unwrap();

        project.sort_sections();
        let headings: Vec<&str> = project.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, ["Introduction", "Body", "Conclusion"]);
    }

    #[test]
    fn pending_section_detection() {
        let mut section = Section {
            id: 1,
            heading: "Intro".to_string(),
            content: None,
            order: 0,
            feedback: None,
            comments: None,
        };
        assert!(section.is_pending());

        section.content = Some("   ".to_string());
        assert!(section.is_pending());

        section.content = Some("Actual prose.".to_string());
        assert!(!section.is_pending());
    }

    #[test]
    fn create_project_request_shape() {
        let req = CreateProjectRequest {
            title: "EV Industry".to_string(),
            doc_type: DocType::Docx,
            context: "formal tone".to_string(),
            outline: vec!["Introduction".to_string(), "Conclusion".to_string()],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "EV Industry",
                "doc_type": "docx",
                "context": "formal tone",
                "outline": ["Introduction", "Conclusion"],
            })
        );
    }

    #[test]
    fn feedback_request_wire_values() {
        let req = FeedbackRequest {
            section_id: 9,
            feedback_type: FeedbackType::Dislike,
            comment: String::new(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["feedback_type"], json!("dislike"));
        assert_eq!(FeedbackType::Like.as_str(), "like");
    }

    #[test]
    fn error_detail_parses_backend_body() {
        let err: ErrorDetail =
            serde_json::from_value(json!({"detail": "Incorrect email or password"})).unwrap();
        assert_eq!(err.detail, "Incorrect email or password");
    }
}
