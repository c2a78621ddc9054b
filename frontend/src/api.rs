use docsmith_shared::protocol::{ApiRequest, GenerateTemplateRequest, ListProjectsRequest};
use docsmith_shared::{
    BEARER_SCHEME, CreateProjectRequest, CreatedProject, ErrorDetail, FeedbackRequest,
    FeedbackType, HEADER_AUTHORIZATION, MessageResponse, OutlineResponse, Project, RefineRequest,
    RefineResponse, RegisterRequest, StatusResponse, TokenResponse,
};
use gloo_net::http::{Request, RequestBuilder, Response};

/// 默认后端地址，构建时可通过 DOCSMITH_API_URL 环境变量覆盖
pub const API_BASE_URL: &str = match option_env!("DOCSMITH_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// API 错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 请求构建失败
    Request(String),
    /// 网络请求失败
    Network(String),
    /// 响应解析失败
    Decode(String),
    /// 后端拒绝了请求（状态码 + detail 消息）
    Server { status: u16, detail: String },
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Request(msg) => write!(f, "Failed to build request: {}", msg),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
            // 用户可见的就是后端 detail 本身
            ApiError::Server { detail, .. } => write!(f, "{}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Clone, Debug, PartialEq)]
pub struct DocSmithApi {
    base_url: String,
    token: Option<String>,
}

impl DocSmithApi {
    /// 未认证的客户端（登录、注册）
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
        }
    }

    /// 携带 bearer token 的客户端
    pub fn with_token(base_url: String, token: String) -> Self {
        let mut api = Self::new(base_url);
        api.token = Some(token);
        api
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // 在 token 存在时附加认证头
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header(
                HEADER_AUTHORIZATION,
                &format!("{} {}", BEARER_SCHEME, token),
            ),
            None => builder,
        }
    }

    /// 非 2xx 响应转换为 `ApiError::Server`，优先取后端的 detail 消息
    async fn check(res: Response) -> Result<Response, ApiError> {
        if res.ok() {
            return Ok(res);
        }
        let status = res.status();
        let detail = match res.json::<ErrorDetail>().await {
            Ok(err) => err.detail,
            Err(_) => format!("Request failed with status {}", status),
        };
        Err(ApiError::Server { status, detail })
    }

    async fn decode<T: serde::de::DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        Self::check(res)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 发送一个 JSON 体的 POST 端点请求（路径与响应类型由协议定义）
    async fn post_json<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let res = self
            .authorize(Request::post(&self.url(R::PATH)))
            .json(req)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(res).await
    }

    /// 登录，换取 bearer token
    ///
    /// 后端的 /token 端点要求 multipart 表单（username/password），
    /// 由浏览器自动设置 Content-Type 边界。
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        form.append_with_str("username", email)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        form.append_with_str("password", password)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

        let res = Request::post(&self.url("/token"))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(res).await
    }

    /// 注册新账号
    pub async fn register(
        &self,
        email: String,
        password: String,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json(&RegisterRequest { email, password }).await
    }

    /// 获取当前用户的项目列表
    pub async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        let res = self
            .authorize(Request::get(&self.url(ListProjectsRequest::PATH)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(res).await
    }

    /// 获取单个项目（含章节，按 order 排序）
    pub async fn get_project(&self, id: i64) -> Result<Project, ApiError> {
        let res = self
            .authorize(Request::get(&self.url(&format!("/projects/{}", id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let mut project: Project = Self::decode(res).await?;
        project.sort_sections();
        Ok(project)
    }

    /// 请求 AI 建议的大纲
    pub async fn generate_template(
        &self,
        req: &GenerateTemplateRequest,
    ) -> Result<OutlineResponse, ApiError> {
        let pairs = req.query_pairs();
        let res = self
            .authorize(
                Request::post(&self.url(GenerateTemplateRequest::PATH))
                    .query(pairs.iter().map(|(k, v)| (*k, v.as_str()))),
            )
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(res).await
    }

    /// 提交最终确定的项目，内容生成由后端异步进行
    pub async fn create_project(
        &self,
        req: &CreateProjectRequest,
    ) -> Result<CreatedProject, ApiError> {
        self.post_json(req).await
    }

    /// 按自然语言指令改写一个章节
    pub async fn refine_section(
        &self,
        section_id: i64,
        instruction: String,
    ) -> Result<RefineResponse, ApiError> {
        self.post_json(&RefineRequest {
            section_id,
            instruction,
        })
        .await
    }

    /// 记录章节的点赞/点踩反馈
    pub async fn send_feedback(
        &self,
        section_id: i64,
        feedback_type: FeedbackType,
    ) -> Result<StatusResponse, ApiError> {
        self.post_json(&FeedbackRequest {
            section_id,
            feedback_type,
            comment: String::new(),
        })
        .await
    }

    /// 导出项目文件，返回原始字节
    pub async fn export_project(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        let res = self
            .authorize(Request::get(&self.url(&format!("/projects/{}/export", id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(res)
            .await?
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joining_normalizes_slashes() {
        let api = DocSmithApi::new("http://localhost:8000/".to_string());
        assert_eq!(api.url("/projects"), "http://localhost:8000/projects");
        assert_eq!(api.url("projects"), "http://localhost:8000/projects");
    }

    #[test]
    fn server_error_displays_backend_detail() {
        let err = ApiError::Server {
            status: 400,
            detail: "Email already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn fallback_detail_mentions_status() {
        let err = ApiError::Server {
            status: 502,
            detail: format!("Request failed with status {}", 502),
        };
        assert!(err.to_string().contains("502"));
    }
}
