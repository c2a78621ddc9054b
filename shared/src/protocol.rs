use crate::{
    CreateProjectRequest, CreatedProject, DocType, FeedbackRequest, MessageResponse,
    OutlineResponse, Project, RefineRequest, RefineResponse, RegisterRequest, StatusResponse,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Endpoints with an id in the path (`/projects/{id}`, `/projects/{id}/export`)
/// are formatted by the API client and do not appear here. The login endpoint
/// takes multipart form data instead of JSON and is also handled directly by
/// the client.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the bearer token must be attached.
    const REQUIRES_AUTH: bool = true;
}

// =========================================================
// Request Definitions
// =========================================================

/// List all projects owned by the current user
#[derive(Debug, Serialize, Deserialize)]
pub struct ListProjectsRequest;

impl ApiRequest for ListProjectsRequest {
    type Response = Vec<Project>;
    const PATH: &'static str = "/projects";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Create an account (open endpoint)
impl ApiRequest for RegisterRequest {
    type Response = MessageResponse;
    const PATH: &'static str = "/register";
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = false;
}

/// Submit a finalized project; content generation continues server-side
impl ApiRequest for CreateProjectRequest {
    type Response = CreatedProject;
    const PATH: &'static str = "/projects";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Rewrite one section from a natural-language instruction
impl ApiRequest for RefineRequest {
    type Response = RefineResponse;
    const PATH: &'static str = "/refine";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Record like/dislike feedback on a section
impl ApiRequest for FeedbackRequest {
    type Response = StatusResponse;
    const PATH: &'static str = "/feedback";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Ask the backend for an AI-suggested outline.
///
/// The backend takes these as query parameters, not as a JSON body.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateTemplateRequest {
    pub topic: String,
    pub doc_type: DocType,
    pub context: String,
}

impl GenerateTemplateRequest {
    /// Query pairs in the order the backend documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("topic", self.topic.clone()),
            ("doc_type", self.doc_type.extension().to_string()),
            ("context", self.context.clone()),
        ]
    }
}

impl ApiRequest for GenerateTemplateRequest {
    type Response = OutlineResponse;
    const PATH: &'static str = "/projects/generate-template";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_metadata() {
        assert_eq!(ListProjectsRequest::PATH, "/projects");
        assert_eq!(ListProjectsRequest::METHOD, HttpMethod::Get);
        assert!(ListProjectsRequest::REQUIRES_AUTH);

        assert_eq!(RegisterRequest::PATH, "/register");
        assert!(!RegisterRequest::REQUIRES_AUTH);

        assert_eq!(CreateProjectRequest::PATH, "/projects");
        assert_eq!(CreateProjectRequest::METHOD, HttpMethod::Post);

        assert_eq!(RefineRequest::PATH, "/refine");
        assert_eq!(FeedbackRequest::PATH, "/feedback");
        assert_eq!(GenerateTemplateRequest::PATH, "/projects/generate-template");
    }

    #[test]
    fn generate_template_query_pairs() {
        let req = GenerateTemplateRequest {
            topic: "EV Industry".to_string(),
            doc_type: DocType::Pptx,
            context: "focus on 2024 data".to_string(),
        };
        assert_eq!(
            req.query_pairs(),
            vec![
                ("topic", "EV Industry".to_string()),
                ("doc_type", "pptx".to_string()),
                ("context", "focus on 2024 data".to_string()),
            ]
        );
    }
}
