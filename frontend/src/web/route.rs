//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其守卫属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录/注册页面 (默认路由)
    #[default]
    Login,
    /// 项目列表 (需要认证)
    Dashboard,
    /// 新建项目 (需要认证)
    CreateProject,
    /// 项目编辑器，携带项目 id (需要认证)
    Editor(i64),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/create" => Self::CreateProject,
            _ => {
                if let Some(id) = path
                    .strip_prefix("/editor/")
                    .and_then(|rest| rest.parse::<i64>().ok())
                {
                    return Self::Editor(id);
                }
                Self::NotFound
            }
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::CreateProject => "/create".to_string(),
            Self::Editor(id) => format!("/editor/{}", id),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::CreateProject | Self::Editor(_))
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/create"), AppRoute::CreateProject);
        assert_eq!(AppRoute::from_path("/editor/42"), AppRoute::Editor(42));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(AppRoute::from_path("/settings"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/editor/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/editor/abc"), AppRoute::NotFound);
    }

    #[test]
    fn path_round_trip() {
        for route in [
            AppRoute::Login,
            AppRoute::Dashboard,
            AppRoute::CreateProject,
            AppRoute::Editor(7),
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn guard_matrix() {
        assert!(!AppRoute::Login.requires_auth());
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::CreateProject.requires_auth());
        assert!(AppRoute::Editor(1).requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());

        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(!AppRoute::Dashboard.should_redirect_when_authenticated());
    }
}
