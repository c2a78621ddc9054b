//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::api::{API_BASE_URL, ApiError, DocSmithApi};
use crate::web::LocalStorage;
use docsmith_shared::MessageResponse;
use leptos::prelude::*;

const STORAGE_TOKEN_KEY: &str = "docsmith_token";

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// API 客户端实例（认证成功后携带 token）
    pub api: Option<DocSmithApi>,
    /// 是否已认证
    pub is_authenticated: bool,
    /// 是否正在加载
    pub is_loading: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            is_loading: true,
            ..AuthState::default()
        });
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 存储中已有 token 即视为已登录；token 是否仍有效由后端在
/// 每次调用时校验，失效表现为受保护调用返回 401。
pub fn init_auth(ctx: &AuthContext) {
    let stored = LocalStorage::get(STORAGE_TOKEN_KEY);
    ctx.set_state.update(|state| {
        state.is_loading = false;
        if let Some(token) = stored {
            state.api = Some(DocSmithApi::with_token(API_BASE_URL.to_string(), token));
            state.is_authenticated = true;
        }
    });
}

/// 登录并持久化 token
///
/// 成功后的页面跳转由路由服务的认证状态监听自动处理。
pub async fn login(ctx: &AuthContext, email: String, password: String) -> Result<(), ApiError> {
    let api = DocSmithApi::new(API_BASE_URL.to_string());
    let issued = api.login(&email, &password).await?;

    LocalStorage::set(STORAGE_TOKEN_KEY, &issued.access_token);

    ctx.set_state.update(|state| {
        state.api = Some(DocSmithApi::with_token(
            API_BASE_URL.to_string(),
            issued.access_token,
        ));
        state.is_authenticated = true;
    });
    Ok(())
}

/// 注册新账号
///
/// 注册成功后不自动登录，用户需回到登录表单。
pub async fn register(email: String, password: String) -> Result<MessageResponse, ApiError> {
    DocSmithApi::new(API_BASE_URL.to_string())
        .register(email, password)
        .await
}

/// 注销并清除持久化的 token
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    ctx.set_state.update(|state| {
        state.api = None;
        state.is_authenticated = false;
    });
}
