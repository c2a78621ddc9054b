//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 大纲行的增删改
//! - 数据到请求对象的转换与校验

use docsmith_shared::{CreateProjectRequest, DocType};
use leptos::prelude::*;

/// 大纲中的一行
///
/// `key` 在表单生命周期内唯一，列表增删时已有输入框不会被重建。
#[derive(Clone, Copy)]
pub struct OutlineItem {
    pub key: usize,
    pub heading: RwSignal<String>,
}

/// 表单校验错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// 生成大纲前必须填写主题
    MissingTitle,
    /// 创建前大纲至少要有一个章节
    EmptyOutline,
}

impl core::fmt::Display for FormError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormError::MissingTitle => write!(f, "Enter a title first"),
            FormError::EmptyOutline => write!(f, "Add at least one section"),
        }
    }
}

/// 校验并组装创建请求
///
/// 空白的大纲行会被丢弃；全部为空等同于空大纲。
pub fn build_request(
    title: &str,
    doc_type: DocType,
    context: &str,
    outline: &[String],
) -> Result<CreateProjectRequest, FormError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(FormError::MissingTitle);
    }

    let outline: Vec<String> = outline
        .iter()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .collect();
    if outline.is_empty() {
        return Err(FormError::EmptyOutline);
    }

    Ok(CreateProjectRequest {
        title: title.to_string(),
        doc_type,
        context: context.trim().to_string(),
        outline,
    })
}

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub title: RwSignal<String>,
    pub context: RwSignal<String>,
    pub doc_type: RwSignal<DocType>,
    pub outline: RwSignal<Vec<OutlineItem>>,
    next_key: RwSignal<usize>,
}

impl FormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            context: RwSignal::new(String::new()),
            doc_type: RwSignal::new(DocType::default()),
            outline: RwSignal::new(Vec::new()),
            next_key: RwSignal::new(0),
        }
    }

    fn make_item(&self, heading: String) -> OutlineItem {
        let key = self.next_key.get_untracked();
        self.next_key.set(key + 1);
        OutlineItem {
            key,
            heading: RwSignal::new(heading),
        }
    }

    /// 用 AI 建议的标题列表替换当前大纲
    pub fn replace_outline(&self, headings: Vec<String>) {
        let items: Vec<OutlineItem> = headings.into_iter().map(|h| self.make_item(h)).collect();
        self.outline.set(items);
    }

    /// 追加一个待编辑的章节
    pub fn push_heading(&self) {
        let item = self.make_item("New Section".to_string());
        self.outline.update(|items| items.push(item));
    }

    /// 删除指定行
    pub fn remove_heading(&self, key: usize) {
        self.outline.update(|items| items.retain(|i| i.key != key));
    }

    /// 生成大纲前的主题校验
    pub fn topic(&self) -> Result<String, FormError> {
        let title = self.title.get_untracked();
        let title = title.trim();
        if title.is_empty() {
            Err(FormError::MissingTitle)
        } else {
            Ok(title.to_string())
        }
    }

    /// 将表单状态转换为 API 请求对象
    pub fn to_request(&self) -> Result<CreateProjectRequest, FormError> {
        let headings: Vec<String> = self
            .outline
            .get_untracked()
            .iter()
            .map(|i| i.heading.get_untracked())
            .collect();
        build_request(
            &self.title.get_untracked(),
            self.doc_type.get_untracked(),
            &self.context.get_untracked(),
            &headings,
        )
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_title_is_rejected() {
        let outline = vec!["Introduction".to_string()];
        let result = build_request("   ", DocType::Docx, "", &outline);
        assert_eq!(result.unwrap_err(), FormError::MissingTitle);
    }

    #[test]
    fn empty_outline_is_rejected() {
        let result = build_request("EV Industry", DocType::Docx, "", &[]);
        assert_eq!(result.unwrap_err(), FormError::EmptyOutline);

        // 只剩空白行时等同于空大纲
        let blank = vec!["  ".to_string(), "".to_string()];
        let result = build_request("EV Industry", DocType::Docx, "", &blank);
        assert_eq!(result.unwrap_err(), FormError::EmptyOutline);
    }

    #[test]
    fn blank_rows_are_dropped_and_fields_trimmed() {
        let outline = vec![
            "  Introduction ".to_string(),
            "".to_string(),
            "Conclusion".to_string(),
        ];
        let req = build_request(" EV Industry ", DocType::Pptx, " notes ", &outline).unwrap();
        assert_eq!(req.title, "EV Industry");
        assert_eq!(req.context, "notes");
        assert_eq!(req.doc_type, DocType::Pptx);
        assert_eq!(req.outline, vec!["Introduction", "Conclusion"]);
    }

    #[test]
    fn validation_messages_match_ui_copy() {
        assert_eq!(FormError::MissingTitle.to_string(), "Enter a title first");
        assert_eq!(FormError::EmptyOutline.to_string(), "Add at least one section");
    }
}
