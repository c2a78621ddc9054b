//! 文件下载封装模块
//!
//! 导出接口需要携带认证头，无法用裸 `<a href>` 直连，
//! 因此先 fetch 字节流，再通过 Blob + Object URL 触发浏览器下载。

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// 将字节流保存为本地文件
///
/// 创建一个临时 `<a download>` 元素并模拟点击，完成后立即回收
/// Object URL 与 DOM 节点。
pub fn save_file(bytes: &[u8], mime_type: &str, file_name: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "Document is not available".to_string())?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor element: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Anchor element cast failed".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| "Document body is not available".to_string())?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to attach anchor element: {:?}", e))?;

    anchor.click();
    anchor.remove();
    let _ = Url::revoke_object_url(&url);

    Ok(())
}
