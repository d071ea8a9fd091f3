//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心引擎的 `HttpClient`。

use async_trait::async_trait;
use masktronic::request::{HttpClient, HttpRequest, HttpResponse};
use masktronic::{ConsoleError, ConsoleResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn js_error(context: &str, e: JsValue) -> ConsoleError {
    ConsoleError::transport(format!("{}: {:?}", context, e))
}

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHttpClient;

impl BrowserHttpClient {
    fn build(req: &HttpRequest) -> ConsoleResult<Request> {
        let headers = Headers::new().map_err(|e| js_error("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_error("设置 Header 失败", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts).map_err(|e| js_error("请求构建失败", e))
    }

    async fn read_text(response: &Response) -> ConsoleResult<String> {
        let promise = response
            .text()
            .map_err(|e| ConsoleError::parse(format!("{:?}", e)))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| ConsoleError::parse(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| ConsoleError::parse("响应体无法转换为字符串"))
    }
}

#[async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn send(&self, req: HttpRequest) -> ConsoleResult<HttpResponse> {
        let request = Self::build(&req)?;

        let window =
            web_sys::window().ok_or_else(|| ConsoleError::transport("无法获取 window 对象"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("网络错误", e))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| js_error("Response 类型转换失败", e))?;

        let body = Self::read_text(&response).await?;
        Ok(HttpResponse {
            status: response.status(),
            body,
        })
    }
}
