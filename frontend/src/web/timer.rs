//! 定时器与时钟
//!
//! 使用 `setTimeout` 与 `Date.now()` 实现核心引擎的 `Runtime`。

use async_trait::async_trait;
use masktronic::runtime::Runtime;
use masktronic_shared::Timestamp;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// 等待指定时长；没有 window（例如在 worker 中）时立即返回
pub async fn sleep(duration: Duration) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let millis = duration.as_millis().min(i32::MAX as u128) as i32;

    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            .is_err()
        {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// 浏览器运行时
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRuntime;

#[async_trait(?Send)]
impl Runtime for BrowserRuntime {
    fn now(&self) -> Timestamp {
        Timestamp::new(js_sys::Date::now() as i64)
    }

    async fn sleep(&self, duration: Duration) {
        sleep(duration).await;
    }
}
