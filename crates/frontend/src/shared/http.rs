//! Общий fetch-слой поверх `web_sys`: JSON и multipart запросы к бэкенду.
//!
//! Таймауты и отмена не реализуются намеренно: уход со страницы просто
//! бросает in-flight future.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

use super::api_utils::api_url;
use super::context::RequestContext;

/// Сообщение об ошибке из тела ответа: предпочитаем структурное поле
/// `message`, затем `error`, иначе сырое тело либо статус
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    if body.trim().is_empty() {
        format!("Ошибка сервера (HTTP {})", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}

fn build_request(
    ctx: &RequestContext,
    method: &str,
    path: &str,
    body: Option<&wasm_bindgen::JsValue>,
) -> Result<Request, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(body);
    }

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    let headers = request.headers();
    headers
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    // Контекст запроса уходит явными заголовками
    headers
        .set("X-Company-Id", &ctx.company_id)
        .map_err(|e| format!("{e:?}"))?;
    headers
        .set("X-User-Id", &ctx.user_id)
        .map_err(|e| format!("{e:?}"))?;
    Ok(request)
}

async fn execute(request: Request) -> Result<(u16, String), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().unwrap_or_default();
    Ok((resp.status(), text))
}

fn parse_ok<T: DeserializeOwned>(status: u16, body: String) -> Result<T, String> {
    if !(200..300).contains(&status) {
        return Err(extract_error_message(status, &body));
    }
    serde_json::from_str(&body).map_err(|e| format!("{e}"))
}

pub async fn get_json<T: DeserializeOwned>(ctx: &RequestContext, path: &str) -> Result<T, String> {
    let request = build_request(ctx, "GET", path, None)?;
    let (status, body) = execute(request).await?;
    if status == 404 {
        return Err("Запись не найдена".to_string());
    }
    parse_ok(status, body)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    ctx: &RequestContext,
    path: &str,
    payload: &B,
) -> Result<T, String> {
    send_json(ctx, "POST", path, payload).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    ctx: &RequestContext,
    path: &str,
    payload: &B,
) -> Result<T, String> {
    send_json(ctx, "PUT", path, payload).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    ctx: &RequestContext,
    method: &str,
    path: &str,
    payload: &B,
) -> Result<T, String> {
    let body = serde_json::to_string(payload).map_err(|e| format!("{e}"))?;
    let body = wasm_bindgen::JsValue::from_str(&body);
    let request = build_request(ctx, method, path, Some(&body))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    let (status, body) = execute(request).await?;
    parse_ok(status, body)
}

/// Multipart-конверт: ровно одно JSON-текстовое поле с метаданными плюс
/// бинарные части. Content-Type не выставляем — браузер сам добавит boundary.
pub async fn post_multipart<T: DeserializeOwned>(
    ctx: &RequestContext,
    path: &str,
    form_data: &FormData,
) -> Result<T, String> {
    let request = build_request(ctx, "POST", path, Some(form_data.as_ref()))?;
    let (status, body) = execute(request).await?;
    parse_ok(status, body)
}

pub async fn delete(ctx: &RequestContext, path: &str) -> Result<(), String> {
    let request = build_request(ctx, "DELETE", path, None)?;
    let (status, body) = execute(request).await?;
    if !(200..300).contains(&status) {
        return Err(extract_error_message(status, &body));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::extract_error_message;

    #[test]
    fn test_prefers_structured_message() {
        assert_eq!(
            extract_error_message(422, r#"{"message":"SKU уже занят"}"#),
            "SKU уже занят"
        );
        assert_eq!(
            extract_error_message(400, r#"{"error":"bad request"}"#),
            "bad request"
        );
    }

    #[test]
    fn test_fallback_to_generic() {
        assert_eq!(extract_error_message(500, ""), "Ошибка сервера (HTTP 500)");
        assert_eq!(extract_error_message(500, "boom"), "HTTP 500: boom");
    }
}
