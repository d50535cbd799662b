use leptos::prelude::*;

/// Явный контекст запроса вместо разбросанных по компонентам ambient-хуков.
///
/// Формируется один раз при старте приложения и передаётся в model-слой
/// параметром: валидаторы и движок форм остаются тестируемыми без
/// каких-либо framework-провайдеров.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    pub user_id: String,
    pub company_id: String,
    /// Языковой префикс маршрутов ("ru", "en")
    pub locale: String,
}

impl RequestContext {
    /// Собрать контекст из сохранённой сессии (localStorage) с дефолтами
    pub fn bootstrap() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        let read = |key: &str, fallback: &str| -> String {
            storage
                .as_ref()
                .and_then(|s| s.get_item(key).ok().flatten())
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            user_id: read("session.userId", "anonymous"),
            company_id: read("session.companyId", "default"),
            locale: read("session.locale", "ru"),
        }
    }
}

/// Достать контекст, предоставленный в `App`
pub fn use_request_context() -> RequestContext {
    use_context::<RequestContext>().expect("RequestContext not provided")
}
