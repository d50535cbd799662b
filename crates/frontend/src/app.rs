use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::context::RequestContext;

#[component]
pub fn App() -> impl IntoView {
    // Единственная точка, где амбиентное состояние сессии превращается в
    // явный RequestContext: дальше он передаётся параметром.
    provide_context(RequestContext::bootstrap());

    view! {
        <AppRoutes />
    }
}
