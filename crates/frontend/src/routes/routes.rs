use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::SalesDashboard;
use crate::domain::a001_product::ui::{ProductDetailsPage, ProductList};
use crate::domain::a002_worker::ui::{WorkerDetailsPage, WorkerList};
use crate::domain::a003_branch::ui::{BranchDetailsPage, BranchList};
use crate::domain::a004_sale::ui::SalesList;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;

/// Маршрут списка из пути формы: отрезаем хвостовой `/add`, `/new`
/// или `/:id/edit`, языковой префикс сохраняется.
pub fn list_route_from_form_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if let Some(base) = trimmed
        .strip_suffix("/add")
        .or_else(|| trimmed.strip_suffix("/new"))
    {
        return base.to_string();
    }
    if let Some(base) = trimmed.strip_suffix("/edit") {
        if let Some(pos) = base.rfind('/') {
            return base[..pos].to_string();
        }
    }
    trimmed.to_string()
}

#[component]
fn ConsoleLayout() -> impl IntoView {
    view! {
        <Shell>
            <Outlet />
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="not-found">"Страница не найдена"</div> }>
                <Route path=path!("/") view=HomePage />
                <ParentRoute path=path!("/:locale") view=ConsoleLayout>
                    <Route path=path!("dashboard") view=SalesDashboard />
                    <Route path=path!("products") view=ProductList />
                    <Route path=path!("products/add") view=ProductDetailsPage />
                    <Route path=path!("products/:id/edit") view=ProductDetailsPage />
                    <Route path=path!("workers") view=WorkerList />
                    <Route path=path!("workers/add") view=WorkerDetailsPage />
                    <Route path=path!("workers/:id/edit") view=WorkerDetailsPage />
                    <Route path=path!("branches") view=BranchList />
                    <Route path=path!("branches/add") view=BranchDetailsPage />
                    <Route path=path!("branches/:id/edit") view=BranchDetailsPage />
                    <Route path=path!("sales") view=SalesList />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_add_segment() {
        assert_eq!(list_route_from_form_path("/ru/products/add"), "/ru/products");
        assert_eq!(list_route_from_form_path("/en/workers/new"), "/en/workers");
        assert_eq!(list_route_from_form_path("/ru/products/add/"), "/ru/products");
    }

    #[test]
    fn test_strip_edit_segment() {
        assert_eq!(
            list_route_from_form_path("/ru/products/42/edit"),
            "/ru/products"
        );
    }

    #[test]
    fn test_list_path_unchanged() {
        assert_eq!(list_route_from_form_path("/ru/products"), "/ru/products");
    }
}
