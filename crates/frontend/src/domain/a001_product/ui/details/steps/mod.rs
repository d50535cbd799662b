mod general;
mod inventory;
mod media;
mod pricing;

pub use general::GeneralStep;
pub use inventory::InventoryStep;
pub use media::MediaStep;
pub use pricing::PricingStep;

use leptos::prelude::*;

use super::view_model::ProductDetailsViewModel;

/// Сигнал ошибки поля по его dot-пути в карте ошибок
pub(super) fn field_error(
    vm: ProductDetailsViewModel,
    path: &'static str,
) -> Signal<Option<String>> {
    Signal::derive(move || vm.form.get().error_for(path).map(str::to_string))
}
