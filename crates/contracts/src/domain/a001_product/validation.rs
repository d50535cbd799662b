use super::draft::ProductDraft;
use crate::fields;
use crate::forms::error_map::{require, ErrorMap};
use crate::forms::steps::{MultiStepDraft, StepDef};

pub const STEP_GENERAL: usize = 0;
pub const STEP_PRICING: usize = 1;
pub const STEP_INVENTORY: usize = 2;
pub const STEP_MEDIA: usize = 3;

const STEPS: &[StepDef] = &[
    StepDef { index: STEP_GENERAL, title: "Основное" },
    StepDef { index: STEP_PRICING, title: "Цены" },
    StepDef { index: STEP_INVENTORY, title: "Остатки" },
    StepDef { index: STEP_MEDIA, title: "Изображения и теги" },
];

impl MultiStepDraft for ProductDraft {
    fn steps() -> &'static [StepDef] {
        STEPS
    }

    fn validate_step(&self, step: usize) -> ErrorMap {
        let mut errors = ErrorMap::new();
        match step {
            STEP_GENERAL => {
                require(
                    &mut errors,
                    !self.name.trim().is_empty(),
                    "name",
                    "Наименование обязательно для заполнения",
                );
                require(
                    &mut errors,
                    !self.category.trim().is_empty(),
                    "category",
                    "Категория обязательна для заполнения",
                );
            }
            STEP_PRICING => {
                require(
                    &mut errors,
                    !self.pricing.base_price.trim().is_empty(),
                    "pricing.basePrice",
                    "Базовая цена обязательна для заполнения",
                );
                require(
                    &mut errors,
                    fields::is_numeric_or_empty(&self.pricing.base_price),
                    "pricing.basePrice",
                    "Базовая цена должна быть числом",
                );
                require(
                    &mut errors,
                    fields::is_numeric_or_empty(&self.pricing.sale_price),
                    "pricing.salePrice",
                    "Цена со скидкой должна быть числом",
                );
                require(
                    &mut errors,
                    fields::is_numeric_or_empty(&self.pricing.list_price),
                    "pricing.listPrice",
                    "Цена по прайсу должна быть числом",
                );
                require(
                    &mut errors,
                    fields::is_numeric_or_empty(&self.pricing.cost),
                    "pricing.cost",
                    "Себестоимость должна быть числом",
                );
            }
            STEP_INVENTORY => {
                require(
                    &mut errors,
                    !self.inventory.quantity.trim().is_empty(),
                    "inventory.quantity",
                    "Остаток обязателен для заполнения",
                );
                require(
                    &mut errors,
                    self.inventory.quantity.trim().parse::<u32>().is_ok()
                        || self.inventory.quantity.trim().is_empty(),
                    "inventory.quantity",
                    "Остаток должен быть целым числом",
                );
                require(
                    &mut errors,
                    self.inventory.low_stock_threshold.trim().is_empty()
                        || self.inventory.low_stock_threshold.trim().parse::<u32>().is_ok(),
                    "inventory.lowStockThreshold",
                    "Порог остатка должен быть целым числом",
                );
            }
            // Изображения и теги не обязательны
            STEP_MEDIA => {}
            _ => {}
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::steps::validate_all;

    fn valid_draft() -> ProductDraft {
        let mut draft = ProductDraft::default();
        draft.name = "Стул".to_string();
        draft.brand = "Ikea".to_string();
        draft.category = "cat1".to_string();
        draft.pricing.base_price = "49.99".to_string();
        draft.inventory.quantity = "10".to_string();
        draft
    }

    #[test]
    fn test_missing_required_fields_per_step() {
        let draft = ProductDraft::default();

        let errors = draft.validate_step(STEP_GENERAL);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("category"));

        let errors = draft.validate_step(STEP_PRICING);
        assert!(errors.contains_key("pricing.basePrice"));

        let errors = draft.validate_step(STEP_INVENTORY);
        assert!(errors.contains_key("inventory.quantity"));
    }

    #[test]
    fn test_valid_draft_passes_all_steps() {
        let outcome = validate_all(&valid_draft());
        assert!(outcome.is_valid);
        assert_eq!(outcome.first_failing_step, None);
    }

    #[test]
    fn test_first_failing_step_reported() {
        let mut draft = valid_draft();
        draft.inventory.quantity = String::new();
        let outcome = validate_all(&draft);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.first_failing_step, Some(STEP_INVENTORY));
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let mut draft = valid_draft();
        draft.pricing.sale_price = "дорого".to_string();
        let errors = draft.validate_step(STEP_PRICING);
        assert!(errors.contains_key("pricing.salePrice"));
    }
}
