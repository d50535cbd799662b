use super::aggregate::{
    AttributeDto, DescriptionDto, ImageDto, InventoryDto, PricingDto, ProductDto, VariantDto,
};
use super::draft::ProductDraft;
use crate::fields;

/// Итог нормализации: wire-payload и признак multipart-конверта.
///
/// Multipart нужен ровно тогда, когда к черновику прикреплены бинарные
/// файлы. Метаданные в обоих режимах совпадают по всем не-картиночным полям.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProduct {
    pub payload: ProductDto,
    pub is_multipart: bool,
}

/// Единственный мост из stringly-typed черновика в wire-формат.
/// Тотальная функция: либо валидный payload, либо ошибка — NaN до
/// сети не доходит.
pub fn normalize_product(draft: &ProductDraft) -> Result<NormalizedProduct, String> {
    let is_multipart = draft.has_pending_files();

    let pricing = PricingDto {
        // Пустая строка — 0: обязательная цена
        base_price: fields::parse_money(&draft.pricing.base_price)?,
        // Пустая строка — None: "нет цены со скидкой", а не "бесплатно"
        sale_price: fields::parse_money_opt(&draft.pricing.sale_price)?,
        list_price: fields::parse_money_opt(&draft.pricing.list_price)?,
        cost: fields::parse_money(&draft.pricing.cost)?,
        currency: if draft.pricing.currency.trim().is_empty() {
            "RUB".to_string()
        } else {
            draft.pricing.currency.trim().to_uppercase()
        },
    };

    let inventory = InventoryDto {
        track_quantity: draft.inventory.track_quantity,
        quantity: fields::parse_quantity(&draft.inventory.quantity)?,
        low_stock_threshold: fields::parse_quantity(&draft.inventory.low_stock_threshold)?,
        allow_backorder: draft.inventory.allow_backorder,
    };

    let images = draft
        .images
        .iter()
        .map(|img| ImageDto {
            // Превью (data: или blob:) не дублируем: байты файла уйдут
            // multipart-частью, а сессионный URL бэкенду бесполезен
            url: if img.pending_file.is_some() {
                String::new()
            } else {
                img.url.clone()
            },
            is_primary: img.is_primary,
        })
        .collect();

    let sku = if draft.sku.trim().is_empty() {
        generate_sku(&draft.brand, &draft.name, random_suffix())
    } else {
        draft.sku.trim().to_string()
    };

    let payload = ProductDto {
        id: None,
        name: draft.name.trim().to_string(),
        brand: draft.brand.trim().to_string(),
        category: draft.category.trim().to_string(),
        sku,
        barcode: draft.barcode.trim().to_string(),
        description: DescriptionDto {
            short: draft.description.short.trim().to_string(),
            long: draft.description.long.trim().to_string(),
        },
        pricing,
        inventory,
        images,
        tags: draft.tags.clone(),
        attributes: draft
            .attributes
            .iter()
            .filter(|a| !a.name.trim().is_empty())
            .map(|a| AttributeDto {
                name: a.name.trim().to_string(),
                value: a.value.trim().to_string(),
            })
            .collect(),
        variants: draft
            .variants
            .iter()
            .filter(|v| !v.name.trim().is_empty())
            .map(|v| VariantDto {
                name: v.name.trim().to_string(),
                options: v
                    .options
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect(),
            })
            .collect(),
        created_at: None,
        updated_at: None,
    };

    Ok(NormalizedProduct {
        payload,
        is_multipart,
    })
}

/// Автогенерация SKU: `BRA-NAM-NNNN` из первых трёх букв бренда и
/// наименования. Суффикс случайный, уникальность не гарантируется —
/// известный пробел исходного контракта, тестируем только форму.
pub fn generate_sku(brand: &str, name: &str, suffix: u32) -> String {
    format!(
        "{}-{}-{:04}",
        sku_part(brand, "GEN"),
        sku_part(name, "PROD"),
        suffix % 10_000
    )
}

fn sku_part(value: &str, fallback: &str) -> String {
    let letters: String = value
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(3)
        .collect::<String>()
        .to_uppercase();
    if letters.is_empty() {
        fallback.to_string()
    } else {
        letters
    }
}

/// Четырёхзначный суффикс из v4 UUID: один и тот же код работает
/// и под wasm (feature `js`), и в нативных тестах
fn random_suffix() -> u32 {
    (uuid::Uuid::new_v4().as_u128() % 10_000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::draft::{ImageDraft, PendingFile};

    fn chair_draft() -> ProductDraft {
        let mut draft = ProductDraft::default();
        draft.name = "Chair".to_string();
        draft.brand = "Ikea".to_string();
        draft.category = "cat1".to_string();
        draft.pricing.base_price = "49.99".to_string();
        draft.inventory.quantity = "10".to_string();
        draft
    }

    #[test]
    fn test_numeric_coercion() {
        let normalized = normalize_product(&chair_draft()).unwrap();
        assert!(!normalized.is_multipart);
        assert_eq!(normalized.payload.pricing.base_price, 49.99);
        assert_eq!(normalized.payload.inventory.quantity, 10);
        // Пустая цена со скидкой отсутствует, а не равна нулю
        assert_eq!(normalized.payload.pricing.sale_price, None);
        assert_eq!(normalized.payload.pricing.cost, 0.0);
    }

    #[test]
    fn test_optional_prices_omitted_from_json() {
        let normalized = normalize_product(&chair_draft()).unwrap();
        let json = serde_json::to_value(&normalized.payload).unwrap();
        assert!(json["pricing"].get("salePrice").is_none());
        assert!(json["pricing"].get("listPrice").is_none());
        assert_eq!(json["pricing"]["basePrice"], 49.99);
    }

    #[test]
    fn test_sku_autogenerated_shape() {
        let normalized = normalize_product(&chair_draft()).unwrap();
        let sku = &normalized.payload.sku;
        let parts: Vec<&str> = sku.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "IKE");
        assert_eq!(parts[1], "CHA");
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_sku_fallback_parts() {
        assert_eq!(generate_sku("", "", 7), "GEN-PROD-0007");
        assert_eq!(generate_sku("Ikea", "Chair", 123), "IKE-CHA-0123");
    }

    #[test]
    fn test_explicit_sku_preserved() {
        let mut draft = chair_draft();
        draft.sku = " ABC-1 ".to_string();
        let normalized = normalize_product(&draft).unwrap();
        assert_eq!(normalized.payload.sku, "ABC-1");
    }

    #[test]
    fn test_multipart_detection_and_preview_stripping() {
        let mut draft = chair_draft();
        draft.add_images(vec![
            ImageDraft {
                url: "data:image/png;base64,AAAA".to_string(),
                is_primary: false,
                pending_file: Some(PendingFile { name: "a.png".to_string() }),
            },
            ImageDraft {
                url: "https://cdn.example.com/b.png".to_string(),
                is_primary: false,
                pending_file: None,
            },
            // Object-URL превью, как его создаёт браузер при выборе файла
            ImageDraft {
                url: "blob:http://localhost/7f9a".to_string(),
                is_primary: false,
                pending_file: Some(PendingFile { name: "c.png".to_string() }),
            },
        ]);

        let normalized = normalize_product(&draft).unwrap();
        assert!(normalized.is_multipart);
        // Превью выпотрошены независимо от схемы, существующий URL не тронут
        assert_eq!(normalized.payload.images[0].url, "");
        assert_eq!(normalized.payload.images[1].url, "https://cdn.example.com/b.png");
        assert_eq!(normalized.payload.images[2].url, "");
        assert!(normalized.payload.images[0].is_primary);
    }

    #[test]
    fn test_metadata_equal_between_modes() {
        let mut plain = chair_draft();
        plain.add_images(vec![ImageDraft {
            url: "https://cdn.example.com/a.png".to_string(),
            is_primary: false,
            pending_file: None,
        }]);

        let mut with_file = plain.clone();
        with_file.sku = "FIX-1".to_string();
        plain.sku = "FIX-1".to_string();
        with_file.images.push(ImageDraft {
            url: String::new(),
            is_primary: false,
            pending_file: Some(PendingFile { name: "b.png".to_string() }),
        });

        let a = normalize_product(&plain).unwrap();
        let b = normalize_product(&with_file).unwrap();
        assert!(!a.is_multipart);
        assert!(b.is_multipart);
        // Все не-картиночные поля совпадают
        assert_eq!(a.payload.pricing, b.payload.pricing);
        assert_eq!(a.payload.inventory, b.payload.inventory);
        assert_eq!(a.payload.name, b.payload.name);
        assert_eq!(a.payload.sku, b.payload.sku);
    }

    #[test]
    fn test_garbage_number_is_error_not_nan() {
        let mut draft = chair_draft();
        draft.pricing.base_price = "abc".to_string();
        assert!(normalize_product(&draft).is_err());
    }
}
