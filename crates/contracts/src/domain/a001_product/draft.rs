use super::aggregate::ProductDto;

/// Метаданные ещё не загруженного бинарного файла. Сами байты
/// (`web_sys::File`) живут во фронтенде параллельным вектором по индексу
/// слота — контракты остаются свободными от wasm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingFile {
    pub name: String,
}

/// Слот изображения в черновике. `url` — либо существующий URL (режим
/// редактирования), либо сессионное превью выбранного файла
/// (`blob:`/`data:`); при нормализации превью в payload не попадает.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageDraft {
    pub url: String,
    pub is_primary: bool,
    pub pending_file: Option<PendingFile>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeDraft {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantDraft {
    pub name: String,
    /// Варианты значений через запятую до нормализации
    pub options: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingDraft {
    pub base_price: String,
    pub sale_price: String,
    pub list_price: String,
    pub cost: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryDraft {
    pub track_quantity: bool,
    pub quantity: String,
    pub low_stock_threshold: String,
    pub allow_backorder: bool,
}

impl Default for InventoryDraft {
    fn default() -> Self {
        Self {
            track_quantity: true,
            quantity: String::new(),
            low_stock_threshold: String::new(),
            allow_backorder: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptionDraft {
    pub short: String,
    pub long: String,
}

/// Черновик товара: числовые поля — строки (пустой input), коэрция
/// выполняется только нормализатором.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub sku: String,
    pub barcode: String,
    pub description: DescriptionDraft,
    pub pricing: PricingDraft,
    pub inventory: InventoryDraft,
    pub images: Vec<ImageDraft>,
    pub tags: Vec<String>,
    pub attributes: Vec<AttributeDraft>,
    pub variants: Vec<VariantDraft>,
}

impl ProductDraft {
    /// Гидратация черновика из существующей записи (режим редактирования)
    pub fn from_dto(dto: &ProductDto) -> Self {
        Self {
            name: dto.name.clone(),
            brand: dto.brand.clone(),
            category: dto.category.clone(),
            sku: dto.sku.clone(),
            barcode: dto.barcode.clone(),
            description: DescriptionDraft {
                short: dto.description.short.clone(),
                long: dto.description.long.clone(),
            },
            pricing: PricingDraft {
                base_price: dto.pricing.base_price.to_string(),
                sale_price: dto
                    .pricing
                    .sale_price
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
                list_price: dto
                    .pricing
                    .list_price
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
                cost: dto.pricing.cost.to_string(),
                currency: dto.pricing.currency.clone(),
            },
            inventory: InventoryDraft {
                track_quantity: dto.inventory.track_quantity,
                quantity: dto.inventory.quantity.to_string(),
                low_stock_threshold: dto.inventory.low_stock_threshold.to_string(),
                allow_backorder: dto.inventory.allow_backorder,
            },
            images: dto
                .images
                .iter()
                .map(|img| ImageDraft {
                    url: img.url.clone(),
                    is_primary: img.is_primary,
                    pending_file: None,
                })
                .collect(),
            tags: dto.tags.clone(),
            attributes: dto
                .attributes
                .iter()
                .map(|a| AttributeDraft {
                    name: a.name.clone(),
                    value: a.value.clone(),
                })
                .collect(),
            variants: dto
                .variants
                .iter()
                .map(|v| VariantDraft {
                    name: v.name.clone(),
                    options: v.options.join(", "),
                })
                .collect(),
        }
    }

    /// Добавить изображения. Первое изображение пустого списка неявно
    /// становится основным.
    pub fn add_images(&mut self, new_images: Vec<ImageDraft>) {
        for mut image in new_images {
            image.is_primary = self.images.is_empty();
            self.images.push(image);
        }
    }

    /// Удалить слот. Если удалили основное изображение и слоты остались,
    /// основным становится новый индекс 0.
    pub fn remove_image(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        let was_primary = self.images[index].is_primary;
        self.images.remove(index);
        if was_primary {
            if let Some(first) = self.images.first_mut() {
                first.is_primary = true;
            }
        }
    }

    /// Назначить основное изображение. Флаг снимается со всех остальных:
    /// основное изображение всегда ровно одно.
    pub fn set_primary_image(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        for (i, image) in self.images.iter_mut().enumerate() {
            image.is_primary = i == index;
        }
    }

    /// Добавить тег: set-семантика поверх упорядоченного списка
    pub fn add_tag(&mut self, value: &str) {
        let tag = value.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return;
        }
        self.tags.push(tag.to_string());
    }

    pub fn remove_tag(&mut self, value: &str) {
        self.tags.retain(|t| t != value);
    }

    /// Есть ли хоть один слот с ожидающим загрузки файлом
    pub fn has_pending_files(&self) -> bool {
        self.images.iter().any(|img| img.pending_file.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: &str) -> ImageDraft {
        ImageDraft {
            url: url.to_string(),
            is_primary: false,
            pending_file: None,
        }
    }

    fn primary_indexes(draft: &ProductDraft) -> Vec<usize> {
        draft
            .images
            .iter()
            .enumerate()
            .filter(|(_, img)| img.is_primary)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_first_image_becomes_primary() {
        let mut draft = ProductDraft::default();
        draft.add_images(vec![image("a"), image("b")]);
        assert_eq!(primary_indexes(&draft), vec![0]);
    }

    #[test]
    fn test_set_primary_is_exclusive() {
        let mut draft = ProductDraft::default();
        draft.add_images(vec![image("a"), image("b"), image("c")]);
        draft.set_primary_image(2);
        assert_eq!(primary_indexes(&draft), vec![2]);
        draft.set_primary_image(1);
        assert_eq!(primary_indexes(&draft), vec![1]);
    }

    #[test]
    fn test_remove_primary_falls_back_to_first() {
        let mut draft = ProductDraft::default();
        draft.add_images(vec![image("a"), image("b"), image("c")]);
        draft.remove_image(0);
        assert_eq!(draft.images.len(), 2);
        assert_eq!(primary_indexes(&draft), vec![0]);
        assert_eq!(draft.images[0].url, "b");
    }

    #[test]
    fn test_remove_non_primary_keeps_primary() {
        let mut draft = ProductDraft::default();
        draft.add_images(vec![image("a"), image("b"), image("c")]);
        draft.remove_image(2);
        assert_eq!(primary_indexes(&draft), vec![0]);
    }

    #[test]
    fn test_tags_set_semantics() {
        let mut draft = ProductDraft::default();
        draft.add_tag("акция");
        draft.add_tag("  акция ");
        draft.add_tag("");
        draft.add_tag("новинка");
        assert_eq!(draft.tags, vec!["акция", "новинка"]);

        draft.remove_tag("акция");
        assert_eq!(draft.tags, vec!["новинка"]);
    }
}
