//! Товар: карточка каталога.
//!
//! - aggregate.rs: wire-формат (`ProductDto`) — то, что ходит по HTTP
//! - draft.rs: клиентский черновик мастера создания/редактирования
//! - validation.rs: пошаговые валидаторы черновика
//! - normalize.rs: единственный мост черновик -> wire-формат

pub mod aggregate;
pub mod draft;
pub mod normalize;
pub mod validation;

pub use aggregate::{ImageDto, InventoryDto, PricingDto, ProductDto};
pub use draft::{AttributeDraft, ImageDraft, PendingFile, ProductDraft, VariantDraft};
pub use normalize::{generate_sku, normalize_product, NormalizedProduct};
pub use validation::{STEP_GENERAL, STEP_INVENTORY, STEP_MEDIA, STEP_PRICING};
