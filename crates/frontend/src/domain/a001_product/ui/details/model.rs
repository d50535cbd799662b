use contracts::domain::a001_product::ProductDto;
use serde::Deserialize;

use crate::shared::context::RequestContext;
use crate::shared::http;

#[derive(Debug, Clone, Deserialize)]
pub struct SaveResponse {
    pub id: String,
}

pub async fn fetch_by_id(ctx: &RequestContext, id: &str) -> Result<ProductDto, String> {
    http::get_json(ctx, &format!("/api/products/{}", id)).await
}

/// Создание/обновление без файлов: обычный JSON
pub async fn save_json(ctx: &RequestContext, payload: &ProductDto) -> Result<String, String> {
    let resp: SaveResponse = match &payload.id {
        Some(id) => http::put_json(ctx, &format!("/api/products/{}", id), payload).await?,
        None => http::post_json(ctx, "/api/products", payload).await?,
    };
    Ok(resp.id)
}

/// Multipart-конверт: метаданные одним JSON-полем `productData`,
/// файлы — бинарными частями. Middleware бэкенда ждёт ровно такую форму,
/// а не расплющенные form-поля.
pub async fn save_multipart(
    ctx: &RequestContext,
    payload: &ProductDto,
    files: &[Option<web_sys::File>],
) -> Result<String, String> {
    let form_data = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    let metadata = serde_json::to_string(payload).map_err(|e| format!("{e}"))?;
    form_data
        .append_with_str("productData", &metadata)
        .map_err(|e| format!("{e:?}"))?;

    for file in files.iter().flatten() {
        form_data
            .append_with_blob_and_filename("images", file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }

    let resp: SaveResponse = http::post_multipart(ctx, "/api/products", &form_data).await?;
    Ok(resp.id)
}
