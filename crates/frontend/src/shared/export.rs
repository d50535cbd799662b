/// Экспорт таблиц: CSV и XLSX (скачивание через Blob) и версия для печати.
/// Экспортируется текущий отфильтрованный набор строк, не вся коллекция.
use rust_xlsxwriter::{Format, Workbook};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait для типов, которые могут быть выгружены в таблицу
pub trait TableExportable {
    /// Заголовки колонок
    fn headers() -> Vec<&'static str>;

    /// Строка значений для выгрузки
    fn to_row(&self) -> Vec<String>;
}

/// Выгрузить строки в CSV и инициировать скачивание
pub fn export_to_csv<T: TableExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }

    let mut csv_content = String::new();

    // UTF-8 BOM для корректного открытия кириллицы в Excel
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&T::headers().join(";"));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }

    let blob = create_blob(&csv_content, "text/csv;charset=utf-8;")?;
    download_blob(&blob, filename)
}

/// Выгрузить строки в XLSX и инициировать скачивание
pub fn export_to_xlsx<T: TableExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }

    let bytes = build_xlsx(
        &T::headers(),
        &data.iter().map(|r| r.to_row()).collect::<Vec<_>>(),
    )?;
    let blob = create_binary_blob(
        &bytes,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    )?;
    download_blob(&blob, filename)
}

/// Сборка книги в память: чистая функция, тестируется нативно
fn build_xlsx(headers: &[&str], rows: &[Vec<String>]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| e.to_string())?;
    }
    for (row_index, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet
                .write_string((row_index + 1) as u32, col as u16, cell)
                .map_err(|e| e.to_string())?;
        }
    }

    workbook.save_to_buffer().map_err(|e| e.to_string())
}

/// Открыть версию для печати: собранный HTML уходит в новое окно через
/// object URL, печать запускает встроенный в страницу onload-скрипт.
/// PDF получается штатной печатью браузера.
pub fn open_print_view<T: TableExportable>(data: &[T], title: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Нет данных для печати".to_string());
    }

    let html = build_print_html(
        title,
        &T::headers(),
        &data.iter().map(|r| r.to_row()).collect::<Vec<_>>(),
    );

    let blob = create_blob(&html, "text/html;charset=utf-8")?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("{e:?}"))?
        .ok_or("Окно печати заблокировано браузером")?;
    Ok(())
}

/// HTML печатной формы: чистая сборка строки, тестируется нативно
pub fn build_print_html(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    html.push_str("<style>body{font-family:sans-serif;margin:24px}h1{font-size:18px}table{border-collapse:collapse;width:100%}th,td{border:1px solid #999;padding:4px 8px;font-size:12px;text-align:left}th{background:#eee}</style>");
    html.push_str("</head><body><h1>");
    html.push_str(&escape_html(title));
    html.push_str("</h1><table><thead><tr>");
    for header in headers {
        html.push_str("<th>");
        html.push_str(&escape_html(header));
        html.push_str("</th>");
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&escape_html(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html.push_str("<script>window.addEventListener('load',function(){window.print()})</script>");
    html.push_str("</body></html>");
    html
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn create_binary_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_buffer_source_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("обычная"), "обычная");
        assert_eq!(escape_csv_cell("а;б"), "\"а;б\"");
        assert_eq!(escape_csv_cell("с \"кавычками\""), "\"с \"\"кавычками\"\"\"");
    }

    #[test]
    fn test_print_html_escapes_cells() {
        let html = build_print_html(
            "Продажи",
            &["Документ"],
            &[vec!["<script>".to_string()]],
        );
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<h1>Продажи</h1>"));
    }

    #[test]
    fn test_print_html_triggers_print_on_load() {
        let html = build_print_html("Товары", &["Наименование"], &[]);
        assert!(html.contains("window.print()"));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn test_xlsx_workbook_is_built() {
        let bytes = build_xlsx(
            &["Наименование", "Цена"],
            &[vec!["Стол".to_string(), "250".to_string()]],
        )
        .unwrap();
        // XLSX — это zip-контейнер
        assert_eq!(&bytes[..2], b"PK");
    }
}
