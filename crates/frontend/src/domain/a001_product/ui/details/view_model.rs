use contracts::domain::a001_product::{
    normalize_product, ImageDraft, PendingFile, ProductDraft,
};
use contracts::forms::submission::apply_rejection;
use contracts::forms::{decide_submit, FormState, SubmissionPhase, SubmitDecision};
use leptos::prelude::*;
use web_sys::Url;

use super::model;
use crate::shared::context::RequestContext;

/// ViewModel мастера товара.
///
/// Бинарные файлы лежат вне черновика параллельным вектором по индексу
/// слота изображения: контракты остаются свободными от wasm-типов.
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<FormState<ProductDraft>>,
    pub phase: RwSignal<SubmissionPhase>,
    pub load_error: RwSignal<Option<String>>,
    files: StoredValue<Vec<Option<web_sys::File>>, LocalStorage>,
    existing_id: RwSignal<Option<String>>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(FormState::new()),
            phase: RwSignal::new(SubmissionPhase::Editing),
            load_error: RwSignal::new(None),
            files: StoredValue::new_local(Vec::new()),
            existing_id: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.existing_id.get().is_some()
    }

    /// Гидратировать черновик из существующей записи (режим редактирования)
    pub fn load_if_needed(&self, ctx: RequestContext, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        self.existing_id.set(Some(existing_id.clone()));

        let form = self.form;
        let files = self.files;
        let load_error = self.load_error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&ctx, &existing_id).await {
                Ok(dto) => {
                    let draft = ProductDraft::from_dto(&dto);
                    files.set_value(vec![None; draft.images.len()]);
                    form.set(FormState::from_draft(draft));
                }
                Err(e) => load_error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    /// Добавить выбранные файлы: превью через object URL, байты — в
    /// параллельный вектор для multipart-отправки
    pub fn add_files(&self, new_files: Vec<web_sys::File>) {
        let mut drafts = Vec::with_capacity(new_files.len());
        for file in &new_files {
            let preview = Url::create_object_url_with_blob(file).unwrap_or_default();
            drafts.push(ImageDraft {
                url: preview,
                is_primary: false,
                pending_file: Some(PendingFile { name: file.name() }),
            });
        }
        self.files
            .update_value(|slots| slots.extend(new_files.into_iter().map(Some)));
        self.form.update(|s| s.draft.add_images(drafts));
    }

    pub fn remove_image(&self, index: usize) {
        self.files.update_value(|slots| {
            if index < slots.len() {
                slots.remove(index);
            }
        });
        self.form.update(|s| s.draft.remove_image(index));
    }

    pub fn set_primary(&self, index: usize) {
        self.form.update(|s| s.draft.set_primary_image(index));
    }

    /// Отправка: валидация всех шагов -> нормализация -> API.
    /// При отказе валидации сеть не трогаем и возвращаем пользователя
    /// на первый сбойный шаг.
    pub fn save_command(&self, ctx: RequestContext, on_saved: Callback<()>) {
        if self.phase.get_untracked().is_busy() {
            return;
        }
        self.phase.set(SubmissionPhase::Validating);

        let draft = self.form.get_untracked().draft;
        match decide_submit(&draft) {
            SubmitDecision::Rejected {
                first_failing_step,
                errors,
            } => {
                self.form
                    .update(|s| apply_rejection(s, first_failing_step, errors));
                self.phase.set(SubmissionPhase::Editing);
                return;
            }
            SubmitDecision::Proceed => {}
        }

        let mut normalized = match normalize_product(&draft) {
            Ok(n) => n,
            Err(e) => {
                self.phase.set(SubmissionPhase::Failed(e));
                return;
            }
        };
        normalized.payload.id = self.existing_id.get_untracked();

        self.phase.set(SubmissionPhase::Submitting);
        let phase = self.phase;
        let files = self.files.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = if normalized.is_multipart {
                model::save_multipart(&ctx, &normalized.payload, &files).await
            } else {
                model::save_json(&ctx, &normalized.payload).await
            };
            match result {
                Ok(_) => {
                    phase.set(SubmissionPhase::Success);
                    // Короткая пауза, чтобы подтверждение успели увидеть
                    gloo_timers::future::TimeoutFuture::new(900).await;
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Ошибка сохранения товара: {}", e);
                    phase.set(SubmissionPhase::Failed(e));
                }
            }
        });
    }
}
