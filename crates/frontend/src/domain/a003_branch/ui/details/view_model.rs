
use contracts::domain::a003_branch::{normalize_branch, BranchDraft, BranchDto};
use contracts::forms::submission::apply_rejection;
use contracts::forms::{decide_submit, FormState, SubmissionPhase, SubmitDecision};
use leptos::prelude::*;
use serde::Deserialize;

use crate::shared::context::RequestContext;
use crate::shared::http;

#[derive(Debug, Clone, Deserialize)]
struct SaveResponse {
    id: String,
}

async fn fetch_by_id(ctx: &RequestContext, id: &str) -> Result<BranchDto, String> {
    http::get_json(ctx, &format!("/api/branches/{}", id)).await
}

async fn save(ctx: &RequestContext, payload: &BranchDto) -> Result<String, String> {
    let resp: SaveResponse = match &payload.id {
        Some(id) => http::put_json(ctx, &format!("/api/branches/{}", id), payload).await?,
        None => http::post_json(ctx, "/api/branches", payload).await?,
    };
    Ok(resp.id)
}

#[derive(Clone, Copy)]
pub struct BranchDetailsViewModel {
    pub form: RwSignal<FormState<BranchDraft>>,
    pub phase: RwSignal<SubmissionPhase>,
    pub load_error: RwSignal<Option<String>>,
}

impl BranchDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(FormState::new()),
            phase: RwSignal::new(SubmissionPhase::Editing),
            load_error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|s| s.draft.existing_id.is_some())
    }

    pub fn load_if_needed(&self, ctx: RequestContext, id: Option<String>) {
        let Some(id) = id else {
            return;
        };
        let form = self.form;
        let load_error = self.load_error;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_by_id(&ctx, &id).await {
                Ok(dto) => form.set(FormState::from_draft(BranchDraft::from_dto(&dto))),
                Err(e) => load_error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

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

        let payload = match normalize_branch(&draft) {
            Ok(dto) => dto,
            Err(e) => {
                self.phase.set(SubmissionPhase::Failed(e));
                return;
            }
        };

        self.phase.set(SubmissionPhase::Submitting);
        let phase = self.phase;
        wasm_bindgen_futures::spawn_local(async move {
            match save(&ctx, &payload).await {
                Ok(_) => {
                    phase.set(SubmissionPhase::Success);
                    gloo_timers::future::TimeoutFuture::new(900).await;
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Ошибка сохранения филиала: {}", e);
                    phase.set(SubmissionPhase::Failed(e));
                }
            }
        });
    }
}
