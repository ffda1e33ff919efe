//! Apply Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FormError;
use crate::context::use_app_context;
use crate::store::{store_show_toast, use_app_store, AppStateStoreFields};
use crate::submissions::{self, Submission};

#[component]
pub fn ApplyForm(job_id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (cover_letter, set_cover_letter) = signal(String::new());
    let (resume_url, set_resume_url) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let user = store.current_user().get_untracked();
        let cover = cover_letter.get_untracked();
        let resume = resume_url.get_untracked();
        let api = ctx.api();
        set_error.set(None);
        set_pending.set(true);

        spawn_local(async move {
            let result = submissions::apply_to_job(api.as_ref(), user.as_ref(), job_id, cover, resume).await;
            set_pending.set(false);
            match result {
                Ok(_) => {
                    ctx.close_modal();
                    store_show_toast(store, Submission::Apply.succeeded());
                }
                Err(err) => set_error.set(Some(Submission::Apply.error_text(&err))),
            }
        });
    };

    view! {
        <form id="applyForm" on:submit=on_submit>
            <FormError error=error />
            <div class="mb-3">
                <label class="form-label" for="coverLetter">"Cover Letter"</label>
                <textarea
                    id="coverLetter"
                    class="form-control"
                    rows="5"
                    placeholder="Tell the employer why you're a great fit..."
                    prop:value=move || cover_letter.get()
                    on:input=move |ev| set_cover_letter.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="mb-3">
                <label class="form-label" for="resumeUrl">"Resume URL"</label>
                <input
                    id="resumeUrl"
                    type="url"
                    class="form-control"
                    placeholder="https://"
                    prop:value=move || resume_url.get()
                    on:input=move |ev| set_resume_url.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-success w-100" disabled=move || pending.get()>
                {move || if pending.get() { "Submitting..." } else { "Submit Application" }}
            </button>
        </form>
    }
}
