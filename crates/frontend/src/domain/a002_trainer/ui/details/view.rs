use super::view_model::TrainerDetailsViewModel;
use crate::shared::components::ui::Button;
use crate::shared::modal_stack::ModalHandle;
use contracts::domain::a002_trainer::aggregate::Trainer;
use leptos::prelude::*;

#[component]
pub fn TrainerDetails(
    existing: Option<Trainer>,
    modal: ModalHandle,
    on_saved: Callback<String>,
) -> impl IntoView {
    let vm = TrainerDetailsViewModel::new(existing);
    let form = vm.form;

    Effect::new({
        let modal = modal.clone();
        move |_| modal.set_busy(vm.saving.get())
    });

    view! {
        <form
            class="details-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                vm.save_command(on_saved);
            }
        >
            {move || vm.error.get().map(|e| view! { <div class="form-error">{e}</div> })}

            <div class="form-row">
                <div class="form-group">
                    <label for="trainer-first-name">"👤 Ad"</label>
                    <input
                        type="text"
                        id="trainer-first-name"
                        required
                        placeholder="Adınızı daxil edin..."
                        prop:value=move || form.get().first_name
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="trainer-last-name">"👤 Soyad"</label>
                    <input
                        type="text"
                        id="trainer-last-name"
                        required
                        placeholder="Soyadınızı daxil edin..."
                        prop:value=move || form.get().last_name
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="trainer-phone">"📞 Telefon nömrəsi"</label>
                    <input
                        type="tel"
                        id="trainer-phone"
                        required
                        placeholder="+994 XX XXX XX XX"
                        prop:value=move || form.get().phone_number
                        on:input=move |ev| form.update(|f| f.phone_number = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="trainer-days">"🗓️ Mövcud günlər"</label>
                    <input
                        type="text"
                        id="trainer-days"
                        required
                        placeholder="Məs: 1-5"
                        prop:value=move || form.get().available_days
                        on:input=move |ev| form.update(|f| f.available_days = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="trainer-start-time">"🕐 Başlama vaxtı"</label>
                    <input
                        type="time"
                        id="trainer-start-time"
                        required
                        prop:value=move || form.get().start_time
                        on:input=move |ev| form.update(|f| f.start_time = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="trainer-end-time">"🕐 Bitmə vaxtı"</label>
                    <input
                        type="time"
                        id="trainer-end-time"
                        required
                        prop:value=move || form.get().end_time
                        on:input=move |ev| form.update(|f| f.end_time = event_target_value(&ev))
                    />
                </div>
            </div>

            {move || vm.schedule_warning().map(|w| view! { <div class="form-warning">{w}</div> })}

            <div class="details-actions">
                <Button variant="secondary" on_click=Callback::new(move |_| modal.close())>
                    "Ləğv et"
                </Button>
                <Button
                    button_type="submit"
                    busy=Signal::derive(move || vm.saving.get())
                    disabled=Signal::derive(move || !form.with(|f| f.is_complete()))
                >
                    {if vm.is_edit_mode() { "✅ Yenilə" } else { "✨ Yarat" }}
                </Button>
            </div>
        </form>
    }
}
