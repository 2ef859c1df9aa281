use super::view_model::GymUserDetailsViewModel;
use crate::shared::components::photo_input::PhotoInput;
use crate::shared::components::ui::Button;
use crate::shared::modal_stack::ModalHandle;
use contracts::domain::a001_gym_user::aggregate::GymUser;
use leptos::prelude::*;

#[component]
pub fn GymUserDetails(
    existing: Option<GymUser>,
    modal: ModalHandle,
    on_saved: Callback<String>,
) -> impl IntoView {
    let vm = GymUserDetailsViewModel::new(existing);
    let is_edit = vm.is_edit_mode();
    let form = vm.form;
    let error = vm.error;
    let saving = vm.saving;

    Effect::new({
        let modal = modal.clone();
        move |_| modal.set_busy(saving.get())
    });

    view! {
        <form
            class="details-form"
            on:submit={
                let vm = vm.clone();
                move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            }
        >
            {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}

            <div class="form-row">
                <div class="form-group">
                    <label for="gym-user-first-name">"👤 Ad"</label>
                    <input
                        type="text"
                        id="gym-user-first-name"
                        required
                        prop:value=move || form.get().first_name
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="gym-user-last-name">"👤 Soyad"</label>
                    <input
                        type="text"
                        id="gym-user-last-name"
                        required
                        prop:value=move || form.get().last_name
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="gym-user-father-name">"👤 Ata adı"</label>
                    <input
                        type="text"
                        id="gym-user-father-name"
                        prop:value=move || form.get().father_name
                        on:input=move |ev| form.update(|f| f.father_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="gym-user-phone">"📞 Telefon nömrəsi"</label>
                    <input
                        type="tel"
                        id="gym-user-phone"
                        required
                        placeholder="+994 XX XXX XX XX"
                        prop:value=move || form.get().phone_number
                        on:input=move |ev| form.update(|f| f.phone_number = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="gym-user-birth-date">"🎂 Doğum tarixi"</label>
                <input
                    type="date"
                    id="gym-user-birth-date"
                    prop:value=move || form.get().date_of_birth
                    on:input=move |ev| form.update(|f| f.date_of_birth = event_target_value(&ev))
                />
            </div>

            <PhotoInput id="gym-user-photo" photo=vm.photo />

            <div class="details-actions">
                <Button variant="secondary" on_click=Callback::new(move |_| modal.close())>
                    "Ləğv et"
                </Button>
                <Button
                    button_type="submit"
                    busy=Signal::derive(move || saving.get())
                    disabled=Signal::derive(move || form.with(|f| f.validate().is_err()))
                >
                    {if is_edit { "Yadda saxla" } else { "Yarat" }}
                </Button>
            </div>
        </form>
    }
}
