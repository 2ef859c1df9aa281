use super::view_model::CategoryDetailsViewModel;
use crate::shared::components::ui::Button;
use crate::shared::modal_stack::ModalHandle;
use contracts::domain::a004_service_category::aggregate::ServiceCategory;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(
    existing: Option<ServiceCategory>,
    modal: ModalHandle,
    on_saved: Callback<String>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(existing);
    let vm_clone = vm.clone();

    Effect::new({
        let modal = modal.clone();
        move |_| modal.set_busy(vm.saving.get())
    });

    let vm_label = vm_clone.clone();

    view! {
        <form
            class="details-form"
            on:submit={
                let vm = vm_clone.clone();
                move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            }
        >
            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="form-error">{e}</div> })
            }

            <div class="form-group">
                <label for="category-name">"Ad"</label>
                <input
                    type="text"
                    id="category-name"
                    required
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.form.get().name
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    }
                />
            </div>

            <div class="form-group">
                <label for="category-description">"Təsvir"</label>
                <textarea
                    id="category-description"
                    rows="3"
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.form.get().description
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    }
                />
            </div>

            <div class="details-actions">
                <Button variant="secondary" on_click=Callback::new(move |_| modal.close())>
                    "Ləğv et"
                </Button>
                <Button
                    button_type="submit"
                    busy=Signal::derive({
                        let vm = vm_clone.clone();
                        move || vm.saving.get()
                    })
                    disabled=Signal::derive({
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid()
                    })
                >
                    {if vm_label.is_edit_mode() { "Yadda saxla" } else { "Yarat" }}
                </Button>
            </div>
        </form>
    }
}
