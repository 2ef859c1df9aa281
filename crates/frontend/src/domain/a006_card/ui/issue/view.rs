use super::view_model::CardIssueViewModel;
use crate::shared::components::state_panels::LoadingSpinner;
use crate::shared::components::ui::Button;
use crate::shared::modal_stack::ModalHandle;
use contracts::domain::a006_card::aggregate::card_type_glyph;
use contracts::domain::a006_card::issue_form::{CardOwner, IssuePhase};
use leptos::prelude::*;

fn phase_hint(phase: IssuePhase) -> &'static str {
    match phase {
        IssuePhase::NoServiceSelected => "Əvvəlcə xidməti seçin",
        IssuePhase::ServiceSelected => "Abunə planını seçin",
        IssuePhase::PlanAndSlotsChosen => "Kart məlumatlarını tamamlayın",
        IssuePhase::Submittable => "Kart əlavə etməyə hazırdır",
    }
}

#[component]
pub fn CardIssueForm(
    owner: CardOwner,
    restrict_type: Option<&'static str>,
    modal: ModalHandle,
    on_issued: Callback<String>,
) -> impl IntoView {
    let vm = CardIssueViewModel::new(owner, restrict_type);
    vm.load_lookups();

    Effect::new({
        let modal = modal.clone();
        move |_| modal.set_busy(vm.saving.get())
    });

    view! {
        <form
            class="details-form card-issue-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                vm.submit_command(on_issued);
            }
        >
            {move || vm.error.get().map(|e| view! { <div class="form-error">{e}</div> })}

            <Show when=move || vm.loading.get()>
                <LoadingSpinner />
            </Show>

            <div class="form-row">
                <div class="form-group">
                    <label for="card-number">"Kart Nömrəsi"</label>
                    <input
                        type="number"
                        id="card-number"
                        min="1"
                        required
                        placeholder="Kart nömrəsini daxil edin"
                        prop:value=move || vm.form.get().card_number
                        on:input=move |ev| vm.form.update(|f| f.card_number = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="card-type">"Kart Tipi"</label>
                    <select
                        id="card-type"
                        required
                        prop:value=move || vm.form.get().card_type
                        on:change=move |ev| vm.form.update(|f| f.card_type = event_target_value(&ev))
                    >
                        <option value="">"Seçin"</option>
                        {move || {
                            let selected = vm.form.with(|f| f.card_type.clone());
                            vm.type_choices()
                                .into_iter()
                                .map(|card_type| {
                                    let is_selected = card_type == selected;
                                    let label = format!("{} {}", card_type_glyph(&card_type), card_type);
                                    view! { <option value=card_type selected=is_selected>{label}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>

            <div class="form-group">
                <label for="card-service">"Servis"</label>
                <select
                    id="card-service"
                    required
                    prop:value=move || vm.form.get().service_id().to_string()
                    on:change=move |ev| vm.select_service(event_target_value(&ev))
                >
                    <option value="">"Servis seçin"</option>
                    {move || {
                        let selected = vm.form.with(|f| f.service_id().to_string());
                        vm.services
                            .get()
                            .into_iter()
                            .map(|service| {
                                let id = service.id.as_str().to_string();
                                let is_selected = id == selected;
                                view! { <option value=id selected=is_selected>{service.name}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="form-group">
                <label for="card-plan">"Abunə Planı"</label>
                <select
                    id="card-plan"
                    required
                    disabled=move || !vm.dependent_fields_enabled()
                    prop:value=move || vm.form.get().subscription_plan_id().to_string()
                    on:change=move |ev| vm.select_plan(event_target_value(&ev))
                >
                    <option value="">"Plan seçin"</option>
                    {move || {
                        let selected = vm.form.with(|f| f.subscription_plan_id().to_string());
                        vm.plans()
                            .into_iter()
                            .map(|plan| {
                                let id = plan.id.as_str().to_string();
                                let is_selected = id == selected;
                                view! { <option value=id selected=is_selected>{plan.option_label()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <fieldset class="form-group slot-picker" disabled=move || !vm.dependent_fields_enabled()>
                <legend>"Xidmət və saatlar (bir və ya bir neçə seçə bilərsiniz)"</legend>
                {move || {
                    let slots = vm.availabilities();
                    if slots.is_empty() {
                        return view! { <div class="slot-picker__empty">"Vaxt yoxdur"</div> }.into_any();
                    }
                    slots
                        .into_iter()
                        .map(|slot| {
                            let id = slot.id.as_str().to_string();
                            let id_for_check = id.clone();
                            let trainer = slot
                                .trainer
                                .as_ref()
                                .map(|t| format!(" · {}", t.display_name()))
                                .unwrap_or_default();
                            view! {
                                <label class="slot-picker__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || vm.form.with(|f| f.is_availability_selected(&id_for_check))
                                        on:change=move |_| vm.toggle_availability(&id)
                                    />
                                    <span>{slot.option_label()}{trainer}</span>
                                </label>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </fieldset>

            <div class="form-row">
                <div class="form-group">
                    <label for="card-start">"Başlama tarixi"</label>
                    <input
                        type="date"
                        id="card-start"
                        required
                        prop:value=move || vm.form.get().start_date
                        on:input=move |ev| vm.form.update(|f| f.start_date = event_target_value(&ev))
                    />
                </div>

                <label class="form-check" for="card-active">
                    <input
                        type="checkbox"
                        id="card-active"
                        prop:checked=move || vm.form.get().is_active
                        on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    <span>"Aktiv"</span>
                </label>
            </div>

            <div class="form-hint">{move || phase_hint(vm.phase())}</div>

            <div class="details-actions">
                <Button variant="secondary" on_click=Callback::new(move |_| modal.close())>
                    "Ləğv et"
                </Button>
                <Button
                    button_type="submit"
                    busy=Signal::derive(move || vm.saving.get())
                    disabled=Signal::derive(move || vm.phase() != IssuePhase::Submittable)
                >
                    "Kart əlavə et"
                </Button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_hint_per_phase() {
        assert_eq!(phase_hint(IssuePhase::NoServiceSelected), "Əvvəlcə xidməti seçin");
        assert_ne!(
            phase_hint(IssuePhase::ServiceSelected),
            phase_hint(IssuePhase::Submittable)
        );
    }
}
