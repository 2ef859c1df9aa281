use super::view_model::ServiceDetailsViewModel;
use crate::shared::components::state_panels::LoadingSpinner;
use crate::shared::components::ui::Button;
use crate::shared::modal_stack::ModalHandle;
use contracts::domain::a002_trainer::aggregate::Trainer;
use contracts::domain::a002_trainer::schedule::weekday_label;
use contracts::domain::a005_service::aggregate::Service;
use contracts::domain::a005_service::form::{AvailabilityField, PlanField, RowKey};
use contracts::domain::common::PersonProfile;
use leptos::prelude::*;

/// Подсказка о рабочем графике выбранного тренера
fn trainer_hint(trainer: &Trainer) -> Vec<(&'static str, String)> {
    let days: Vec<&str> = trainer
        .available_days()
        .into_iter()
        .filter_map(weekday_label)
        .collect();
    vec![
        ("Məşqçi", trainer.person_name()),
        (
            "Əlçatan günlər",
            format!("{} ({})", trainer.available_days.as_deref().unwrap_or("-"), days.join(", ")),
        ),
        (
            "Əlçatan vaxt",
            format!(
                "{} - {}",
                trainer.start_time.as_deref().unwrap_or("-"),
                trainer.end_time.as_deref().unwrap_or("-")
            ),
        ),
    ]
}

#[component]
fn AvailabilityRowEditor(vm: ServiceDetailsViewModel, row_key: RowKey) -> impl IntoView {
    let row = move || vm.availability_row(row_key).unwrap_or_default();
    let has_trainer = move || !row().trainer_id.is_empty();
    let has_day = move || !row().day.is_empty();

    view! {
        <div class="row-editor">
            <div class="form-row">
                <div class="form-group">
                    <label>"Məşqçi"</label>
                    <select
                        required
                        prop:value=move || row().trainer_id
                        on:change=move |ev| vm.set_availability(row_key, AvailabilityField::Trainer, event_target_value(&ev))
                    >
                        <option value="">"Məşqçi seçin"</option>
                        {move || {
                            let selected = row().trainer_id;
                            vm.trainers
                                .get()
                                .into_iter()
                                .map(|t| {
                                    let id = t.id.as_str().to_string();
                                    let is_selected = id == selected;
                                    view! { <option value=id selected=is_selected>{t.person_name()}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="form-group">
                    <label>"Gün"</label>
                    <select
                        required
                        disabled=move || !has_trainer()
                        prop:value=move || row().day
                        on:change=move |ev| vm.set_availability(row_key, AvailabilityField::Day, event_target_value(&ev))
                    >
                        <option value="">
                            {move || if has_trainer() { "Gün seçin" } else { "Əvvəl məşqçi seçin" }}
                        </option>
                        {move || {
                            let selected = row().day;
                            vm.day_options(row_key)
                                .into_iter()
                                .map(|day| {
                                    let value = day.to_string();
                                    let is_selected = value == selected;
                                    view! {
                                        <option value=value selected=is_selected>
                                            {weekday_label(day).unwrap_or("?")}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>

            {move || vm.row_trainer(row_key).map(|trainer| view! {
                <dl class="row-editor__hint">
                    {trainer_hint(&trainer)
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view()}
                </dl>
            })}

            <div class="form-row">
                <div class="form-group">
                    <label>"Başlama vaxtı"</label>
                    <input
                        type="time"
                        required
                        disabled=move || !has_day()
                        min=move || vm.start_bounds(row_key).map(|b| b.min.to_string())
                        max=move || vm.start_bounds(row_key).map(|b| b.max.to_string())
                        prop:value=move || row().start_time
                        on:input=move |ev| vm.set_availability(row_key, AvailabilityField::StartTime, event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Bitmə vaxtı"</label>
                    <input
                        type="time"
                        required
                        disabled=move || !has_day()
                        min=move || vm.end_bounds(row_key).map(|b| b.min.to_string())
                        max=move || vm.end_bounds(row_key).map(|b| b.max.to_string())
                        prop:value=move || row().end_time
                        on:input=move |ev| vm.set_availability(row_key, AvailabilityField::EndTime, event_target_value(&ev))
                    />
                </div>
                <div class="form-group form-group--end">
                    <Button variant="ghost" size="sm" on_click=Callback::new(move |_| vm.remove_availability(row_key))>
                        "🗑️ Sil"
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PlanRowEditor(vm: ServiceDetailsViewModel, row_key: RowKey) -> impl IntoView {
    let row = move || vm.plan_row(row_key).unwrap_or_default();

    view! {
        <div class="form-row row-editor">
            <input
                type="number"
                min="1"
                required
                placeholder="Giriş sayı"
                prop:value=move || row().entry_count
                on:input=move |ev| vm.set_plan(row_key, PlanField::EntryCount, event_target_value(&ev))
            />
            <input
                type="number"
                min="0"
                step="0.01"
                required
                placeholder="Qiymət (AZN)"
                prop:value=move || row().price
                on:input=move |ev| vm.set_plan(row_key, PlanField::Price, event_target_value(&ev))
            />
            <Button variant="ghost" size="sm" on_click=Callback::new(move |_| vm.remove_plan(row_key))>
                "🗑️"
            </Button>
        </div>
    }
}

#[component]
pub fn ServiceDetails(
    existing: Option<Service>,
    modal: ModalHandle,
    on_saved: Callback<String>,
) -> impl IntoView {
    let vm = ServiceDetailsViewModel::new(existing);
    vm.load_lookups();
    let form = vm.form;

    Effect::new({
        let modal = modal.clone();
        move |_| modal.set_busy(vm.saving.get())
    });

    view! {
        <form
            class="details-form service-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                vm.save_command(on_saved);
            }
        >
            {move || vm.error.get().map(|e| view! { <div class="form-error">{e}</div> })}

            <Show when=move || vm.loading.get()>
                <LoadingSpinner />
            </Show>

            <div class="form-row">
                <div class="form-group">
                    <label for="service-name">"Ad"</label>
                    <input
                        type="text"
                        id="service-name"
                        required
                        placeholder="Xidmət adı..."
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="service-category">"Kateqoriya"</label>
                    <select
                        id="service-category"
                        required
                        prop:value=move || form.get().category_id
                        on:change=move |ev| form.update(|f| f.category_id = event_target_value(&ev))
                    >
                        <option value="">"Seçin..."</option>
                        {move || {
                            let selected = form.with(|f| f.category_id.clone());
                            vm.categories
                                .get()
                                .into_iter()
                                .map(|c| {
                                    let id = c.id.as_str().to_string();
                                    let is_selected = id == selected;
                                    view! { <option value=id selected=is_selected>{c.name}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>

            <fieldset class="form-section">
                <legend>"⏰ Əlçatan Vaxtlar"</legend>
                <For
                    each=move || vm.availability_keys()
                    key=|key| *key
                    children=move |key| view! { <AvailabilityRowEditor vm=vm row_key=key /> }
                />
                <Button variant="secondary" size="sm" on_click=Callback::new(move |_| vm.add_availability())>
                    "+ Yeni vaxt əlavə et"
                </Button>
            </fieldset>

            <fieldset class="form-section">
                <legend>"💎 Abunə Paketləri"</legend>
                <For
                    each=move || vm.plan_keys()
                    key=|key| *key
                    children=move |key| view! { <PlanRowEditor vm=vm row_key=key /> }
                />
                <Button variant="secondary" size="sm" on_click=Callback::new(move |_| vm.add_plan())>
                    "+ Yeni paket əlavə et"
                </Button>
            </fieldset>

            <div class="details-actions">
                <Button variant="secondary" on_click=Callback::new(move |_| modal.close())>
                    "Ləğv et"
                </Button>
                <Button
                    button_type="submit"
                    busy=Signal::derive(move || vm.saving.get())
                    disabled=Signal::derive(move || form.with(|f| f.validate().is_err()))
                >
                    {if vm.is_edit_mode() { "✅ Yenilə" } else { "✨ Yarat" }}
                </Button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trainer_hint() {
        let trainer: Trainer = serde_json::from_str(
            r#"{"id": "T1", "firstName": "Murad", "lastName": "Quliyev", "phoneNumber": "+994",
                "availableDays": "1-2", "startTime": "09:00", "endTime": "13:00"}"#,
        )
        .unwrap();
        let hint = trainer_hint(&trainer);
        assert_eq!(hint[0], ("Məşqçi", "Murad Quliyev".to_string()));
        assert_eq!(hint[2], ("Əlçatan vaxt", "09:00 - 13:00".to_string()));
        assert!(hint[1].1.starts_with("1-2 ("));
    }
}
