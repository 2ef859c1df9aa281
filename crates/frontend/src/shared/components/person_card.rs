//! Карточка персоны для сеток участников, тренеров и сотрудников.

use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::date_utils::format_date;
use contracts::domain::common::PersonProfile;
use leptos::prelude::*;

/// Строки карточки: (подпись, значение); пустые значения не показываются
pub fn person_details<P: PersonProfile>(person: &P) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Telefon", person.phone_number().to_string())];
    if let Some(father) = person.father_name() {
        rows.push(("Ata adı", father.to_string()));
    }
    if let Some(born) = person.date_of_birth() {
        rows.push(("Doğum tarixi", format_date(born)));
    }
    rows.retain(|(_, value)| !value.trim().is_empty());
    rows
}

#[component]
pub fn PersonCard(
    #[prop(into)] name: String,
    #[prop(into)] initials: String,
    #[prop(optional_no_strip)] photo_url: Option<String>,
    details: Vec<(&'static str, String)>,
    /// Позиция в сетке (для каскадной анимации)
    #[prop(optional)]
    index: usize,
    /// Кнопки действий
    children: Children,
) -> impl IntoView {
    let avatar = match photo_url {
        Some(url) => view! { <img class="person-card__photo" src=url alt=name.clone() /> }.into_any(),
        None => view! { <div class="person-card__initials">{initials}</div> }.into_any(),
    };

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="person-card">
            <div class="person-card__head">
                {avatar}
                <div class="person-card__name">{name}</div>
            </div>
            <dl class="person-card__details">
                {details
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    })
                    .collect_view()}
            </dl>
            <div class="person-card__actions">{children()}</div>
        </CardAnimated>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Member;

    impl PersonProfile for Member {
        fn first_name(&self) -> &str {
            "Leyla"
        }
        fn last_name(&self) -> &str {
            "Əliyeva"
        }
        fn phone_number(&self) -> &str {
            "+994551112233"
        }
        fn father_name(&self) -> Option<&str> {
            Some("")
        }
        fn date_of_birth(&self) -> Option<&str> {
            Some("1995-07-21T00:00:00.000Z")
        }
    }

    #[test]
    fn test_person_details_skip_blank_values() {
        assert_eq!(
            person_details(&Member),
            vec![
                ("Telefon", "+994551112233".to_string()),
                ("Doğum tarixi", "21.07.1995".to_string()),
            ]
        );
    }
}
