//! Tab labels - заголовки табов.
//!
//! Для экранов агрегатов берётся `list_name` из contracts.

use contracts::domain::a001_gym_user::aggregate::GymUser;
use contracts::domain::a002_trainer::aggregate::Trainer;
use contracts::domain::a003_staff::aggregate::Staff;
use contracts::domain::a004_service_category::aggregate::ServiceCategory;
use contracts::domain::a005_service::aggregate::Service;
use contracts::domain::a006_card::aggregate::Card;
use contracts::domain::common::AggregateRoot;

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Fallback: "Naməlum bölmə" для неизвестных ключей.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key.split_once('_').map(|(index, _)| index) {
        Some("a001") => GymUser::list_name(),
        Some("a002") => Trainer::list_name(),
        Some("a003") => Staff::list_name(),
        Some("a004") => ServiceCategory::list_name(),
        Some("a005") => Service::list_name(),
        Some("a006") => Card::list_name(),
        _ => "Naməlum bölmə",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_aggregate_list_names() {
        assert_eq!(tab_label_for_key("a001_gym_user"), "Gym istifadəçiləri");
        assert_eq!(tab_label_for_key("a005_service"), "Xidmətlər");
        assert_eq!(tab_label_for_key("a006_card"), "Kartlar");
        assert_eq!(tab_label_for_key("u501_import"), "Naməlum bölmə");
        assert_eq!(tab_label_for_key(""), "Naməlum bölmə");
    }
}
