use super::AggregateId;

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех сущностей панели
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> &Self::Id;

    /// Заголовок записи для карточки и сообщений
    fn display_name(&self) -> String;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Ключ сущности (например, "gym_user")
    fn entity_key() -> &'static str;

    /// Имя коллекции в REST API бэкенда (например, "gymusers")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата, совпадает с ключом вкладки (например, "a001_gym_user")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::entity_key())
    }

    /// Путь коллекции в API (например, "/api/gymusers")
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }

    /// Путь конкретной записи в API
    fn item_path(id: &Self::Id) -> String {
        format!("{}/{}", Self::api_path(), id.as_string())
    }
}
