/// Трейт для корня агрегата
///
/// Кроме идентификатора описывает, где ресурс живёт в API: имя коллекции
/// используется и для URL запросов, и для IRI ссылок (`/api/customers/12`).
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: super::AggregateId;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции в API (например, "customers")
    fn collection_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Полное имя агрегата для системы (например, "a001_customers")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Путь коллекции относительно базового URL API
    fn collection_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Путь отдельного ресурса относительно базового URL API
    fn item_path(id: Self::Id) -> String {
        use super::AggregateId;
        format!("/{}/{}", Self::collection_name(), id.as_string())
    }

    /// IRI ресурса в формате JSON-LD
    fn iri(id: Self::Id) -> String {
        format!("/api{}", Self::item_path(id))
    }
}
