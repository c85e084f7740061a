/// Метаданные UseCase для отображения в UI
pub trait UseCaseMetadata {
    /// Отображаемое имя для UI
    fn display_name() -> &'static str;

    /// Описание UseCase
    fn description() -> &'static str {
        ""
    }
}
