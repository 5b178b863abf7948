use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Two-state activity flag carried by nearly every record of the resource
/// API. Serialized as the single-letter codes the API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    #[serde(rename = "A")]
    Activo,
    #[serde(rename = "I")]
    Inactivo,
}

impl Status {
    pub fn from_code(code: &str) -> Self {
        match code {
            "I" => Status::Inactivo,
            _ => Status::Activo,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Status::Activo => "A",
            Status::Inactivo => "I",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Activo => "Activo",
            Status::Inactivo => "Inactivo",
        }
    }

    pub fn is_active(self) -> bool {
        self == Status::Activo
    }

    /// The opposite state, used by the quick status toggle.
    pub fn toggled(self) -> Self {
        match self {
            Status::Activo => Status::Inactivo,
            Status::Inactivo => Status::Activo,
        }
    }
}

/// Body of a status-only `PATCH {collection}/{id}` request.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusPatch {
    pub status: Status,
}

/// Records that carry the shared status flag.
pub trait Activable {
    fn status(&self) -> Status;
}

/// Keep only active rows. Reference collections that feed selection
/// dropdowns go through this before being stored.
pub fn active_only<T: Activable>(items: Vec<T>) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| item.status().is_active())
        .collect()
}

/// Calendar month (1..=12) of a wire date like `2024-03-15` or
/// `2024-03-15T10:20:30`. `None` when the string does not parse.
pub fn month_of(fecha: &str) -> Option<u32> {
    let date_part = fecha.split('T').next().unwrap_or(fecha);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .ok()
        .map(|d| d.month())
}

/// Rows whose date field falls in the selected month. No selection is the
/// identity: the collection is returned unchanged.
pub fn filter_by_month<T, F>(items: &[T], month: Option<u32>, fecha: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    match month {
        None => items.to_vec(),
        Some(m) => items
            .iter()
            .filter(|item| month_of(fecha(item)) == Some(m))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        fecha: String,
        status: Status,
    }

    impl Activable for Row {
        fn status(&self) -> Status {
            self.status
        }
    }

    fn row(fecha: &str, status: Status) -> Row {
        Row {
            fecha: fecha.to_string(),
            status,
        }
    }

    #[test]
    fn status_codes_roundtrip() {
        assert_eq!(serde_json::to_string(&Status::Activo).unwrap(), "\"A\"");
        assert_eq!(serde_json::to_string(&Status::Inactivo).unwrap(), "\"I\"");
        assert_eq!(
            serde_json::from_str::<Status>("\"I\"").unwrap(),
            Status::Inactivo
        );
        assert_eq!(Status::from_code("A"), Status::Activo);
        assert_eq!(Status::Activo.toggled(), Status::Inactivo);
        assert_eq!(Status::Inactivo.toggled(), Status::Activo);
    }

    #[test]
    fn month_of_handles_dates_and_datetimes() {
        assert_eq!(month_of("2024-03-15"), Some(3));
        assert_eq!(month_of("2024-12-01T23:59:59"), Some(12));
        assert_eq!(month_of("sin fecha"), None);
        assert_eq!(month_of(""), None);
    }

    #[test]
    fn filter_by_month_selects_matching_rows() {
        let rows = vec![
            row("2024-01-10", Status::Activo),
            row("2024-02-20", Status::Activo),
            row("2025-02-01", Status::Activo),
            row("invalida", Status::Activo),
        ];
        let feb = filter_by_month(&rows, Some(2), |r| &r.fecha);
        assert_eq!(feb.len(), 2);
        assert!(feb.iter().all(|r| month_of(&r.fecha) == Some(2)));
    }

    #[test]
    fn filter_by_month_without_selection_is_identity() {
        let rows = vec![row("2024-01-10", Status::Activo), row("x", Status::Activo)];
        assert_eq!(filter_by_month(&rows, None, |r| &r.fecha).len(), rows.len());
    }

    #[test]
    fn active_only_drops_inactive_rows() {
        let rows = vec![
            row("2024-01-01", Status::Activo),
            row("2024-01-02", Status::Inactivo),
            row("2024-01-03", Status::Activo),
        ];
        let active = active_only(rows);
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|r| r.status.is_active()));
    }
}
