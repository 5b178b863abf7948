/// Utilities for date and money formatting
///
/// Provides consistent formatting across the tables

/// Format an ISO date string to DD/MM/YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format an amount as displayed in the tables: "$1250.50"
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Month names for the month-filter dropdowns, indexed 1..=12.
pub const MESES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalida"), "invalida");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(22.5), "$22.50");
        assert_eq!(format_money(0.0), "$0.00");
    }
}
