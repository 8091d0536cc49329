//! Date labels for news items
//!
//! Labels use the fixed Spanish month abbreviations of the data set rather
//! than locale-aware formatting, so output is identical on every machine.

use crate::model::item::NewsItem;

const MONTHS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

struct IsoDate<'a> {
    year: &'a str,
    month: usize,
    day: u32,
}

fn parse_iso(iso: &str) -> Option<IsoDate<'_>> {
    let mut parts = iso.splitn(3, '-');
    let year = parts.next()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(IsoDate { year, month, day })
}

/// Format an ISO `YYYY-MM-DD` date as `D Mon YYYY`.
///
/// Fails softly: empty or unparseable input yields `None`.
pub fn format_date(iso: &str) -> Option<String> {
    if iso.is_empty() {
        return None;
    }
    let date = parse_iso(iso)?;
    Some(format!("{} {} {}", date.day, MONTHS[date.month - 1], date.year))
}

/// Build the display label for an item's date range.
///
/// - no end date: `Desde {start}` (open-ended)
/// - start equals end: the single formatted date
/// - same month and year: compact `D – D Mon YYYY`
/// - otherwise: `{start} – {end}` with both sides fully formatted
pub fn build_date_label(item: &NewsItem) -> String {
    let start = format_date(&item.fecha_inicio).unwrap_or_default();

    let fin = match item.fecha_fin.as_deref().filter(|s| !s.is_empty()) {
        Some(fin) => fin,
        None => return format!("Desde {}", start),
    };
    let end = match format_date(fin) {
        Some(end) => end,
        None => return format!("Desde {}", start),
    };

    if start == end {
        return start;
    }

    if let (Some(i), Some(f)) = (parse_iso(&item.fecha_inicio), parse_iso(fin)) {
        if i.year == f.year && i.month == f.month {
            return format!("{} – {} {} {}", i.day, f.day, MONTHS[i.month - 1], i.year);
        }
    }

    format!("{} – {}", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(inicio: &str, fin: Option<&str>) -> NewsItem {
        NewsItem {
            id: 0,
            titulo: String::new(),
            extracto: String::new(),
            imagen: None,
            tipo: "Noticia".to_string(),
            destacada: false,
            fecha_inicio: inicio.to_string(),
            fecha_fin: fin.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_format_date_uses_month_table() {
        let expected = [
            "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
        ];
        for (idx, abbrev) in expected.iter().enumerate() {
            let iso = format!("2024-{:02}-15", idx + 1);
            assert_eq!(
                format_date(&iso),
                Some(format!("15 {} 2024", abbrev)),
                "month {}",
                idx + 1
            );
        }
    }

    #[test]
    fn test_format_date_strips_leading_zero_day() {
        assert_eq!(format_date("2024-03-05"), Some("5 Mar 2024".to_string()));
    }

    #[test]
    fn test_format_date_empty_is_none() {
        assert_eq!(format_date(""), None);
    }

    #[test]
    fn test_format_date_garbage_is_none() {
        assert_eq!(format_date("not-a-date"), None);
        assert_eq!(format_date("2024-13-01"), None);
    }

    #[test]
    fn test_label_open_ended() {
        let label = build_date_label(&item("2024-01-01", None));
        assert_eq!(label, "Desde 1 Ene 2024");
    }

    #[test]
    fn test_label_single_day() {
        let label = build_date_label(&item("2024-03-05", Some("2024-03-05")));
        assert_eq!(label, "5 Mar 2024");
    }

    #[test]
    fn test_label_compact_same_month_range() {
        let label = build_date_label(&item("2024-03-01", Some("2024-03-10")));
        assert_eq!(label, "1 – 10 Mar 2024");
    }

    #[test]
    fn test_label_full_cross_month_range() {
        let label = build_date_label(&item("2024-03-20", Some("2024-04-02")));
        assert_eq!(label, "20 Mar 2024 – 2 Abr 2024");
    }
}
