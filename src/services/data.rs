//! Blog document loading and validation

use crate::model::item::{BlogDocument, NewsItem};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load and parse the blog.json document, keeping only well-formed items.
///
/// Performed exactly once at startup. Failures are returned to the caller,
/// which leaves the item collection absent and the dependent sections blank.
pub fn load_blog<P: AsRef<Path>>(path: P) -> Result<Vec<NewsItem>, String> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let document: BlogDocument = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    Ok(validate_items(document.blog.noticias))
}

/// Drop items whose date range is malformed. The collection is immutable
/// after load, so bad entries are rejected here instead of being
/// special-cased in every renderer.
fn validate_items(items: Vec<NewsItem>) -> Vec<NewsItem> {
    items
        .into_iter()
        .filter(|item| {
            let start = match NaiveDate::parse_from_str(&item.fecha_inicio, "%Y-%m-%d") {
                Ok(date) => date,
                Err(e) => {
                    warn!(
                        id = item.id,
                        fecha_inicio = %item.fecha_inicio,
                        error = %e,
                        "dropping item with unparseable start date"
                    );
                    return false;
                }
            };

            if let Some(fin) = item.fecha_fin.as_deref() {
                match NaiveDate::parse_from_str(fin, "%Y-%m-%d") {
                    Ok(end) if end < start => {
                        warn!(
                            id = item.id,
                            fecha_inicio = %item.fecha_inicio,
                            fecha_fin = %fin,
                            "dropping item whose end date precedes its start date"
                        );
                        return false;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(
                            id = item.id,
                            fecha_fin = %fin,
                            error = %e,
                            "dropping item with unparseable end date"
                        );
                        return false;
                    }
                }
            }

            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "blog": {
            "noticias": [
                {
                    "id": 1,
                    "titulo": "Nueva temporada",
                    "extracto": "Arranca la temporada del club",
                    "imagen": "🏆",
                    "tipo": "Noticia",
                    "destacada": true,
                    "fecha_inicio": "2024-09-01",
                    "fecha_fin": null
                },
                {
                    "id": 2,
                    "titulo": "Clases para principiantes",
                    "extracto": "Todos los martes",
                    "tipo": "Clase",
                    "destacada": false,
                    "fecha_inicio": "2024-09-03",
                    "fecha_fin": "2024-12-17"
                }
            ]
        }
    }"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_load_valid_document() {
        let file = write_temp(SAMPLE);
        let items = load_blog(file.path()).expect("document should load");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].titulo, "Nueva temporada");
        assert!(items[0].destacada);
        assert_eq!(items[1].imagen, None);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = load_blog("/nonexistent/blog.json");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to read"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let file = write_temp("{ not json ");
        let result = load_blog(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to parse"));
    }

    #[test]
    fn test_inverted_date_range_is_dropped() {
        let doc = r#"{
            "blog": {
                "noticias": [
                    {
                        "id": 1,
                        "titulo": "Rango invertido",
                        "extracto": "",
                        "tipo": "Evento",
                        "fecha_inicio": "2024-05-10",
                        "fecha_fin": "2024-05-01"
                    },
                    {
                        "id": 2,
                        "titulo": "Rango válido",
                        "extracto": "",
                        "tipo": "Evento",
                        "fecha_inicio": "2024-05-01",
                        "fecha_fin": "2024-05-10"
                    }
                ]
            }
        }"#;

        let file = write_temp(doc);
        let items = load_blog(file.path()).expect("document should load");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
    }

    #[test]
    fn test_unparseable_start_date_is_dropped() {
        let doc = r#"{
            "blog": {
                "noticias": [
                    {
                        "id": 3,
                        "titulo": "Sin fecha",
                        "extracto": "",
                        "tipo": "Noticia",
                        "fecha_inicio": "pronto"
                    }
                ]
            }
        }"#;

        let file = write_temp(doc);
        let items = load_blog(file.path()).expect("document should load");
        assert!(items.is_empty());
    }
}
