//! Column detection for loosely named spreadsheet headers.

pub const START_VARIANTS: [&str; 4] = ["Inicio", "Start", "Fecha inicio", "Desde"];
pub const END_VARIANTS: [&str; 4] = ["Fin", "End", "Fecha fin", "Hasta"];
pub const WEEK_VARIANTS: [&str; 4] = ["Semana", "Week", "Week #", "W"];
pub const COMMENT_VARIANTS: [&str; 4] = ["Comentario", "Comment", "Notas", "Descripción"];

const PUNCTUATION: [char; 7] = ['#', '(', ')', ':', ';', ',', '.'];

/// Column indexes chosen for one sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub week: Option<usize>,
    pub comment: Option<usize>,
}

impl ColumnMap {
    pub fn detect(headers: &[String]) -> Self {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        Self {
            start: find_column(&normalized, &START_VARIANTS),
            end: find_column(&normalized, &END_VARIANTS),
            week: find_column(&normalized, &WEEK_VARIANTS),
            comment: find_column(&normalized, &COMMENT_VARIANTS),
        }
    }
}

/// Fold accents to ASCII, lowercase, blank out punctuation and collapse whitespace.
pub fn normalize_header(header: &str) -> String {
    let folded: String = header
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(fold_char)
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold_char(c: char) -> Option<char> {
    if c.is_ascii() {
        return Some(c);
    }
    let folded = match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        c if c.is_whitespace() => ' ',
        _ => return None,
    };
    Some(folded)
}

/// Exact match on any variant first, then containment in either direction.
pub fn find_column(normalized_headers: &[String], variants: &[&str]) -> Option<usize> {
    let variants: Vec<String> = variants.iter().map(|v| normalize_header(v)).collect();

    for variant in &variants {
        if let Some(index) = normalized_headers.iter().position(|h| h == variant) {
            return Some(index);
        }
    }

    normalized_headers.iter().position(|header| {
        !header.is_empty()
            && variants.iter().any(|variant| {
                variant.contains(header.as_str()) || header.contains(variant.as_str())
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn normalizes_accents_and_punctuation() {
        assert_eq!(normalize_header("  Descripción (Notas) "), "descripcion notas");
        assert_eq!(normalize_header("Week #"), "week");
        assert_eq!(normalize_header("Fecha\tInicio:"), "fecha inicio");
        assert_eq!(normalize_header("Año"), "ano");
    }

    #[test]
    fn exact_match_beats_containment() {
        let normalized: Vec<String> = headers(&["Fecha inicio", "Inicio"])
            .iter()
            .map(|h| normalize_header(h))
            .collect();
        assert_eq!(find_column(&normalized, &START_VARIANTS), Some(1));

        let normalized: Vec<String> = headers(&["Inicio de semana", "Desde"])
            .iter()
            .map(|h| normalize_header(h))
            .collect();
        assert_eq!(find_column(&normalized, &START_VARIANTS), Some(1));
    }

    #[test]
    fn detects_spanish_sheet() {
        let map = ColumnMap::detect(&headers(&["Semana", "Inicio", "Fin", "Comentario"]));
        assert_eq!(
            map,
            ColumnMap {
                week: Some(0),
                start: Some(1),
                end: Some(2),
                comment: Some(3),
            }
        );
    }

    #[test]
    fn detects_by_containment() {
        let map = ColumnMap::detect(&headers(&[
            "Semana (Week #)",
            "Fecha fin real",
            "Notas del día",
        ]));
        assert_eq!(map.week, Some(0));
        assert_eq!(map.end, Some(1));
        assert_eq!(map.comment, Some(2));
        assert_eq!(map.start, None);
    }

    #[test]
    fn blank_headers_never_match() {
        let map = ColumnMap::detect(&headers(&["", "  ", "Semana"]));
        assert_eq!(map.week, Some(2));
        assert_eq!(map.start, None);
    }
}
