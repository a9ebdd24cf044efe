use crate::domain::model::{Document, Record};
use crate::utils::error::{ConvertError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashSet;

const DELIMITER: u8 = b',';
const QUOTE: u8 = b'"';
const UTF8_BOM: char = '\u{feff}';

/// Drops a leading UTF-8 byte-order-mark left behind by spreadsheet exports.
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix(UTF8_BOM).unwrap_or(content)
}

/// Parses headed CSV text into a [`Document`].
///
/// Rows shorter than the header are padded with empty strings. Rows longer
/// than the header, duplicate column names and unterminated quoted fields
/// are rejected as [`ConvertError::MalformedInput`].
pub fn parse_document(content: &str) -> Result<Document> {
    let content = strip_bom(content);

    // csv accepts an unterminated quote by reading to EOF, so check it first.
    if let Some(line) = unterminated_quote_line(content) {
        return Err(ConvertError::malformed(line, "unterminated quoted field"));
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .has_headers(true)
        .trim(Trim::None)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    check_unique_headers(&headers)?;
    tracing::debug!("CSV header has {} columns: {:?}", headers.len(), headers);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(build_record(&headers, &row)?);
    }

    Ok(Document::new(records))
}

fn check_unique_headers(headers: &StringRecord) -> Result<()> {
    let mut seen = HashSet::with_capacity(headers.len());
    for name in headers.iter() {
        if !seen.insert(name) {
            let line = headers.position().map(|p| p.line()).unwrap_or(1);
            return Err(ConvertError::malformed(
                line,
                format!("duplicate column name '{}'", name),
            ));
        }
    }
    Ok(())
}

fn build_record(headers: &StringRecord, row: &StringRecord) -> Result<Record> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);

    if row.len() > headers.len() {
        return Err(ConvertError::malformed(
            line,
            format!(
                "expected at most {} fields, found {}",
                headers.len(),
                row.len()
            ),
        ));
    }

    if row.len() < headers.len() {
        tracing::debug!(
            "Line {} has {} of {} fields, padding with empty values",
            line,
            row.len(),
            headers.len()
        );
    }

    let pairs = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name, row.get(index).unwrap_or("")));

    Ok(Record::from_pairs(pairs))
}

#[derive(Debug, Clone, Copy)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted { opened_at: u64 },
    // Quote seen inside a quoted field: either an escape or the closing quote.
    QuoteInQuoted { opened_at: u64 },
}

/// Returns the line on which a never-closed quoted field starts.
fn unterminated_quote_line(content: &str) -> Option<u64> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1u64;

    for byte in content.bytes() {
        state = match state {
            QuoteState::FieldStart => match byte {
                QUOTE => QuoteState::Quoted { opened_at: line },
                DELIMITER | b'\n' | b'\r' => QuoteState::FieldStart,
                _ => QuoteState::Unquoted,
            },
            QuoteState::Unquoted => match byte {
                DELIMITER | b'\n' | b'\r' => QuoteState::FieldStart,
                _ => QuoteState::Unquoted,
            },
            QuoteState::Quoted { opened_at } => match byte {
                QUOTE => QuoteState::QuoteInQuoted { opened_at },
                _ => QuoteState::Quoted { opened_at },
            },
            QuoteState::QuoteInQuoted { opened_at } => match byte {
                QUOTE => QuoteState::Quoted { opened_at },
                DELIMITER | b'\n' | b'\r' => QuoteState::FieldStart,
                _ => QuoteState::Unquoted,
            },
        };

        if byte == b'\n' {
            line += 1;
        }
    }

    match state {
        QuoteState::Quoted { opened_at } => Some(opened_at),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(document: &Document, column: &str) -> Vec<String> {
        document
            .records
            .iter()
            .map(|r| r.get(column).unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_parse_simple_csv() {
        let document = parse_document("a,b\n1,2\n3,4\n").unwrap();
        assert_eq!(document.len(), 2);
        assert_eq!(values(&document, "a"), vec!["1", "3"]);
        assert_eq!(values(&document, "b"), vec!["2", "4"]);
    }

    #[test]
    fn test_bom_is_not_part_of_first_column() {
        let document = parse_document("\u{feff}name,value\nx,1\n").unwrap();
        let columns: Vec<&str> = document.records[0].columns().collect();
        assert_eq!(columns, vec!["name", "value"]);
        assert_eq!(document.records[0].get("name"), Some("x"));
    }

    #[test]
    fn test_quoted_fields() {
        let csv = "text,note\n\"hello, world\",\"line one\nline two\"\n\"say \"\"hi\"\"\",x\n";
        let document = parse_document(csv).unwrap();
        assert_eq!(document.len(), 2);
        assert_eq!(document.records[0].get("text"), Some("hello, world"));
        assert_eq!(document.records[0].get("note"), Some("line one\nline two"));
        assert_eq!(document.records[1].get("text"), Some("say \"hi\""));
    }

    #[test]
    fn test_values_are_not_trimmed_or_coerced() {
        let document = parse_document("n,flag,space\n007,true, padded \n").unwrap();
        let record = &document.records[0];
        assert_eq!(record.get("n"), Some("007"));
        assert_eq!(record.get("flag"), Some("true"));
        assert_eq!(record.get("space"), Some(" padded "));
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let document = parse_document("a,b\r\n1,2\r\n\r\n3,4\r\n").unwrap();
        assert_eq!(values(&document, "b"), vec!["2", "4"]);
    }

    #[test]
    fn test_short_row_is_padded() {
        let document = parse_document("a,b,c\n1\n").unwrap();
        let record = &document.records[0];
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("a"), Some("1"));
        assert_eq!(record.get("b"), Some(""));
        assert_eq!(record.get("c"), Some(""));
    }

    #[test]
    fn test_long_row_is_rejected() {
        let err = parse_document("a,b\n1,2\n1,2,3\n").unwrap_err();
        match err {
            ConvertError::MalformedInput { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("found 3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_header_is_rejected() {
        let err = parse_document("id,name,id\n1,x,2\n").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedInput { line: 1, .. }));
    }

    #[test]
    fn test_unterminated_quote_is_rejected() {
        let err = parse_document("a,b\n1,2\n\"open,3\n4,5\n").unwrap_err();
        match err {
            ConvertError::MalformedInput { line, message } => {
                assert_eq!(line, 3);
                assert_eq!(message, "unterminated quoted field");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_and_header_only() {
        assert!(parse_document("").unwrap().is_empty());
        assert!(parse_document("a,b\n").unwrap().is_empty());
        assert!(parse_document("\u{feff}a,b").unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_quote_line() {
        assert_eq!(unterminated_quote_line("a,b\n1,2\n"), None);
        assert_eq!(unterminated_quote_line("\"x\"\"y\",z\n"), None);
        assert_eq!(unterminated_quote_line("a\"b,c\n"), None);
        assert_eq!(unterminated_quote_line("a,\"b\n\nc"), Some(1));
        assert_eq!(unterminated_quote_line("a\n\"\"\"\n"), Some(2));
    }
}
