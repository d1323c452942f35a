//! Quote-aware CSV line tokenizer
//!
//! Splits one logical CSV row into trimmed field strings. The scanner is
//! deliberately permissive: source tables are hand-edited, so embedded
//! commas, quoted fields, and doubled-quote escapes must all parse. The
//! only hard failure is a quote left open at end of line, and that is
//! reported per-row so the table reader can skip the row and continue.

use thiserror::Error;

/// Maximum characters of the offending line included in error messages
const PREVIEW_LEN: usize = 40;

/// Per-row tokenizer failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `"` opened quote-mode and the line ended before it was closed
    #[error("line {line}: unterminated quoted field near '{preview}'")]
    UnterminatedQuote {
        /// 1-indexed line number within the source file
        line: usize,
        /// Truncated copy of the offending line
        preview: String,
    },
}

/// Tokenize one CSV line into an ordered sequence of trimmed fields.
///
/// Rules:
/// - `"` toggles quote-mode; `""` while inside quote-mode emits a
///   literal quote and consumes both characters
/// - `,` outside quote-mode ends the current field; inside quote-mode it
///   is literal content
/// - every emitted field is trimmed of surrounding whitespace
/// - end of line flushes the final field (a bare line yields one field)
///
/// # Examples
/// ```
/// use folio_common::csv::tokenize_line;
///
/// let fields = tokenize_line(r#"a,"b,c",d"#, 1).unwrap();
/// assert_eq!(fields, vec!["a", "b,c", "d"]);
/// ```
pub fn tokenize_line(line: &str, line_no: usize) -> Result<Vec<String>, ParseError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Doubled quote inside a quoted field is a literal quote
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    if in_quotes {
        let preview: String = line.chars().take(PREVIEW_LEN).collect();
        return Err(ParseError::UnterminatedQuote {
            line: line_no,
            preview,
        });
    }

    fields.push(current.trim().to_string());
    Ok(fields)
}
