//! Label markup lexer using logos
//!
//! Labels are plain text with a small set of inline tags:
//! `<br>` (or a newline) breaks the line, `<b>`/`</b>` and `<i>`/`</i>`
//! toggle bold and italic. Anything else, including a stray `<`, is text.

use logos::Logos;

/// Byte range in label source
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[regex(r"<br */?>")]
    #[regex(r"\r?\n")]
    LineBreak,

    #[token("<b>")]
    BoldOpen,
    #[token("</b>")]
    BoldClose,
    #[token("<i>")]
    ItalicOpen,
    #[token("</i>")]
    ItalicClose,

    #[regex(r"[^<\r\n]+", |lex| lex.slice().to_string())]
    Text(String),
}

/// Lex label markup into tokens with spans; unrecognized input becomes text
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input).spanned().map(|(tok, span)| match tok {
        Ok(t) => (t, span),
        Err(()) => (Token::Text(input[span.clone()].to_string()), span),
    })
}

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

/// One rendered line of a label
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub runs: Vec<Run>,
}

impl Line {
    /// Plain text of the line without markup
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Number of characters, used for width estimation
    pub fn char_count(&self) -> usize {
        self.runs.iter().map(|r| r.text.chars().count()).sum()
    }

    fn push(&mut self, text: &str, bold: bool, italic: bool) {
        if let Some(last) = self.runs.last_mut() {
            if last.bold == bold && last.italic == italic {
                last.text.push_str(text);
                return;
            }
        }
        self.runs.push(Run {
            text: text.to_string(),
            bold,
            italic,
        });
    }
}

/// A parsed label: one or more lines of styled runs
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub lines: Vec<Line>,
}

impl Label {
    /// True when no line carries any text
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.runs.is_empty())
    }

    /// Character count of the longest line
    pub fn max_line_chars(&self) -> usize {
        self.lines.iter().map(Line::char_count).max().unwrap_or(0)
    }
}

/// Parse label markup into lines
pub fn parse(markup: &str) -> Label {
    let mut lines = vec![Line::default()];
    let mut bold = false;
    let mut italic = false;

    for (token, _) in lex(markup) {
        match token {
            Token::LineBreak => lines.push(Line::default()),
            Token::BoldOpen => bold = true,
            Token::BoldClose => bold = false,
            Token::ItalicOpen => italic = true,
            Token::ItalicClose => italic = false,
            Token::Text(text) => {
                if let Some(line) = lines.last_mut() {
                    line.push(&text, bold, italic);
                }
            }
        }
    }

    Label { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(label: &Label) -> Vec<String> {
        label.lines.iter().map(Line::text).collect()
    }

    #[test]
    fn test_line_break_tokens() {
        let tokens: Vec<_> = lex("a<br>b\nc<br/>d").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Text("a".to_string()),
                Token::LineBreak,
                Token::Text("b".to_string()),
                Token::LineBreak,
                Token::Text("c".to_string()),
                Token::LineBreak,
                Token::Text("d".to_string()),
            ]
        );
    }

    #[test]
    fn test_style_tokens() {
        let tokens: Vec<_> = lex("<b>x</b><i>y</i>").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::BoldOpen,
                Token::Text("x".to_string()),
                Token::BoldClose,
                Token::ItalicOpen,
                Token::Text("y".to_string()),
                Token::ItalicClose,
            ]
        );
    }

    #[test]
    fn test_parse_bulleted_label() {
        let label = parse("Controls<br>• Metrics<br>• Time Range");
        assert_eq!(plain(&label), vec!["Controls", "• Metrics", "• Time Range"]);
        assert_eq!(label.max_line_chars(), 12);
    }

    #[test]
    fn test_parse_styled_runs() {
        let label = parse("<b>Summary</b> Stats");
        assert_eq!(
            label.lines[0].runs,
            vec![
                Run {
                    text: "Summary".to_string(),
                    bold: true,
                    italic: false
                },
                Run {
                    text: " Stats".to_string(),
                    bold: false,
                    italic: false
                },
            ]
        );
    }

    #[test]
    fn test_stray_angle_bracket_is_text() {
        let label = parse("a < b");
        assert_eq!(plain(&label), vec!["a < b"]);
        assert_eq!(label.lines[0].runs.len(), 1);
    }

    #[test]
    fn test_empty_label() {
        let label = parse("");
        assert!(label.is_empty());
        assert_eq!(label.lines.len(), 1);
        assert_eq!(label.max_line_chars(), 0);
    }

    #[test]
    fn test_trailing_break_keeps_blank_line() {
        let label = parse("Secondary<br>");
        assert_eq!(plain(&label), vec!["Secondary", ""]);
    }
}
