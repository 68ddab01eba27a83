use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::parsing::{ParseError, ParseOptions, blocks::Document, parse_reader};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Parse a markdown file, reading it line by line
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    log::debug!("parsing {}", path.display());
    Ok(parse_reader(BufReader::new(file), options)?)
}

/// Write rendered output, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Where the HTML for `input` goes: same stem with an `.html` extension,
/// next to the input or inside `output_dir`.
pub fn html_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let html = input.with_extension("html");
    match (output_dir, html.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::BlockKind;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_parse_file_success() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "doc.md", "# Title\r\n\r\n[x][ref]\r\n\r\n[ref]: /target\r\n");

        let doc = parse_file(&path, &ParseOptions::default()).unwrap();
        let kinds: Vec<_> = doc.blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading(1),
                BlockKind::SectionBreak,
                BlockKind::Paragraph,
                BlockKind::SectionBreak,
                BlockKind::LinkReference,
            ]
        );
        assert_eq!(doc.blocks[2].content(), Some(r#"<a href="/target">x</a>"#));
    }

    #[test]
    fn test_parse_file_not_found() {
        let dir = create_test_dir();
        let result = parse_file(&dir.path().join("missing.md"), &ParseOptions::default());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_parse_file_invalid_utf8() {
        let dir = create_test_dir();
        let path = dir.path().join("bad.md");
        fs::write(&path, [b'a', 0xff, b'\n']).unwrap();
        let result = parse_file(&path, &ParseOptions::default());
        assert!(matches!(result, Err(IoError::Parse(ParseError::Io(_)))));
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let dir = create_test_dir();
        let path = dir.path().join("out").join("nested").join("doc.html");

        write_file(&path, "<p>hi</p>\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>\n");
    }

    #[test]
    fn test_html_path_for() {
        assert_eq!(
            html_path_for(Path::new("notes/a.md"), None),
            PathBuf::from("notes/a.html")
        );
        assert_eq!(
            html_path_for(Path::new("notes/a.md"), Some(Path::new("site"))),
            PathBuf::from("site/a.html")
        );
    }
}
