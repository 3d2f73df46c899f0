use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config::PageConfig;
use crate::error::{Result, ScrawlError};

const DEFAULT_HEADER: &str = "<!DOCTYPE html>
<html>
<head>
<meta charset=\"utf-8\" />
<title>Meeting Minutes</title>
</head>
<body>
";

const DEFAULT_FOOTER: &str = "</body>
</html>
";

const DEFAULT_INDEX_INTRO: &str = "<h2>Meeting Minutes</h2>
<p>Minutes, resolutions and audio logs for every recorded meeting.</p>
";

const CONTENT_OPEN: &str =
    "<div><div><div class=\"container\"><div class=\"row\"><div class=\"col-md-8 col-md-offset-2\">";
const CONTENT_CLOSE: &str = "</div></div></div></div></div>";

/// Site header and footer placed around every generated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageShell {
    header: String,
    footer: String,
    index_intro: String,
}

impl Default for PageShell {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            index_intro: DEFAULT_INDEX_INTRO.to_string(),
        }
    }
}

impl PageShell {
    pub fn new(header: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            footer: footer.into(),
            ..Self::default()
        }
    }

    pub fn with_index_intro(mut self, intro: impl Into<String>) -> Self {
        self.index_intro = intro.into();
        self
    }

    /// Read the configured partials; unset ones fall back to the built-in page.
    pub fn load(config: &PageConfig) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            header: read_partial(config.header_path.as_deref())?.unwrap_or(defaults.header),
            footer: read_partial(config.footer_path.as_deref())?.unwrap_or(defaults.footer),
            index_intro: read_partial(config.index_intro_path.as_deref())?
                .unwrap_or(defaults.index_intro),
        })
    }

    /// Full page for one meeting's HTML minutes.
    pub fn wrap_minutes(&self, minutes: &str) -> String {
        format!(
            "{}{CONTENT_OPEN}{minutes}{CONTENT_CLOSE}{}",
            self.header, self.footer
        )
    }

    /// Full page for the archive index.
    pub fn wrap_index(&self, listing: &str) -> String {
        format!(
            "{}<div id=\"info\">{}{listing}</div>{}",
            self.header, self.index_intro, self.footer
        )
    }
}

fn read_partial(path: Option<&Path>) -> Result<Option<String>> {
    let Some(path) = path else {
        return Ok(None);
    };
    debug!("Reading page partial {}", path.display());
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| ScrawlError::ReadFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_wrap_minutes_places_fragment_between_partials() {
        let shell = PageShell::new("<header>", "<footer>");
        let page = shell.wrap_minutes("<h1>Minutes</h1>");

        assert!(page.starts_with("<header><div><div><div class=\"container\">"));
        assert!(page.contains("col-md-offset-2\"><h1>Minutes</h1></div>"));
        assert!(page.ends_with("</div></div></div></div></div><footer>"));
    }

    #[test]
    fn test_wrap_index_uses_intro() {
        let shell = PageShell::new("H", "F").with_index_intro("<p>intro</p>");
        assert_eq!(
            shell.wrap_index("<h3>x</h3>"),
            "H<div id=\"info\"><p>intro</p><h3>x</h3></div>F"
        );
    }

    #[test]
    fn test_load_reads_configured_partials() {
        let dir = TempDir::new().unwrap();
        let header = dir.path().join("header.html");
        fs::write(&header, "<html><body class=\"site\">").unwrap();

        let config = PageConfig {
            header_path: Some(header),
            ..PageConfig::default()
        };
        let shell = PageShell::load(&config).unwrap();

        assert!(shell.wrap_minutes("").starts_with("<html><body class=\"site\">"));
        assert!(shell.wrap_minutes("").ends_with(DEFAULT_FOOTER));
    }

    #[test]
    fn test_load_missing_partial_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = PageConfig {
            footer_path: Some(dir.path().join("missing.html")),
            ..PageConfig::default()
        };

        let err = PageShell::load(&config).unwrap_err();
        assert!(matches!(err, ScrawlError::ReadFile { .. }));
    }
}
