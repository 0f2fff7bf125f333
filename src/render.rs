//! Presentation layer: turns a [`View`] into an HTML page, JSON or plain
//! text.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::core::{BoardSnapshot, View, BOARD_SIZE};

const EMBEDDED_INDEX: &str = include_str!("../assets/index.html");
const EMBEDDED_STYLESHEET: &str = include_str!("../assets/style.css");
const TABLE_END: &str = "</table></body></html>";

/// Static page fragments served alongside the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    index: Option<String>,
    stylesheet: Option<String>,
}

impl Assets {
    /// Assets compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            index: Some(EMBEDDED_INDEX.to_string()),
            stylesheet: Some(EMBEDDED_STYLESHEET.to_string()),
        }
    }

    /// Load `index.html` and `style.css` from `dir`. Missing files are
    /// remembered as absent and answered with 404.
    pub fn from_dir(dir: &Path) -> io::Result<Self> {
        if !dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("asset directory {} does not exist", dir.display()),
            ));
        }
        Ok(Self {
            index: read_optional(&dir.join("index.html"))?,
            stylesheet: read_optional(&dir.join("style.css"))?,
        })
    }

    pub fn new(index: Option<String>, stylesheet: Option<String>) -> Self {
        Self { index, stylesheet }
    }

    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }
}

impl Default for Assets {
    fn default() -> Self {
        Self::embedded()
    }
}

fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("asset {} not found", path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Headline shown for a terminal view, `None` while a game is running.
pub fn banner(view: &View) -> Option<&'static str> {
    match view {
        View::Restarting => Some("Restarting game..."),
        View::GameOver => Some("Game Over"),
        View::YouWin => Some("You Win"),
        View::Board(_) => None,
    }
}

/// Full HTML page for `view`. Returns `None` when the board page is needed
/// but no index asset is available.
pub fn render_html(view: &View, assets: &Assets) -> Option<String> {
    match view {
        View::Board(snapshot) => assets.index().map(|head| render_board_page(head, snapshot)),
        _ => banner(view).map(render_banner_page),
    }
}

/// Self-refreshing page that sends the browser back to the board after 3s.
pub fn render_banner_page(title: &str) -> String {
    format!(
        "<html><head><meta http-equiv=\"refresh\" content=\"3; url=/\"></head>\
         <body><h1>{}</h1></body></html>",
        escape_html(title)
    )
}

/// Index head, score line and the visibility table.
pub fn render_board_page(head: &str, snapshot: &BoardSnapshot) -> String {
    let n = BOARD_SIZE as usize;
    let mut page = String::with_capacity(head.len() + 2048);
    page.push_str(head);
    let _ = write!(
        page,
        "<h1>Score: {} | Turns: {} </h1>",
        snapshot.score, snapshot.turns_left
    );
    page.push_str("<table><tr><td></td>");
    for col in 0..n {
        let _ = write!(page, "<td>{}</td>", col);
    }
    page.push_str("</tr>");
    for (row, cells) in snapshot.cells.iter().enumerate() {
        let _ = write!(page, "<tr><td>{}</td>", row);
        for cell in cells {
            let glyph = cell.glyph();
            if glyph == ' ' {
                page.push_str("<td>&nbsp;</td>");
            } else {
                let _ = write!(page, "<td>{}</td>", glyph);
            }
        }
        page.push_str("</tr>");
    }
    page.push_str(TABLE_END);
    page
}

/// JSON form of `view`, as served under `/api`.
pub fn render_json(view: &View) -> serde_json::Result<String> {
    serde_json::to_string(view)
}

/// Plain-text rendering for the terminal.
pub fn render_text(view: &View) -> String {
    let snapshot = match view {
        View::Board(snapshot) => snapshot,
        _ => return banner(view).unwrap_or_default().to_string(),
    };
    let mut out = String::new();
    let _ = writeln!(out, "Score: {} | Turns: {}", snapshot.score, snapshot.turns_left);
    out.push_str("  ");
    for col in 0..BOARD_SIZE as usize {
        let _ = write!(out, " {}", col);
    }
    out.push('\n');
    for (row, cells) in snapshot.cells.iter().enumerate() {
        let _ = write!(out, "{} ", row);
        for cell in cells {
            let glyph = match cell.glyph() {
                ' ' => '.',
                g => g,
            };
            let _ = write!(out, " {}", glyph);
        }
        out.push('\n');
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
