//! Boilerplate file generation for small web projects.
//!
//! Templates are embedded in the binary and rendered with plain
//! `{{placeholder}}` substitution. Existing files are never overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use heck::ToTitleCase;
use thiserror::Error;
use tracing::{debug, info};

const HTML_TEMPLATE: &str = include_str!("templates/index.html");
const CSS_TEMPLATE: &str = include_str!("templates/style.css");
const JS_TEMPLATE: &str = include_str!("templates/main.js");

pub const CSS_FOLDER: &str = "css";
pub const JS_FOLDER: &str = "js";
pub const IMAGES_FOLDER: &str = "imgs";

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Failed to create '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create folder '{path}': {source}")]
    FolderError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What to generate, with optional per-file base names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldSelection {
    pub html: Option<String>,
    pub css: Option<String>,
    pub js: Option<String>,
    pub images: bool,
}

impl ScaffoldSelection {
    pub fn is_empty(&self) -> bool {
        self.html.is_none() && self.css.is_none() && self.js.is_none() && !self.images
    }
}

/// Render a template by replacing each `{{key}}` with its value.
fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (key, value) in vars {
        rendered = rendered.replace(&format!("{{{{{}}}}}", key), value);
    }
    rendered
}

/// Complete a base name with an extension, falling back to a default.
pub fn prepare_file_name(name: Option<&str>, extension: &str, default: &str) -> String {
    let base = match name {
        Some(n) if !n.trim().is_empty() => n.trim(),
        _ => default,
    };

    let suffix = format!(".{}", extension);
    if base.ends_with(&suffix) {
        base.to_string()
    } else {
        format!("{}{}", base, suffix)
    }
}

/// Page title: Title Case of the project directory name, plus the file
/// name when one was given.
pub fn page_title(out_dir: &Path, file_name: Option<&str>) -> String {
    let project = out_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_title_case())
        .unwrap_or_else(|| "Project".to_string());

    match file_name {
        Some(name) if !name.trim().is_empty() => {
            format!("{} | {}", project, name.to_title_case())
        }
        _ => project,
    }
}

fn write_new_file(path: &Path, content: &str) -> Result<Option<PathBuf>, ScaffoldError> {
    if path.exists() {
        debug!(path = ?path, "File already exists, not overwriting");
        return Ok(None);
    }

    fs::write(path, content).map_err(|e| ScaffoldError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("Created {:?}", path);
    Ok(Some(path.to_path_buf()))
}

fn ensure_folder(path: &Path) -> Result<(), ScaffoldError> {
    if path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| ScaffoldError::FolderError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Create the HTML entry point, linking the CSS and JS files when those
/// are part of the selection.
///
/// Returns the created path, or `None` when the file already existed.
pub fn create_html(
    out_dir: &Path,
    file_name: Option<&str>,
    css_file_name: Option<&str>,
    js_file_name: Option<&str>,
) -> Result<Option<PathBuf>, ScaffoldError> {
    let html_file = prepare_file_name(file_name, "html", "index");
    let title = page_title(out_dir, file_name);

    let head = match css_file_name {
        Some(css) => format!(
            "  <link rel=\"stylesheet\" href=\"{}/{}\">\n",
            CSS_FOLDER,
            prepare_file_name(Some(css), "css", "style")
        ),
        None => String::new(),
    };

    let scripts = match js_file_name {
        Some(js) => format!(
            "  <script src=\"{}/{}\"></script>\n",
            JS_FOLDER,
            prepare_file_name(Some(js), "js", "main")
        ),
        None => String::new(),
    };

    let content = render_template(
        HTML_TEMPLATE,
        &[
            ("title", title.as_str()),
            ("head", head.as_str()),
            ("scripts", scripts.as_str()),
        ],
    );

    write_new_file(&out_dir.join(html_file), &content)
}

/// Create `css/<name>.css` from the stylesheet template.
pub fn create_css(
    out_dir: &Path,
    file_name: Option<&str>,
) -> Result<Option<PathBuf>, ScaffoldError> {
    let folder = out_dir.join(CSS_FOLDER);
    ensure_folder(&folder)?;

    let css_file = prepare_file_name(file_name, "css", "style");
    write_new_file(&folder.join(css_file), CSS_TEMPLATE)
}

/// Create `js/<name>.js` from the script template.
pub fn create_js(
    out_dir: &Path,
    file_name: Option<&str>,
) -> Result<Option<PathBuf>, ScaffoldError> {
    let folder = out_dir.join(JS_FOLDER);
    ensure_folder(&folder)?;

    let js_file = prepare_file_name(file_name, "js", "main");
    let title = page_title(out_dir, file_name);
    let content = render_template(JS_TEMPLATE, &[("title", title.as_str())]);

    write_new_file(&folder.join(js_file), &content)
}

/// Create the images folder with a `.gitkeep` placeholder.
pub fn create_images(out_dir: &Path) -> Result<Option<PathBuf>, ScaffoldError> {
    let folder = out_dir.join(IMAGES_FOLDER);

    if folder.exists() {
        debug!(path = ?folder, "Images folder already exists");
        return Ok(None);
    }

    ensure_folder(&folder)?;
    write_new_file(&folder.join(".gitkeep"), "")?;

    info!("Created {:?}", folder);
    Ok(Some(folder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_template() {
        let rendered = render_template("<title>{{title}}</title>", &[("title", "My Page")]);
        assert_eq!(rendered, "<title>My Page</title>");
    }

    #[test]
    fn test_render_template_leaves_unknown_placeholders() {
        let rendered = render_template("{{title}} {{unknown}}", &[("title", "x")]);
        assert_eq!(rendered, "x {{unknown}}");
    }

    #[test]
    fn test_prepare_file_name() {
        assert_eq!(prepare_file_name(None, "html", "index"), "index.html");
        assert_eq!(prepare_file_name(Some("about"), "html", "index"), "about.html");
        assert_eq!(
            prepare_file_name(Some("about.html"), "html", "index"),
            "about.html"
        );
        assert_eq!(prepare_file_name(Some(""), "css", "style"), "style.css");
    }

    #[test]
    fn test_page_title_from_directory() {
        assert_eq!(page_title(Path::new("/tmp/js_condition"), None), "Js Condition");
        assert_eq!(
            page_title(Path::new("/tmp/my-project"), Some("about")),
            "My Project | About"
        );
    }

    #[test]
    fn test_create_html_with_links() {
        let dir = tempdir().unwrap();

        let path = create_html(dir.path(), None, Some("style"), Some("main"))
            .unwrap()
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("<link rel=\"stylesheet\" href=\"css/style.css\">"));
        assert!(content.contains("<script src=\"js/main.js\"></script>"));
        assert!(!content.contains("{{"));
    }

    #[test]
    fn test_create_html_without_links() {
        let dir = tempdir().unwrap();

        let path = create_html(dir.path(), Some("about"), None, None)
            .unwrap()
            .unwrap();

        assert!(path.ends_with("about.html"));
        let content = fs::read_to_string(path).unwrap();
        assert!(!content.contains("<link"));
        assert!(!content.contains("<script"));
    }

    #[test]
    fn test_create_css_in_subfolder() {
        let dir = tempdir().unwrap();

        let path = create_css(dir.path(), None).unwrap().unwrap();

        assert_eq!(path, dir.path().join("css").join("style.css"));
        assert!(path.exists());
    }

    #[test]
    fn test_create_js_in_subfolder() {
        let dir = tempdir().unwrap();

        let path = create_js(dir.path(), Some("app")).unwrap().unwrap();

        assert_eq!(path, dir.path().join("js").join("app.js"));
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("index.html");
        fs::write(&existing, "original content").unwrap();

        let result = create_html(dir.path(), None, None, None).unwrap();

        assert!(result.is_none());
        assert_eq!(fs::read_to_string(existing).unwrap(), "original content");
    }

    #[test]
    fn test_create_images_folder() {
        let dir = tempdir().unwrap();

        let folder = create_images(dir.path()).unwrap().unwrap();

        assert!(folder.is_dir());
        assert!(folder.join(".gitkeep").exists());

        // Second call is a no-op
        assert!(create_images(dir.path()).unwrap().is_none());
    }
}
