//! Scaffold a multi-page site in the current project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing pagelift...");

    let pages_dir = Path::new("src/pages");
    if !pages_dir.exists() {
        fs::create_dir_all(pages_dir).context("Failed to create pages directory")?;
    }

    let assets_dir = Path::new("assets");
    if !assets_dir.exists() {
        fs::create_dir_all(assets_dir).context("Failed to create assets directory")?;
    }

    write_scaffold(Path::new("pagelift.toml"), DEFAULT_CONFIG, yes)?;
    write_scaffold(Path::new("index.html"), DEFAULT_INDEX, yes)?;
    write_scaffold(&pages_dir.join("about.html"), DEFAULT_ABOUT, yes)?;
    write_scaffold(&pages_dir.join("contact.html"), DEFAULT_CONTACT, yes)?;
    write_scaffold(&assets_dir.join("theme.js"), THEME_TOGGLE_JS, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'pagelift dev' to start the development server.");

    Ok(())
}

fn write_scaffold(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::warn!(
            "{} already exists, skipping (use --yes to overwrite)",
            path.display()
        );
        return Ok(());
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Pagelift Configuration

[pages]
# Pages directory, relative to the project root.
# Remove to let pagelift auto-detect it.
dir = "src/pages"

# Index file, relative to the project root
index = "index.html"

[build]
# Bundler output directory
output = "dist"

[server]
# Dev server port
port = 3000

# Open the browser when the dev server starts
open = true
"#;

const DEFAULT_INDEX: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Home</title>
  </head>
  <body>
    <main>
      <h1>Home</h1>
      <nav>
        <a href="/about.html">About</a>
        <a href="/contact.html">Contact</a>
      </nav>
      <button id="themeToggle" type="button">Toggle theme</button>
    </main>
    <script src="/assets/theme.js"></script>
  </body>
</html>
"#;

const DEFAULT_ABOUT: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>About</title>
  </head>
  <body>
    <main>
      <h1>About</h1>
      <p>This page is served from the pages directory during development and
      moved to the output root by the production build.</p>
      <a href="/">Home</a>
    </main>
    <script src="/assets/theme.js"></script>
  </body>
</html>
"#;

const DEFAULT_CONTACT: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Contact</title>
  </head>
  <body>
    <main>
      <h1>Contact</h1>
      <a href="/">Home</a>
    </main>
    <script src="/assets/theme.js"></script>
  </body>
</html>
"#;

const THEME_TOGGLE_JS: &str = r##"const root = document.documentElement;

function prefersDark() {
  return (
    localStorage.theme === "dark" ||
    (!("theme" in localStorage) &&
      window.matchMedia("(prefers-color-scheme: dark)").matches)
  );
}

function applyTheme() {
  root.classList.toggle("dark", prefersDark());
}

const toggle = document.querySelector("#themeToggle");
toggle?.addEventListener("click", () => {
  localStorage.setItem("theme", prefersDark() ? "light" : "dark");
  applyTheme();
});

applyTheme();
"##;
