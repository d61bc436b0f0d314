//! Tree materialization: creates the output directory tree, copies static
//! fragments, renders the composite templates and writes the manifest.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog;
use crate::context::GenerationContext;
use crate::error::Result;
use crate::manifest::PackageManifest;
use crate::options::Options;
use crate::renderer::TemplateRenderer;

const APP_TEMPLATE: &str = "js/app.js.j2";
const STARTUP_TEMPLATE: &str = "js/www.j2";

pub struct Materializer<'a> {
    renderer: &'a dyn TemplateRenderer,
    context: &'a GenerationContext,
    options: &'a Options,
}

impl<'a> Materializer<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        context: &'a GenerationContext,
        options: &'a Options,
    ) -> Self {
        Self { renderer, context, options }
    }

    /// Writes the whole output tree.
    ///
    /// Steps run strictly in sequence; the first filesystem error aborts
    /// the run and leaves the partial tree in place (re-running with
    /// `--force` is the recovery path, there is no rollback).
    pub fn materialize(&self) -> Result<()> {
        if self.options.destination != Path::new(".") {
            self.create_dir("")?;
        }
        self.create_dir("public")?;
        self.create_dir("public/javascript")?;
        self.create_dir("public/images")?;
        self.create_dir("public/stylesheets")?;
        self.copy_bucket(
            &format!("css/*.{}", self.options.css.stylesheet_ext()),
            "public/stylesheets",
        )?;

        self.create_dir("routes")?;
        self.copy_bucket("js/routes/*", "routes")?;

        if let Some(engine) = self.options.view {
            self.create_dir("views")?;
            self.copy_bucket(&format!("{}/*", engine.name()), "views")?;
        } else {
            self.write_file("public/index.html", catalog::get("html/index.html").body, false)?;
        }

        let bindings = self.context.render_context();
        let app_source = self.renderer.render(catalog::get(APP_TEMPLATE).body, &bindings)?;
        self.write_file("app.js", &app_source, false)?;

        self.create_dir("bin")?;
        let startup_script = self.renderer.render(catalog::get(STARTUP_TEMPLATE).body, &bindings)?;
        self.write_file("bin/www", &startup_script, true)?;

        let manifest = PackageManifest::from_context(self.context);
        self.write_file("package.json", &manifest.to_json()?, false)?;

        if self.options.git {
            self.write_file(".gitignore", catalog::get("js/gitignore").body, false)?;
        }

        Ok(())
    }

    fn copy_bucket(&self, pattern: &str, target_dir: &str) -> Result<()> {
        for fragment in catalog::matching(pattern)? {
            debug!("copying fragment {} into {}", fragment.name, target_dir);
            let target = format!("{}/{}", target_dir, fragment.file_name());
            self.write_file(&target, fragment.body, false)?;
        }
        Ok(())
    }

    fn create_dir(&self, relative: &str) -> Result<()> {
        let path = self.target_path(relative);
        fs::create_dir_all(&path)?;
        set_mode(&path, 0o755)?;
        report_created(&path, true);
        Ok(())
    }

    fn write_file(&self, relative: &str, content: &str, executable: bool) -> Result<()> {
        let path = self.target_path(relative);
        fs::write(&path, content)?;
        if executable {
            set_mode(&path, 0o755)?;
        }
        report_created(&path, false);
        Ok(())
    }

    fn target_path(&self, relative: &str) -> PathBuf {
        if relative.is_empty() {
            self.options.destination.clone()
        } else {
            self.options.destination.join(relative)
        }
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

// Creation lines are contract output consumed by external tooling;
// directories carry a trailing separator.
fn report_created(path: &Path, directory: bool) {
    let separator = if directory { "/" } else { "" };
    println!("   create : {}{}", path.display(), separator);
}
