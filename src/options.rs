//! Resolved generation options and the fixed engine catalogues.

use clap::ValueEnum;
use std::path::PathBuf;

/// Options record driving a single generation run. Immutable once the
/// front end has resolved it.
#[derive(Debug, Clone)]
pub struct Options {
    pub destination: PathBuf,
    pub view: Option<ViewEngine>,
    pub css: CssEngine,
    pub force: bool,
    pub git: bool,
}

/// View engines with built-in view fragments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ViewEngine {
    #[default]
    Ejs,
    Pug,
    Hbs,
}

impl ViewEngine {
    /// Engine identifier. The npm package, the `app.set('view engine', ..)`
    /// value and the fragment bucket all share it.
    pub fn name(&self) -> &'static str {
        match self {
            ViewEngine::Ejs => "ejs",
            ViewEngine::Pug => "pug",
            ViewEngine::Hbs => "hbs",
        }
    }

    /// Semver range of the engine's runtime package.
    pub fn version_req(&self) -> &'static str {
        match self {
            ViewEngine::Ejs => "~2.6.1",
            ViewEngine::Pug => "2.0.0-beta11",
            ViewEngine::Hbs => "~4.0.4",
        }
    }
}

/// Stylesheet engines. `Plain` means a plain CSS sheet and no middleware;
/// it is not selectable on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CssEngine {
    #[value(skip)]
    #[default]
    Plain,
    Less,
    Sass,
    Stylus,
    Compass,
}

impl CssEngine {
    /// Extension of the stylesheet fragment copied into public/stylesheets.
    pub fn stylesheet_ext(&self) -> &'static str {
        match self {
            CssEngine::Plain => "css",
            CssEngine::Less => "less",
            CssEngine::Sass => "sass",
            CssEngine::Stylus => "styl",
            CssEngine::Compass => "scss",
        }
    }
}
