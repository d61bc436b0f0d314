//! Read-only catalogue of the built-in template fragments.
//!
//! Fragment bodies are embedded at compile time. Names are logical paths
//! into buckets (`css/`, `js/routes/`, `ejs/`, ...); the two `.j2` entries
//! are composite templates rendered against the generation context, all
//! others are copied verbatim.

use globset::Glob;

use crate::error::Result;

/// A named, read-only template unit.
#[derive(Debug)]
pub struct Fragment {
    pub name: &'static str,
    pub body: &'static str,
}

impl Fragment {
    /// Composite fragments need the generation context to render.
    pub fn is_composite(&self) -> bool {
        self.name.ends_with(".j2")
    }

    /// Output file name: the final segment of the logical path, without
    /// the composite suffix.
    pub fn file_name(&self) -> &'static str {
        let base = self.name.rsplit('/').next().unwrap_or(self.name);
        base.strip_suffix(".j2").unwrap_or(base)
    }
}

pub const FRAGMENTS: &[Fragment] = &[
    Fragment { name: "js/app.js.j2", body: include_str!("../templates/js/app.js.j2") },
    Fragment { name: "js/www.j2", body: include_str!("../templates/js/www.j2") },
    Fragment { name: "js/gitignore", body: include_str!("../templates/js/gitignore") },
    Fragment { name: "js/routes/index.js", body: include_str!("../templates/js/routes/index.js") },
    Fragment { name: "js/routes/users.js", body: include_str!("../templates/js/routes/users.js") },
    Fragment { name: "css/style.css", body: include_str!("../templates/css/style.css") },
    Fragment { name: "css/style.less", body: include_str!("../templates/css/style.less") },
    Fragment { name: "css/style.sass", body: include_str!("../templates/css/style.sass") },
    Fragment { name: "css/style.scss", body: include_str!("../templates/css/style.scss") },
    Fragment { name: "css/style.styl", body: include_str!("../templates/css/style.styl") },
    Fragment { name: "ejs/index.ejs", body: include_str!("../templates/ejs/index.ejs") },
    Fragment { name: "ejs/error.ejs", body: include_str!("../templates/ejs/error.ejs") },
    Fragment { name: "pug/index.pug", body: include_str!("../templates/pug/index.pug") },
    Fragment { name: "pug/layout.pug", body: include_str!("../templates/pug/layout.pug") },
    Fragment { name: "pug/error.pug", body: include_str!("../templates/pug/error.pug") },
    Fragment { name: "hbs/index.hbs", body: include_str!("../templates/hbs/index.hbs") },
    Fragment { name: "hbs/layout.hbs", body: include_str!("../templates/hbs/layout.hbs") },
    Fragment { name: "hbs/error.hbs", body: include_str!("../templates/hbs/error.hbs") },
    Fragment { name: "html/index.html", body: include_str!("../templates/html/index.html") },
];

/// Looks up a single fragment by its logical name.
pub fn get(name: &str) -> &'static Fragment {
    FRAGMENTS
        .iter()
        .find(|fragment| fragment.name == name)
        // The catalogue is fixed at compile time; a missing name is a
        // defect in it, not a runtime condition.
        .unwrap_or_else(|| panic!("fragment '{name}' missing from the catalogue"))
}

/// Returns the fragments whose logical names match the glob pattern.
pub fn matching(pattern: &str) -> Result<Vec<&'static Fragment>> {
    let matcher = Glob::new(pattern)?.compile_matcher();
    Ok(FRAGMENTS.iter().filter(|fragment| matcher.is_match(fragment.name)).collect())
}
