//! Generation context: the per-run accumulator of naming, module-binding
//! and dependency decisions consumed by the composite templates.

use indexmap::IndexMap;
use serde_json::json;

use crate::options::{CssEngine, Options, ViewEngine};

/// A single `app.use(...)` setup expression. The set is closed: snippets
/// are identifiers into a fixed table rather than free text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStatement {
    RequestLogger,
    JsonBodyParser,
    UrlencodedBodyParser,
    CookieParser,
    LessMiddleware,
    SassMiddleware,
    StylusMiddleware,
    CompassMiddleware,
    StaticAssets,
}

impl InitStatement {
    /// The argument placed inside `app.use(...)`.
    pub fn code(&self) -> &'static str {
        match self {
            InitStatement::RequestLogger => "logger('dev')",
            InitStatement::JsonBodyParser => "express.json()",
            InitStatement::UrlencodedBodyParser => "express.urlencoded({ extended: false })",
            InitStatement::CookieParser => "cookieParser()",
            InitStatement::LessMiddleware => "lessMiddleware(path.join(__dirname, 'public'))",
            InitStatement::SassMiddleware => {
                "sassMiddleware({\n  src: path.join(__dirname, 'public'),\n  dest: path.join(__dirname, 'public'),\n  indentedSyntax: true,\n  sourceMap: true\n})"
            }
            InitStatement::StylusMiddleware => "stylus.middleware(path.join(__dirname, 'public'))",
            InitStatement::CompassMiddleware => "compass({ mode: 'expanded' })",
            InitStatement::StaticAssets => "express.static(path.join(__dirname, 'public'))",
        }
    }
}

/// A route module mounted onto the application. Registration order is the
/// order routes match in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMount {
    pub url_path: String,
    pub binding: String,
}

/// Accumulator for one generation run. Built by [`build_context`], then
/// handed by shared reference to the materializer for rendering only.
#[derive(Debug)]
pub struct GenerationContext {
    pub app_name: String,
    pub local_modules: IndexMap<String, String>,
    pub third_party_modules: IndexMap<String, String>,
    pub init_statements: Vec<InitStatement>,
    pub route_mounts: Vec<RouteMount>,
    pub view_engine: Option<ViewEngine>,
    pub dependencies: IndexMap<String, String>,
}

impl GenerationContext {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            local_modules: IndexMap::new(),
            third_party_modules: IndexMap::new(),
            init_statements: Vec::new(),
            route_mounts: Vec::new(),
            view_engine: None,
            dependencies: IndexMap::new(),
        }
    }

    // The collections are write-once per key: binding names and mount paths
    // come from the fixed fragment catalogue, so a duplicate is a defect
    // there, not an input to validate.

    pub fn add_third_party_module(&mut self, binding: &str, package: &str) {
        let previous = self.third_party_modules.insert(binding.into(), package.into());
        assert!(previous.is_none(), "module binding '{binding}' registered twice");
    }

    pub fn add_local_module(&mut self, binding: &str, path: &str) {
        let previous = self.local_modules.insert(binding.into(), path.into());
        assert!(previous.is_none(), "module binding '{binding}' registered twice");
    }

    pub fn add_dependency(&mut self, package: &str, version_req: &str) {
        let previous = self.dependencies.insert(package.into(), version_req.into());
        assert!(previous.is_none(), "dependency '{package}' registered twice");
    }

    pub fn push_init(&mut self, statement: InitStatement) {
        self.init_statements.push(statement);
    }

    pub fn mount_route(&mut self, url_path: &str, binding: &str) {
        assert!(
            self.local_modules.contains_key(binding),
            "mount '{url_path}' references unregistered binding '{binding}'"
        );
        assert!(
            self.route_mounts.iter().all(|mount| mount.url_path != url_path),
            "mount path '{url_path}' registered twice"
        );
        self.route_mounts.push(RouteMount {
            url_path: url_path.into(),
            binding: binding.into(),
        });
    }

    /// Variable bindings for the composite templates. Module imports are
    /// emitted in sorted binding order; init statements and mounts keep
    /// registration order.
    pub fn render_context(&self) -> serde_json::Value {
        json!({
            "name": self.app_name,
            "view": self.view_engine.map(|engine| engine.name()),
            "third_party_modules": sorted_entries(&self.third_party_modules)
                .into_iter()
                .map(|(binding, package)| json!({ "binding": binding, "package": package }))
                .collect::<Vec<_>>(),
            "local_modules": sorted_entries(&self.local_modules)
                .into_iter()
                .map(|(binding, path)| json!({ "binding": binding, "path": path }))
                .collect::<Vec<_>>(),
            "init_statements": self.init_statements.iter().map(|s| s.code()).collect::<Vec<_>>(),
            "route_mounts": self.route_mounts.iter()
                .map(|mount| json!({ "url_path": mount.url_path, "binding": mount.binding }))
                .collect::<Vec<_>>(),
        })
    }
}

fn sorted_entries(map: &IndexMap<String, String>) -> Vec<(&String, &String)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by_key(|(binding, _)| binding.as_str());
    entries
}

/// Builds the generation context from the resolved options.
///
/// Pure over the options: no filesystem access, so equal inputs always
/// accumulate identical contexts. Features compose by plain registration;
/// the statement order below is the order they run in at startup.
pub fn build_context(app_name: &str, options: &Options) -> GenerationContext {
    let mut context = GenerationContext::new(app_name);

    // Request logging
    context.add_third_party_module("logger", "morgan");
    context.add_dependency("morgan", "~1.9.1");
    context.push_init(InitStatement::RequestLogger);

    // Body parsing: form submissions with a view engine, JSON payloads without
    if options.view.is_some() {
        context.push_init(InitStatement::UrlencodedBodyParser);
    } else {
        context.push_init(InitStatement::JsonBodyParser);
    }

    // Cookie parsing
    context.add_third_party_module("cookieParser", "cookie-parser");
    context.add_dependency("cookie-parser", "~1.4.4");
    context.push_init(InitStatement::CookieParser);

    // Stylesheet middleware, ahead of static serving so compiled output wins
    match options.css {
        CssEngine::Plain => {}
        CssEngine::Less => {
            context.add_third_party_module("lessMiddleware", "less-middleware");
            context.add_dependency("less-middleware", "~2.2.1");
            context.push_init(InitStatement::LessMiddleware);
        }
        CssEngine::Sass => {
            context.add_third_party_module("sassMiddleware", "node-sass-middleware");
            context.add_dependency("node-sass-middleware", "0.11.0");
            context.push_init(InitStatement::SassMiddleware);
        }
        CssEngine::Stylus => {
            context.add_third_party_module("stylus", "stylus");
            context.add_dependency("stylus", "0.54.5");
            context.push_init(InitStatement::StylusMiddleware);
        }
        CssEngine::Compass => {
            context.add_third_party_module("compass", "node-compass");
            context.add_dependency("node-compass", "0.2.3");
            context.push_init(InitStatement::CompassMiddleware);
        }
    }

    // Static assets
    context.push_init(InitStatement::StaticAssets);

    // Route modules; '/' must register before '/users'
    context.add_local_module("indexRouter", "./routes/index");
    context.mount_route("/", "indexRouter");
    context.add_local_module("usersRouter", "./routes/users");
    context.mount_route("/users", "usersRouter");

    // View engine
    if let Some(engine) = options.view {
        context.view_engine = Some(engine);
        context.add_dependency(engine.name(), engine.version_req());
        context.add_dependency("http-errors", "~1.6.3");
    }

    context.add_dependency("debug", "~2.6.9");
    context.add_dependency("express", "~4.16.1");

    context
}
