use exgen::context::{build_context, GenerationContext, InitStatement};
use exgen::options::{CssEngine, Options, ViewEngine};
use std::path::PathBuf;

fn options(view: Option<ViewEngine>, css: CssEngine) -> Options {
    Options {
        destination: PathBuf::from("demo"),
        view,
        css,
        force: false,
        git: false,
    }
}

#[test]
fn test_default_view_context() {
    let context = build_context("demo", &options(Some(ViewEngine::Ejs), CssEngine::Plain));

    assert_eq!(context.app_name, "demo");
    assert_eq!(context.view_engine, Some(ViewEngine::Ejs));
    assert_eq!(
        context.init_statements,
        vec![
            InitStatement::RequestLogger,
            InitStatement::UrlencodedBodyParser,
            InitStatement::CookieParser,
            InitStatement::StaticAssets,
        ]
    );

    let mut packages: Vec<_> = context.dependencies.keys().cloned().collect();
    packages.sort();
    assert_eq!(packages, ["cookie-parser", "debug", "ejs", "express", "http-errors", "morgan"]);
}

#[test]
fn test_no_view_context_switches_body_parser() {
    let context = build_context("demo", &options(None, CssEngine::Plain));

    assert_eq!(context.view_engine, None);
    assert!(context.init_statements.contains(&InitStatement::JsonBodyParser));
    assert!(!context.init_statements.contains(&InitStatement::UrlencodedBodyParser));
    assert!(!context.dependencies.contains_key("http-errors"));
    assert!(!context.dependencies.contains_key("ejs"));
}

#[test]
fn test_route_mounts_keep_registration_order() {
    let context = build_context("demo", &options(Some(ViewEngine::Ejs), CssEngine::Plain));
    let mounts: Vec<_> = context
        .route_mounts
        .iter()
        .map(|mount| (mount.url_path.as_str(), mount.binding.as_str()))
        .collect();
    assert_eq!(mounts, [("/", "indexRouter"), ("/users", "usersRouter")]);

    assert_eq!(context.local_modules["indexRouter"], "./routes/index");
    assert_eq!(context.local_modules["usersRouter"], "./routes/users");
}

#[test]
fn test_css_engine_registers_middleware_before_static() {
    let context = build_context("demo", &options(Some(ViewEngine::Ejs), CssEngine::Less));

    assert_eq!(context.dependencies["less-middleware"], "~2.2.1");
    assert_eq!(context.third_party_modules["lessMiddleware"], "less-middleware");

    let positions = &context.init_statements;
    let less = positions.iter().position(|s| *s == InitStatement::LessMiddleware).unwrap();
    let statics = positions.iter().position(|s| *s == InitStatement::StaticAssets).unwrap();
    assert!(less < statics);
}

#[test]
fn test_view_engine_dependency_versions() {
    let engines = [
        (ViewEngine::Ejs, "ejs", "~2.6.1"),
        (ViewEngine::Pug, "pug", "2.0.0-beta11"),
        (ViewEngine::Hbs, "hbs", "~4.0.4"),
    ];

    for (engine, package, version) in engines {
        let context = build_context("demo", &options(Some(engine), CssEngine::Plain));
        assert_eq!(context.dependencies[package], version);
        assert_eq!(context.dependencies["http-errors"], "~1.6.3");
    }
}

#[test]
fn test_render_context_sorts_imports() {
    let context = build_context("demo", &options(Some(ViewEngine::Ejs), CssEngine::Plain));
    let bindings = context.render_context();

    let third_party: Vec<_> = bindings["third_party_modules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|module| module["binding"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(third_party, ["cookieParser", "logger"]);

    assert_eq!(bindings["view"], "ejs");
    assert_eq!(bindings["name"], "demo");
    assert_eq!(
        bindings["init_statements"][0],
        serde_json::json!("logger('dev')")
    );
}

#[test]
fn test_no_view_render_context_has_null_view() {
    let context = build_context("demo", &options(None, CssEngine::Plain));
    let bindings = context.render_context();
    assert!(bindings["view"].is_null());
}

#[test]
#[should_panic(expected = "registered twice")]
fn test_duplicate_binding_is_a_defect() {
    let mut context = GenerationContext::new("demo");
    context.add_third_party_module("logger", "morgan");
    context.add_third_party_module("logger", "pino");
}

#[test]
#[should_panic(expected = "unregistered binding")]
fn test_mount_requires_registered_module() {
    let mut context = GenerationContext::new("demo");
    context.mount_route("/", "indexRouter");
}
