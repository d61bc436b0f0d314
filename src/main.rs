//! Entry point for the generate binary: wires the front end, destination
//! guard, context builder and tree materializer together.

use exgen::{
    cli::{get_args, Args},
    constants::FALLBACK_APP_NAME,
    context::build_context,
    error::{default_error_handler, Error, Result},
    guard::{check_destination, Outcome},
    logger::init_logger,
    materializer::Materializer,
    name::derive_app_name,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    report,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the raw flags into the options record
/// 2. Gates on the destination directory (the only suspension point)
/// 3. Derives the application name from the destination path
/// 4. Accumulates the generation context from the options
/// 5. Materializes the output tree and reports the follow-up steps
fn run(args: Args) -> Result<()> {
    let options = args.into_options();
    let prompter = DialoguerPrompter::new();

    if check_destination(&options.destination, options.force, &prompter)? == Outcome::Aborted {
        return Err(Error::Aborted);
    }

    let derived = derive_app_name(&options.destination.to_string_lossy());
    let app_name =
        if derived.is_empty() { FALLBACK_APP_NAME.to_string() } else { derived };

    let context = build_context(&app_name, &options);
    let renderer = MiniJinjaRenderer::new();

    Materializer::new(&renderer, &context, &options).materialize()?;

    report::print_instructions(
        &options.destination,
        &context.app_name,
        report::is_windows_command_shell(),
    );

    Ok(())
}
