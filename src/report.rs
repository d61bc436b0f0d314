//! Post-generation instructions printed after a successful run.

use std::path::Path;

/// True when launched from a Windows command shell (cmd), which needs
/// `SET` syntax for environment variables. MinGW-style shells on Windows
/// export `_` the way POSIX shells do.
pub fn is_windows_command_shell() -> bool {
    cfg!(windows) && std::env::var_os("_").is_none()
}

/// Prints the change-directory/install/run hints.
pub fn print_instructions(destination: &Path, app_name: &str, windows_command_shell: bool) {
    let prompt = if windows_command_shell { ">" } else { "$" };

    println!();
    if destination != Path::new(".") {
        println!("   change directory:");
        println!("     {} cd {}", prompt, destination.display());
        println!();
    }
    println!("   install dependencies:");
    println!("     {} npm install", prompt);
    println!();
    println!("   run the app:");
    if windows_command_shell {
        println!("     {} SET DEBUG={}:* & npm start", prompt, app_name);
    } else {
        println!("     {} DEBUG={}:* npm start", prompt, app_name);
    }
    println!();
}
