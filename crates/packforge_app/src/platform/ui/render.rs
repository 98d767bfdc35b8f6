//! Console rendering of the wizard view model.

use std::path::Path;

use packforge_core::WizardViewModel;

use super::constants;

/// Renders the page header, fields, and panels for one round-trip.
pub fn page(view: &WizardViewModel) {
    println!();
    println!("=== {} ===", view.page);
    match view.page {
        "SetName" => {
            println!("Package name: {}", view.package_name);
            println!(
                "Commands: {} | {}<value> | {}",
                constants::CMD_NEXT,
                constants::CMD_NAME_PREFIX,
                constants::CMD_QUIT
            );
        }
        "Building" => println!("Building package, please wait..."),
        "LastPage" => {
            if view.success_visible {
                println!("The package has been generated.");
                println!("Result file: {}", view.result_file);
                println!(
                    "Commands: {} | {}",
                    constants::CMD_DOWNLOAD,
                    constants::CMD_QUIT
                );
            }
        }
        _ => {}
    }
    if let Some(text) = &view.failure_text {
        println!("FAILED: {text}");
    }
    if let Some(question) = &view.pending_question {
        println!("{question} (yes/no)");
    }
}

pub fn alert(text: &str) {
    println!("! {text}");
}

pub fn focus(control: &str) {
    println!("(focus: {control})");
}

pub fn download(path: &Path) {
    println!("Download ready: {}", path.display());
}
