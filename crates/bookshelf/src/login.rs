use crate::prelude::{println, *};
use bookshelf_core::config::Config;
use bookshelf_core::login::{LoginModal, LoginPromptTrigger, ModalOutcome};
use colored::Colorize;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, clap::Args, Clone)]
pub struct LoginOptions {
    /// Accept the prompt and follow the login link (default is to cancel)
    #[arg(long)]
    confirm: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(options: LoginOptions, config: &Config, global: crate::Global) -> Result<()> {
    let trigger = LoginPromptTrigger::new();
    let modal = Arc::new(Mutex::new(LoginModal::new(config.login_path.as_str())));

    register_modal(&trigger, &modal);

    if global.verbose {
        println!("Requesting login prompt");
    }
    trigger.trigger();

    let outcome = answer(&modal, options.confirm)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("Please log in to continue.");
    match outcome {
        ModalOutcome::Navigate(path) => {
            println!("{}", format!("Redirecting to {path}").green().bold())
        }
        ModalOutcome::Dismissed => println!("{}", "Login prompt dismissed".yellow()),
    }

    Ok(())
}

/// Register a handler on `trigger` that opens `modal`.
pub fn register_modal(trigger: &LoginPromptTrigger, modal: &Arc<Mutex<LoginModal>>) {
    let modal = Arc::clone(modal);
    trigger.register(move || {
        log::debug!("Opening login modal");
        modal.lock().unwrap_or_else(PoisonError::into_inner).open();
    });
}

/// Confirm or cancel the open modal.
fn answer(modal: &Mutex<LoginModal>, confirm: bool) -> Result<ModalOutcome> {
    let mut modal = modal.lock().unwrap_or_else(PoisonError::into_inner);

    let outcome = if confirm {
        modal.confirm()
    } else {
        modal.cancel()
    };

    outcome.ok_or_else(|| eyre!(Error::ModalNotOpen))
}
