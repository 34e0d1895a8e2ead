//! Login view - sign in against the user directory

use anyhow::Result;
use dialoguer::{Input, Password, Select};
use taskpad_core::{Error, TaskpadContext};

use super::Flow;
use crate::output;

pub fn run(ctx: &mut TaskpadContext) -> Result<Flow> {
    println!();
    output::info("Taskpad — Login");

    let choice = Select::new()
        .items(&["Sign in", "Create an account", "Quit"])
        .default(0)
        .interact()?;

    match choice {
        0 => sign_in(ctx),
        1 => {
            ctx.auth.switch_to_register();
            Ok(Flow::Continue)
        }
        _ => Ok(Flow::Quit),
    }
}

fn sign_in(ctx: &mut TaskpadContext) -> Result<Flow> {
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    match ctx.auth.submit_credentials(&ctx.directory, &username, &password) {
        Ok(account) => {
            output::success(&format!("Welcome, {}", account.username));
            Ok(Flow::Continue)
        }
        // A failed login is a notice, not an error exit.
        Err(e @ Error::InvalidCredentials) => {
            output::error(&e.to_string());
            Ok(Flow::Continue)
        }
        Err(e) => Err(e.into()),
    }
}
