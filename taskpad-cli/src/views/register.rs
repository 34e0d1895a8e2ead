//! Register view - create an account in the user directory

use anyhow::Result;
use dialoguer::{Input, Password, Select};
use taskpad_core::{Error, TaskpadContext};

use super::Flow;
use crate::output;

pub fn run(ctx: &mut TaskpadContext) -> Result<Flow> {
    println!();
    output::info("Taskpad — Register");

    let choice = Select::new()
        .items(&["Create account", "Back to login", "Quit"])
        .default(0)
        .interact()?;

    match choice {
        0 => create_account(ctx),
        1 => {
            ctx.auth.switch_to_login();
            Ok(Flow::Continue)
        }
        _ => Ok(Flow::Quit),
    }
}

fn create_account(ctx: &mut TaskpadContext) -> Result<Flow> {
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    match ctx
        .auth
        .submit_registration(&mut ctx.directory, &username, &password)
    {
        Ok(account) => {
            // Registration redirects to login; it does not sign in.
            output::success(&format!(
                "Account '{}' created. Please sign in.",
                account.username
            ));
            Ok(Flow::Continue)
        }
        Err(e @ Error::PasswordPolicy(_)) => {
            output::error(&e.to_string());
            Ok(Flow::Continue)
        }
        Err(e) => Err(e.into()),
    }
}
