use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::forms::LoginForm;

/// Validate the login form and echo what was submitted.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let form = LoginForm {
            username: username.clone(),
            password: password.clone(),
        };

        let submitted = form.validate()?;

        println!("You submitted the following values:");
        println!("{}", serde_json::to_string_pretty(&submitted)?);
    }

    Ok(())
}
