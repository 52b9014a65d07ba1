use crate::ui::messages::warning;
use std::io::{self, Write};
use std::path::Path;

/// Ask before replacing an existing file. Anything but `y`/`yes` is a no.
pub fn confirm_overwrite(path: &Path) -> io::Result<bool> {
    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
