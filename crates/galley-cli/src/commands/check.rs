use std::path::Path;

use galley_core::{BRANCH_PUBLIC, Steamapp};

/// Load a descriptor and check the beta-password invariant.
pub fn check(file: &Path) -> anyhow::Result<()> {
    let steamapp = Steamapp::load(file)?;
    steamapp.validate()?;

    println!(
        "{}: ok (app {}, branch {})",
        file.display(),
        steamapp.app_id,
        steamapp.branch.as_deref().unwrap_or(BRANCH_PUBLIC),
    );
    Ok(())
}
