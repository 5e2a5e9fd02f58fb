use std::path::Path;

use anyhow::Context;
use galley_build::DockerfileGenerator;
use galley_core::Steamapp;

/// Render a descriptor's Dockerfile to stdout or to a file.
pub fn render(file: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let steamapp = Steamapp::load(file)?;
    let dockerfile = DockerfileGenerator::new(&steamapp).render()?;
    tracing::debug!(bytes = dockerfile.len(), "rendered Dockerfile");

    match output {
        Some(path) => {
            std::fs::write(path, &dockerfile)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote Dockerfile to {}", path.display());
        }
        None => println!("{dockerfile}"),
    }

    Ok(())
}
