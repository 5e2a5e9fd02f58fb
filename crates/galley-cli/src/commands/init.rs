use std::path::Path;

/// Write a commented starter descriptor into the current directory.
pub fn init() -> anyhow::Result<()> {
    let descriptor_path = Path::new(super::DEFAULT_DESCRIPTOR);
    if descriptor_path.exists() {
        anyhow::bail!("{} already exists — edit it directly", super::DEFAULT_DESCRIPTOR);
    }

    let steamapp_toml = r#"# Steam application id of the dedicated server package.
# 896660 is the Valheim dedicated server.
app_id = 896660

# OS flavor steamcmd fetches depots for: "linux", "windows", or "macos".
# platform_type = "linux"

# Distribution branch. Omit (or use "public") for the default branch.
# Non-public branches require beta_password.
# branch = "public"
# beta_password = ""

# Base image of the runtime stage.
# base_image = "docker.io/library/debian:bookworm-slim"

# Debian packages installed into the runtime stage.
# apt_packages = ["ca-certificates", "libatomic1"]

# Shell commands run while assembling the runtime stage.
# execs = []

# Process entrypoint and default command.
# entrypoint = ["/home/steam/valheim_server.x86_64"]
# cmd = ["-name", "My server", "-port", "2456"]
"#;
    std::fs::write(descriptor_path, steamapp_toml)?;

    println!("Created {}", super::DEFAULT_DESCRIPTOR);
    println!();
    println!("Next steps:");
    println!();
    println!("  1. Set app_id (and branch/base_image as needed)");
    println!("  2. galley check {}", super::DEFAULT_DESCRIPTOR);
    println!("  3. galley render {} -o Dockerfile", super::DEFAULT_DESCRIPTOR);

    Ok(())
}
