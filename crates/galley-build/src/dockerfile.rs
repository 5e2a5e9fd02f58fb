use galley_core::{Result, Steamapp};

/// Image the fetch stage starts from.
const STEAMCMD_IMAGE: &str = "steamcmd/steamcmd";
/// Alias of the fetch stage, referenced by the runtime stage's COPY.
const STEAMCMD_STAGE: &str = "steamcmd";
/// System user the server runs as.
const STEAM_USER: &str = "steam";
/// steamcmd install directory in the fetch stage.
const INSTALL_DIR: &str = "/mnt";
/// Where the fetched app lands in the runtime stage.
const STEAM_HOME: &str = "/home/steam";

/// Render the Dockerfile for an optional steamapp.
///
/// An absent descriptor renders the empty string without validation.
///
/// # Errors
///
/// Fails with [`galley_core::Error::MissingBetaPassword`] when the
/// descriptor selects a non-public branch without a usable password.
pub fn render(steamapp: Option<&Steamapp>) -> Result<String> {
    match steamapp {
        Some(steamapp) => DockerfileGenerator::new(steamapp).render(),
        None => Ok(String::new()),
    }
}

/// Renders the two-stage Dockerfile for a steamapp.
///
/// The output is assembled from an ordered sequence of sections. Optional
/// sections (apt packages, execs, ENTRYPOINT, CMD) render as empty strings
/// when unset, which keeps their blank-line slot in the joined output.
pub struct DockerfileGenerator<'a> {
    steamapp: &'a Steamapp,
}

impl<'a> DockerfileGenerator<'a> {
    pub fn new(steamapp: &'a Steamapp) -> Self {
        Self { steamapp }
    }

    /// Render the Dockerfile.
    ///
    /// # Errors
    ///
    /// Fails with [`galley_core::Error::MissingBetaPassword`] before any
    /// output is assembled; there is no partial render.
    pub fn render(&self) -> Result<String> {
        self.steamapp.validate()?;

        tracing::debug!(
            app_id = self.steamapp.app_id,
            beta = self.steamapp.is_beta(),
            "rendering Dockerfile"
        );

        let sections = [
            self.fetch_stage(),
            String::new(),
            format!("FROM {}", self.steamapp.base_image),
            self.apt_install(),
            user_setup(),
            format!(
                "COPY --from={STEAMCMD_STAGE} --chown={STEAM_USER}:{STEAM_USER} {INSTALL_DIR} {STEAM_HOME}"
            ),
            self.exec_chain(),
            format!("USER {STEAM_USER}"),
            self.entrypoint_directive(),
            self.cmd_directive(),
        ];

        Ok(sections.join("\n"))
    }

    /// Fetch stage: create the `steam` user, then run steamcmd
    /// non-interactively to install the app into [`INSTALL_DIR`].
    fn fetch_stage(&self) -> String {
        let steamapp = self.steamapp;

        // validate() has run, so a beta branch implies a usable password.
        let beta_flags = if steamapp.is_beta() {
            format!(
                " -beta {} -betapassword {}",
                steamapp.branch.as_deref().unwrap_or_default(),
                steamapp.beta_password.as_deref().unwrap_or_default(),
            )
        } else {
            String::new()
        };

        [
            format!("FROM {STEAMCMD_IMAGE} AS {STEAMCMD_STAGE}"),
            format!("RUN groupadd --system {STEAM_USER} \\"),
            format!(
                "  && useradd --system --gid {STEAM_USER} --shell /bin/bash --create-home {STEAM_USER} \\"
            ),
            "  && steamcmd \\".to_owned(),
            format!("    +force_install_dir {INSTALL_DIR} \\"),
            "    +login anonymous \\".to_owned(),
            format!(
                "    @sSteamCmdForcePlatformType {} \\",
                steamapp.platform_type
            ),
            format!("    +app_update {}{} \\", steamapp.app_id, beta_flags),
            "    +quit".to_owned(),
        ]
        .join("\n")
    }

    /// `apt-get install` block for the runtime stage, one continued line per
    /// package. Empty when no packages are requested.
    fn apt_install(&self) -> String {
        let packages = &self.steamapp.apt_packages;
        if packages.is_empty() {
            return String::new();
        }

        let mut lines = vec![
            "RUN apt-get update -y \\".to_owned(),
            "  && apt-get install -y --no-install-recommends \\".to_owned(),
        ];
        lines.extend(packages.iter().map(|pkg| format!("    {pkg} \\")));
        lines.push("  && rm -rf /var/lib/apt/lists/* \\".to_owned());
        lines.push("  && apt-get clean".to_owned());
        lines.join("\n")
    }

    /// Single RUN chaining every exec with `&&`. A lone exec renders with no
    /// continuation; the last command never carries a trailing backslash.
    fn exec_chain(&self) -> String {
        let Some((first, rest)) = self.steamapp.execs.split_first() else {
            return String::new();
        };

        if rest.is_empty() {
            return format!("RUN {first}");
        }

        let mut lines = vec![format!("RUN {first} \\")];
        for (i, exec) in rest.iter().enumerate() {
            if i + 1 == rest.len() {
                lines.push(format!("  && {exec}"));
            } else {
                lines.push(format!("  && {exec} \\"));
            }
        }
        lines.join("\n")
    }

    fn entrypoint_directive(&self) -> String {
        if self.steamapp.entrypoint.is_empty() {
            String::new()
        } else {
            format!("ENTRYPOINT {}", arg_vector(&self.steamapp.entrypoint))
        }
    }

    fn cmd_directive(&self) -> String {
        if self.steamapp.cmd.is_empty() {
            String::new()
        } else {
            format!("CMD {}", arg_vector(&self.steamapp.cmd))
        }
    }
}

/// User setup in the runtime stage. Stages share no filesystem state, so the
/// `steam` user must be created again.
fn user_setup() -> String {
    [
        format!("RUN groupadd --system {STEAM_USER} \\"),
        format!(
            "  && useradd --system --gid {STEAM_USER} --shell /bin/bash --create-home {STEAM_USER}"
        ),
    ]
    .join("\n")
}

/// JSON-style argument vector, as ENTRYPOINT/CMD expect: `["a", "b"]`.
fn arg_vector(args: &[String]) -> String {
    let quoted: Vec<String> = args.iter().map(|arg| format!("\"{arg}\"")).collect();
    format!("[{}]", quoted.join(", "))
}
