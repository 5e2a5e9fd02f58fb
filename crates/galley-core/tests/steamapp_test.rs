use galley_core::{BRANCH_PUBLIC, Error, PlatformType, Steamapp};
use proptest::prelude::*;
use tempfile::TempDir;

// ── Serde defaults ──

#[test]
fn minimal_json_fills_defaults() {
    let steamapp: Steamapp = serde_json::from_str(r#"{"app_id": 896660}"#).unwrap();

    assert_eq!(steamapp.app_id, 896660);
    assert_eq!(steamapp.platform_type, PlatformType::Linux);
    assert_eq!(steamapp.branch, None);
    assert_eq!(steamapp.beta_password, None);
    assert!(steamapp.base_image.starts_with("docker.io/library/debian@sha256:"));
    assert!(steamapp.apt_packages.is_empty());
    assert!(steamapp.execs.is_empty());
    assert!(steamapp.entrypoint.is_empty());
    assert!(steamapp.cmd.is_empty());
}

#[test]
fn platform_type_deserializes_lowercase_tokens() {
    let steamapp: Steamapp =
        serde_json::from_str(r#"{"app_id": 2857200, "platform_type": "windows"}"#).unwrap();
    assert_eq!(steamapp.platform_type, PlatformType::Windows);
    assert_eq!(steamapp.platform_type.to_string(), "windows");
}

#[test]
fn unknown_platform_type_is_rejected() {
    let result: Result<Steamapp, _> =
        serde_json::from_str(r#"{"app_id": 2857200, "platform_type": "freebsd"}"#);
    assert!(result.is_err());
}

#[test]
fn new_matches_serde_defaults() {
    let from_json: Steamapp = serde_json::from_str(r#"{"app_id": 896660}"#).unwrap();
    let constructed = Steamapp::new(896660);

    assert_eq!(constructed.base_image, from_json.base_image);
    assert_eq!(constructed.platform_type, from_json.platform_type);
    assert_eq!(constructed.branch, from_json.branch);
}

// ── is_beta / validate ──

#[test]
fn absent_and_public_branches_are_not_beta() {
    assert!(!Steamapp::new(896660).is_beta());

    let public = Steamapp {
        branch: Some(BRANCH_PUBLIC.to_owned()),
        ..Steamapp::new(896660)
    };
    assert!(!public.is_beta());
}

#[test]
fn empty_branch_counts_as_absent() {
    let steamapp = Steamapp {
        branch: Some(String::new()),
        ..Steamapp::new(896660)
    };

    assert!(!steamapp.is_beta());
    assert!(steamapp.validate().is_ok());
}

#[test]
fn non_public_branch_is_beta() {
    let steamapp = Steamapp {
        branch: Some("public-test".to_owned()),
        ..Steamapp::new(896660)
    };
    assert!(steamapp.is_beta());
}

#[test]
fn validate_rejects_beta_without_password() {
    let steamapp = Steamapp {
        branch: Some("experimental".to_owned()),
        ..Steamapp::new(896660)
    };

    let err = steamapp.validate().unwrap_err();
    match err {
        Error::MissingBetaPassword { branch } => assert_eq!(branch, "experimental"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validate_rejects_beta_with_empty_password() {
    let steamapp = Steamapp {
        branch: Some("experimental".to_owned()),
        beta_password: Some(String::new()),
        ..Steamapp::new(896660)
    };
    assert!(steamapp.validate().is_err());
}

#[test]
fn validate_accepts_beta_with_password() {
    let steamapp = Steamapp {
        branch: Some("experimental".to_owned()),
        beta_password: Some("p4ss".to_owned()),
        ..Steamapp::new(896660)
    };
    assert!(steamapp.validate().is_ok());
}

#[test]
fn validate_accepts_public_branch_without_password() {
    let steamapp = Steamapp {
        branch: Some(BRANCH_PUBLIC.to_owned()),
        ..Steamapp::new(896660)
    };
    assert!(steamapp.validate().is_ok());
}

// ── Descriptor file loading ──

#[test]
fn load_reads_json_descriptor() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("valheim.json");
    std::fs::write(
        &path,
        r#"{"app_id": 896660, "branch": "public-test", "beta_password": "yesimadebackups"}"#,
    )
    .unwrap();

    let steamapp = Steamapp::load(&path).unwrap();
    assert_eq!(steamapp.app_id, 896660);
    assert_eq!(steamapp.branch.as_deref(), Some("public-test"));
}

#[test]
fn load_reads_toml_descriptor() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("steamapp.toml");
    std::fs::write(
        &path,
        "app_id = 1963720\nplatform_type = \"linux\"\napt_packages = [\"curl\"]\n",
    )
    .unwrap();

    let steamapp = Steamapp::load(&path).unwrap();
    assert_eq!(steamapp.app_id, 1963720);
    assert_eq!(steamapp.apt_packages, vec!["curl".to_owned()]);
}

#[test]
fn load_missing_file_reports_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing.toml");

    let err = Steamapp::load(&path).unwrap_err();
    assert!(matches!(err, Error::DescriptorLoad { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn load_rejects_unsupported_extension() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("steamapp.yaml");
    std::fs::write(&path, "app_id: 896660\n").unwrap();

    let err = Steamapp::load(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedDescriptorFormat { .. }));
}

#[test]
fn load_reports_malformed_toml() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("steamapp.toml");
    std::fs::write(&path, "app_id = \"not a number\"\n").unwrap();

    let err = Steamapp::load(&path).unwrap_err();
    assert!(matches!(err, Error::DescriptorParseToml { .. }));
}

// ── Properties ──

proptest! {
    #[test]
    fn validate_gate_is_exact(
        branch in proptest::option::of("[a-z0-9-]{0,12}"),
        password in proptest::option::of("[ -~]{0,16}"),
    ) {
        let steamapp = Steamapp {
            branch: branch.clone(),
            beta_password: password.clone(),
            ..Steamapp::new(896660)
        };

        let beta = branch
            .as_deref()
            .is_some_and(|b| !b.is_empty() && b != BRANCH_PUBLIC);
        let usable_password = password.as_deref().is_some_and(|p| !p.is_empty());
        prop_assert_eq!(steamapp.validate().is_ok(), !beta || usable_password);
    }
}
