use super::*;

// =============================================================================
// hash_password
// =============================================================================

#[test]
fn hash_password_matches_known_digest() {
    assert_eq!(hash_password("password"), DEMO_PASSWORD_SHA256);
}

#[test]
fn hash_password_is_64_lowercase_hex() {
    let digest = hash_password("correct horse");
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

// =============================================================================
// demo directory
// =============================================================================

#[test]
fn demo_accounts_verify_with_password() {
    let users = UserDirectory::demo();
    assert_eq!(users.len(), 3);
    let ranger = users.verify("ranger1", "password").unwrap();
    assert_eq!(ranger.id, "ranger1");
    assert_eq!(ranger.name, "John Ranger");
    assert_eq!(ranger.role, Role::ForestRanger);
    assert_eq!(users.verify("manager1", "password").unwrap().role, Role::RegionalManager);
    assert_eq!(users.verify("admin", "password").unwrap().region, "All Regions");
}

#[test]
fn verify_rejects_wrong_password_and_unknown_user() {
    let users = UserDirectory::demo();
    assert_eq!(users.verify("ranger1", "Password"), Err(CredentialError::WrongPassword));
    assert_eq!(users.verify("poacher", "password"), Err(CredentialError::UnknownUser));
}

#[test]
fn profile_looks_up_by_username() {
    let users = UserDirectory::demo();
    assert_eq!(users.profile("admin").map(|p| p.role), Some(Role::SuperUser));
    assert_eq!(users.profile("nobody"), None);
}

// =============================================================================
// YAML user files
// =============================================================================

const YAML: &str = r"
users:
  - username: researcher1
    password_sha256: 5E884898DA28047151D0E56F8DC6292773603D0D6AABBDD62A11EF721D1542D8
    name: Amina Researcher
    role: field_researcher
    organization: Kenya Forestry Research Institute
    region: Rift Valley
";

#[test]
fn from_yaml_keeps_unknown_roles_and_accepts_uppercase_digests() {
    let users = UserDirectory::from_yaml(YAML).unwrap();
    let profile = users.verify("researcher1", "password").unwrap();
    assert_eq!(profile.role, Role::Other("field_researcher".to_owned()));
    assert_eq!(profile.organization, "Kenya Forestry Research Institute");
}

#[test]
fn from_yaml_rejects_missing_fields() {
    let err = UserDirectory::from_yaml("users:\n  - username: x\n").unwrap_err();
    assert!(err.to_string().contains("missing field"), "{err}");
}

#[test]
fn load_reports_missing_file() {
    let path = std::env::temp_dir().join("__ecoguard_users_missing_7731__.yaml");
    let err = UserDirectory::load(&path).unwrap_err();
    assert!(matches!(err, UserFileError::Read { .. }), "{err}");
}

#[test]
fn load_rejects_empty_user_list() {
    let path = std::env::temp_dir().join(format!("__ecoguard_users_empty_{}__.yaml", std::process::id()));
    std::fs::write(&path, "users: []\n").unwrap();
    let err = UserDirectory::load(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(err, UserFileError::Empty { .. }), "{err}");
}

#[test]
fn load_reads_user_file() {
    let path = std::env::temp_dir().join(format!("__ecoguard_users_ok_{}__.yaml", std::process::id()));
    std::fs::write(&path, YAML).unwrap();
    let users = UserDirectory::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(users.len(), 1);
    assert!(users.profile("researcher1").is_some());
}
