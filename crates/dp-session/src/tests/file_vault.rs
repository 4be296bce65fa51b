use crate::vault::SessionVault;
use crate::{FileVault, VaultError};

use dp_core::{UserIdentity, UserRole};
use tempfile::TempDir;

fn vault_in(temp: &TempDir) -> FileVault {
    FileVault::new(temp.path().join("session.json"))
}

#[test]
fn given_missing_file_when_load_then_absent_without_corruption() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);

    let loaded = vault.load().unwrap();

    assert!(loaded.identity.is_none());
    assert!(loaded.corruption.is_none());
}

#[test]
fn given_stored_identity_when_load_then_round_trips() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    let user = UserIdentity::for_login("jane@example.com", UserRole::Patient);

    vault.store(&user).unwrap();
    let loaded = vault.load().unwrap();

    assert_eq!(loaded.identity, Some(user));
}

#[test]
fn given_stored_identity_when_file_read_raw_then_uses_wire_field_names() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    let user = UserIdentity::for_login("drsmith.dentist@clinic.com", UserRole::Dentist);

    vault.store(&user).unwrap();

    let raw = std::fs::read_to_string(temp.path().join("session.json")).unwrap();
    assert!(raw.contains("\"userType\": \"dentist\""));
    assert!(raw.contains("\"email\""));
}

#[test]
fn given_hand_written_record_with_string_id_when_load_then_not_treated_as_corrupt() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    std::fs::write(
        temp.path().join("session.json"),
        r#"{"id": "x7k2m9p", "name": "jane", "email": "jane@example.com", "userType": "patient"}"#,
    )
    .unwrap();

    let loaded = vault.load().unwrap();

    assert!(loaded.corruption.is_none());
    let identity = loaded.identity.unwrap();
    assert_eq!(identity.id, "x7k2m9p");
    assert_eq!(identity.email, "jane@example.com");
}

#[test]
fn given_missing_parent_dir_when_store_then_creates_it() {
    let temp = TempDir::new().unwrap();
    let vault = FileVault::new(temp.path().join("nested/dir/session.json"));
    let user = UserIdentity::for_login("jane@example.com", UserRole::Patient);

    vault.store(&user).unwrap();

    assert!(vault.load().unwrap().identity.is_some());
}

#[test]
fn given_corrupt_file_when_load_then_reports_corruption_not_error() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    std::fs::write(temp.path().join("session.json"), "{ definitely not json").unwrap();

    let loaded = vault.load().unwrap();

    assert!(loaded.identity.is_none());
    assert!(loaded.corruption.is_some());
}

#[test]
fn given_corrupt_file_when_backed_up_then_original_replaced_by_backup() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    std::fs::write(temp.path().join("session.json"), "garbage").unwrap();

    let backup = vault.backup_corrupted().unwrap().unwrap();

    assert!(backup.exists());
    assert!(!temp.path().join("session.json").exists());
    assert!(
        backup
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("session.json.corrupted.")
    );
}

#[test]
fn given_missing_file_when_backed_up_then_none() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);

    assert!(vault.backup_corrupted().unwrap().is_none());
}

#[test]
fn given_missing_file_when_clear_then_ok() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);

    assert!(vault.clear().is_ok());
}

#[test]
fn given_stored_identity_when_clear_then_subsequent_load_is_absent() {
    let temp = TempDir::new().unwrap();
    let vault = vault_in(&temp);
    let user = UserIdentity::for_login("jane@example.com", UserRole::Patient);
    vault.store(&user).unwrap();

    vault.clear().unwrap();

    assert!(vault.load().unwrap().identity.is_none());
}

#[test]
fn given_unreadable_path_when_load_then_file_read_error() {
    let temp = TempDir::new().unwrap();
    // A directory at the slot path is readable via exists() but not as a file
    let dir_path = temp.path().join("session.json");
    std::fs::create_dir(&dir_path).unwrap();
    let vault = FileVault::new(dir_path);

    let result = vault.load();

    assert!(matches!(result, Err(VaultError::FileRead { .. })));
    assert!(result.unwrap_err().is_transient());
}
