use assert_cmd::Command;
use predicates::str::contains;
use std::path::Path;
use tempfile::tempdir;

fn contact_list(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("STORAGE_CHOICE", "sqlite").env("CONTACTS_DB", db);
    cmd
}

#[test]
fn add_edit_delete_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let db = dir.path().join("contacts.db");

    contact_list(&db)
        .args([
            "add",
            "--name",
            "Alice",
            "--phone",
            "555-1000",
            "--email",
            "alice@x.com",
        ])
        .assert()
        .success()
        .stdout(contains("Id: 1"));

    contact_list(&db)
        .args(["edit", "--id", "1", "--name", "Alice W."])
        .assert()
        .success()
        .stdout(contains("Contact updated successfully"))
        .stdout(contains("Name: Alice W."))
        .stdout(contains("Email: alice@x.com"));

    contact_list(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Alice W."));

    contact_list(&db)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(contains("Contact deleted successfully"));

    contact_list(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No contacts found."));

    Ok(())
}

#[test]
fn unknown_ids_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let db = dir.path().join("contacts.db");

    contact_list(&db)
        .args(["add", "--name", "Wayne"])
        .assert()
        .success();

    for id in ["0", "-1", "42"] {
        contact_list(&db)
            .args(["edit", "--id", id, "--name", "Ghost"])
            .assert()
            .failure()
            .stderr(contains(format!("Contact with id {id} Not found")));

        contact_list(&db)
            .args(["delete", "--id", id])
            .assert()
            .failure()
            .stderr(contains(format!("Contact with id {id} Not found")));
    }

    // Deleting twice: the second attempt fails, the first one stands
    contact_list(&db)
        .args(["delete", "--id", "1"])
        .assert()
        .success();

    contact_list(&db)
        .args(["delete", "--id", "1"])
        .assert()
        .failure()
        .stderr(contains("Contact with id 1 Not found"));

    contact_list(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No contacts found."));

    Ok(())
}
