use crate::output::{print_json, print_table};
use pitchforge_core::identity::Directory;
use pitchforge_core::types::Role;
use std::str::FromStr;

/// Authenticate against the mock directory and report the account's role.
pub fn login(email: &str, password: &str, json: bool) -> anyhow::Result<()> {
    let directory = Directory::with_seed_users();
    let user = directory.authenticate(email, password)?;

    if json {
        print_json(user)?;
    } else {
        println!("Signed in as {} ({})", user.name, user.role);
    }
    Ok(())
}

/// List directory accounts, optionally filtered by role.
pub fn users(role: Option<&str>, json: bool) -> anyhow::Result<()> {
    let directory = Directory::with_seed_users();
    let users: Vec<_> = match role {
        Some(r) => directory.list_by_role(Role::from_str(r)?),
        None => {
            let mut all = Vec::new();
            for role in [Role::Customer, Role::TeamManager, Role::TeamMember] {
                all.extend(directory.list_by_role(role));
            }
            all
        }
    };

    if json {
        print_json(&users)?;
        return Ok(());
    }
    let rows = users
        .iter()
        .map(|u| {
            vec![
                u.id.clone(),
                u.role.to_string(),
                u.email.clone(),
                u.name.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "ROLE", "EMAIL", "NAME"], rows);
    Ok(())
}
