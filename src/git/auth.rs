//! Git authentication callbacks
//!
//! libgit2 calls the credentials callback again after every rejected
//! attempt, so each strategy is tried at most once per operation:
//! 1. default credentials (negotiate/NTLM)
//! 2. SSH agent, then key files from ~/.ssh/
//! 3. git credential helpers
//! 4. anonymous username/password for public HTTPS remotes

use std::cell::Cell;

use git2::{Cred, CredentialType, Error, ErrorClass, ErrorCode, RemoteCallbacks};

const SSH_KEY_NAMES: &[&str] = &["id_ed25519", "id_ecdsa", "id_rsa"];

#[derive(Default)]
struct Attempts {
    default: Cell<bool>,
    username: Cell<bool>,
    ssh_agent: Cell<bool>,
    ssh_key: Cell<usize>,
    helper: Cell<bool>,
    anonymous: Cell<bool>,
}

fn auth_error(message: &str) -> Error {
    Error::new(ErrorCode::Auth, ErrorClass::Net, message)
}

fn ssh_key_credentials(username: &str, start: usize) -> Option<(usize, Cred)> {
    let ssh_dir = dirs::home_dir()?.join(".ssh");

    SSH_KEY_NAMES
        .iter()
        .enumerate()
        .skip(start)
        .find_map(|(index, key_name)| {
            let private_key = ssh_dir.join(key_name);
            if !private_key.exists() {
                return None;
            }
            let public_key = ssh_dir.join(format!("{key_name}.pub"));
            let public_key = public_key.exists().then_some(public_key);
            Cred::ssh_key(username, public_key.as_deref(), &private_key, None)
                .ok()
                .map(|cred| (index, cred))
        })
}

/// Install credential callbacks on `callbacks`
pub fn setup_auth_callbacks(callbacks: &mut RemoteCallbacks<'_>) {
    let attempts = Attempts::default();

    callbacks.credentials(move |url, username_from_url, allowed| {
        if allowed.contains(CredentialType::DEFAULT) && !attempts.default.replace(true) {
            return Cred::default();
        }

        if allowed.contains(CredentialType::USERNAME) && !attempts.username.replace(true) {
            return Cred::username(username_from_url.unwrap_or("git"));
        }

        if allowed.contains(CredentialType::SSH_KEY) {
            let username = username_from_url.unwrap_or("git");
            if !attempts.ssh_agent.replace(true) {
                if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }
            }
            if let Some((index, cred)) = ssh_key_credentials(username, attempts.ssh_key.get()) {
                attempts.ssh_key.set(index + 1);
                return Ok(cred);
            }
            attempts.ssh_key.set(SSH_KEY_NAMES.len());
        }

        if allowed.contains(CredentialType::USER_PASS_PLAINTEXT) {
            if !attempts.helper.replace(true) {
                if let Ok(config) = git2::Config::open_default() {
                    if let Ok(cred) = Cred::credential_helper(&config, url, username_from_url) {
                        return Ok(cred);
                    }
                }
            }
            if !attempts.anonymous.replace(true) {
                return Cred::userpass_plaintext(username_from_url.unwrap_or(""), "");
            }
        }

        Err(auth_error("authentication failed"))
    });
}
