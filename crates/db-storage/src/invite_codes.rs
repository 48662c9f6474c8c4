// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Invite code generation
//!
//! An invite code consists of the initials of the guest's name followed by an underscore and
//! six random hex characters, e.g. `js_0a1b2c` for *John Smith*.
use rand::Rng;
use std::fmt::Write;

string_newtype! {
    /// Token identifying a guest's personalized RSVP link
    InviteCode
}

/// Invite code stored for RSVPs that were submitted without a personalized link
pub const SINGLE_LINK: &str = "single-link";

impl InviteCode {
    pub fn single_link() -> Self {
        Self::from(SINGLE_LINK.to_owned())
    }
}

/// Returns the lowercase initials of all words in `name`.
///
/// Only ASCII letters and whitespace are kept before splitting the name into words at
/// spaces. Other whitespace such as tabs stays inside a word.
pub fn name_code(name: &str) -> String {
    let letters: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    letters
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Generates a new invite code for `name` using the thread local rng
pub fn generate(name: &str) -> InviteCode {
    generate_with_rng(name, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(name: &str, rng: &mut R) -> InviteCode {
    let suffix: [u8; 3] = rng.gen();

    let mut code = name_code(name);
    code.push('_');
    for byte in suffix {
        // Writing into a String cannot fail
        let _ = write!(code, "{byte:02x}");
    }

    InviteCode::from(code)
}

/// Generates an invite code for `name` that is not `taken` yet.
///
/// Only the random suffix is regenerated on collision.
pub fn generate_unique<F>(name: &str, taken: F) -> InviteCode
where
    F: Fn(&InviteCode) -> bool,
{
    let mut rng = rand::thread_rng();

    loop {
        let code = generate_with_rng(name, &mut rng);

        if !taken(&code) {
            return code;
        }

        log::debug!("Invite code {} is already taken, regenerating", code);
    }
}
