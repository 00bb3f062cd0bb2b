use std::sync::LazyLock;

use regex::Regex;

/// First character of each word
static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w").expect("static pattern"));

/// Derive a display name from an invitee's email.
///
/// Takes the local part, turns the first `.` into a space, then upper-cases
/// the first character of every word: `jane.doe@x.com` becomes `Jane Doe`.
/// Only the first dot is replaced, so `john.a.smith` becomes `John A.Smith`.
/// Word starts are Unicode-aware: `élodie.martin` becomes `Élodie Martin`.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let spaced = local.replacen('.', " ", 1);
    WORD_START
        .replace_all(&spaced, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Avatar initials: the first character of each space-separated word.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_local_part_becomes_two_words() {
        assert_eq!(display_name_from_email("jane.doe@x.com"), "Jane Doe");
    }

    #[test]
    fn only_the_first_dot_is_replaced() {
        assert_eq!(display_name_from_email("john.a.smith@x.com"), "John A.Smith");
    }

    #[test]
    fn undotted_local_part_is_capitalized() {
        assert_eq!(display_name_from_email("bob@studio.io"), "Bob");
        assert_eq!(display_name_from_email("mary-kate@x.com"), "Mary-Kate");
    }

    #[test]
    fn missing_at_sign_uses_whole_string() {
        assert_eq!(display_name_from_email("ops.team"), "Ops Team");
        assert_eq!(display_name_from_email(""), "");
    }

    #[test]
    fn word_starts_are_unicode_aware() {
        assert_eq!(display_name_from_email("élodie.martin@x.com"), "Élodie Martin");
        assert_eq!(display_name_from_email("zoë.ångström@x.com"), "Zoë Ångström");
    }

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(initials("Justin Wilson"), "JW");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }
}
