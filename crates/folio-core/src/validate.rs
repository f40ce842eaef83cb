//! Client-side form validation.
//!
//! These rules run before any submission; an invalid form never reaches
//! the network. The backend performs no independent validation, so this is
//! the only gate.

/// A valid email has the `local@domain.tld` shape: non-empty local part,
/// a domain containing at least one dot with non-empty labels, and no
/// whitespace anywhere.
pub fn email_is_valid(email: &str) -> bool {
  if email.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = email.split_once('@') else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  let Some((host, tld)) = domain.rsplit_once('.') else {
    return false;
  };
  !host.is_empty() && !tld.is_empty() && !host.starts_with('.') && !host.ends_with('.')
}

/// Names and phone numbers only need to be non-blank.
pub fn is_present(value: &str) -> bool {
  !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_standard_addresses() {
    assert!(email_is_valid("amgad@example.com"));
    assert!(email_is_valid("first.last@sub.domain.co"));
    assert!(email_is_valid("a+tag@d.io"));
  }

  #[test]
  fn rejects_malformed_addresses() {
    assert!(!email_is_valid(""));
    assert!(!email_is_valid("plainaddress"));
    assert!(!email_is_valid("@no-local.com"));
    assert!(!email_is_valid("no-domain@"));
    assert!(!email_is_valid("no-tld@domain"));
    assert!(!email_is_valid("two@@signs.com"));
    assert!(!email_is_valid("space in@local.com"));
    assert!(!email_is_valid("dot@.leading"));
  }

  #[test]
  fn presence_ignores_surrounding_whitespace() {
    assert!(is_present("Amgad"));
    assert!(!is_present(""));
    assert!(!is_present("   "));
    assert!(!is_present("\t\n"));
  }
}
