//! Email addresses as delivered by VTEX.
//!
//! VTEX masks customer emails by appending a tenant suffix to the domain,
//! e.g. `ana@mail.com-cl` or `user@gmail.com-275481b2c9.ct.vtex.com.br`.
//! The suffix has to be stripped before the address is shown to an agent or
//! used for outbound contact.

/// Strip the VTEX tenant suffix from an email address.
///
/// Inputs without an `@` are returned unchanged. Otherwise the domain is cut
/// at its first `-` and re-joined to the local part.
///
/// ```
/// use vtex_orders_core::clean_vendor_email;
///
/// assert_eq!(clean_vendor_email("user@domain.com-tenant123"), "user@domain.com");
/// assert_eq!(clean_vendor_email("user@domain.com"), "user@domain.com");
/// assert_eq!(clean_vendor_email("not-an-email"), "not-an-email");
/// ```
#[must_use]
pub fn clean_vendor_email(email: &str) -> String {
    let Some((local, rest)) = email.split_once('@') else {
        return email.to_owned();
    };

    // Anything after a second `@` is not part of the domain.
    let domain = rest.split('@').next().unwrap_or_default();
    let domain = domain.split('-').next().unwrap_or_default();

    format!("{local}@{domain}")
}

/// Optional-aware variant of [`clean_vendor_email`]; `None` stays `None`.
#[must_use]
pub fn normalize_vendor_email(email: Option<&str>) -> Option<String> {
    email.map(clean_vendor_email)
}
