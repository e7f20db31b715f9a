//! Injection marker helpers

use syn::{Attribute, Meta, Result};

const INJECT: &str = "inject";

/// Returns `true` if one of `attrs` is a bare `#[inject]` marker
pub(crate) fn has_inject_marker(attrs: &[Attribute]) -> Result<bool> {
    let mut found = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(INJECT)) {
        if !matches!(attr.meta, Meta::Path(_)) {
            return Err(syn::Error::new_spanned(&attr.meta, "`#[inject]` takes no arguments"));
        }
        found = true;
    }
    Ok(found)
}

/// Same as [`has_inject_marker`] but also removes the markers from `attrs`
pub(crate) fn take_inject_marker(attrs: &mut Vec<Attribute>) -> Result<bool> {
    let found = has_inject_marker(attrs)?;
    attrs.retain(|attr| !attr.path().is_ident(INJECT));
    Ok(found)
}
