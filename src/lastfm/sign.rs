/// Computes the `api_sig` value for an authenticated Last.fm call.
///
/// Canonicalization rule: sort parameter names in byte order, concatenate
/// each name immediately followed by its value with no delimiter, append
/// the shared secret, and take the lowercase-hex MD5 digest of the UTF-8
/// bytes. The same rule covers both authentication flows and scrobble
/// submission; only the parameter set differs.
///
/// `format` and `callback` are transport parameters and must not be part
/// of the signed set; callers add `format=json` to the request after
/// signing.
///
/// The function is pure: identical parameter sets yield identical
/// digests regardless of insertion order.
/// Extends a signed parameter set with its computed `api_sig` and the
/// unsigned `format=json` transport parameter, producing the final
/// request body or query string. Callers sign and send the same slice,
/// so the two sets cannot drift apart.
pub fn signed_params<'a>(
    params: &[(&'a str, &'a str)],
    sig: &'a str,
) -> Vec<(&'a str, &'a str)> {
    let mut out = params.to_vec();
    out.push(("api_sig", sig));
    out.push(("format", "json"));
    out
}

pub fn api_signature(params: &[(&str, &str)], secret: &str) -> String {
    let mut sorted: Vec<(&str, &str)> = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let mut base = String::new();
    for (name, value) in sorted {
        base.push_str(name);
        base.push_str(value);
    }
    base.push_str(secret);

    format!("{:x}", md5::compute(base.as_bytes()))
}
